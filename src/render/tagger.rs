//! Block-level tagging of segmented paragraphs.

use crate::model::{Paragraph, ParagraphKind};

/// Delimiter and block tags for one list flavour.
#[derive(Debug, Clone, Copy)]
struct ListTags {
    delimiter: char,
    open: &'static str,
    close: &'static str,
}

const UNORDERED: ListTags = ListTags {
    delimiter: '*',
    open: "<ul>",
    close: "</ul>",
};

const ORDERED: ListTags = ListTags {
    delimiter: '.',
    open: "<ol>",
    close: "</ol>",
};

/// Convert a paragraph into block-level HTML.
///
/// The paragraph's kind is trusted as classified; lines are not re-checked.
pub fn tag(paragraph: Paragraph) -> Paragraph {
    let Paragraph { kind, lines } = paragraph;
    let lines = match kind {
        ParagraphKind::Header => lines.iter().map(|line| tag_header(line)).collect(),
        ParagraphKind::SimpleText => tag_text(lines),
        ParagraphKind::UnorderedList => tag_list(&lines, UNORDERED),
        ParagraphKind::OrderedList => tag_list(&lines, ORDERED),
    };
    Paragraph { kind, lines }
}

/// `## Title` becomes `<h2 id="Title">Title</h2>`.
fn tag_header(line: &str) -> String {
    let rest = line.trim_start();
    let level = rest.chars().take_while(|&c| c == '#').count();
    let content = rest[level..].trim();
    format!("<h{level} id=\"{content}\">{content}</h{level}>")
}

fn tag_text(mut lines: Vec<String>) -> Vec<String> {
    if let Some(first) = lines.first_mut() {
        first.insert_str(0, "<p>");
    }
    if let Some(last) = lines.last_mut() {
        last.push_str("</p>");
    }
    lines
}

/// Nesting follows the delimiter offset of each line compared with the line
/// before it: a deeper offset opens one level, a shallower one closes one
/// level, whatever the size of the step. Only levels opened inside the list
/// are closed again at the end.
fn tag_list(lines: &[String], tags: ListTags) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(tags.open.to_string());

    let mut last_offset: Option<usize> = None;
    let mut depth: isize = 0;

    for line in lines {
        let (offset, content) = split_item(line, tags.delimiter);

        if let Some(previous) = last_offset {
            if offset > previous {
                out.push(tags.open.to_string());
                depth += 1;
            } else if offset < previous {
                out.push(tags.close.to_string());
                depth -= 1;
            }
        }
        last_offset = Some(offset);

        out.push(format!("<li>{content}</li>"));
    }

    out.extend(std::iter::repeat(tags.close.to_string()).take(depth.max(0) as usize));
    out.push(tags.close.to_string());
    out
}

/// Delimiter offset and item text following the delimiter and separator.
fn split_item(line: &str, delimiter: char) -> (usize, &str) {
    match line.find(delimiter) {
        Some(offset) => (
            offset,
            line[offset + delimiter.len_utf8()..].trim_start(),
        ),
        None => {
            let content = line.trim_start();
            (line.len() - content.len(), content)
        }
    }
}
