//! Integration tests for the full conversion pipeline.

use mdhtml::parser::{classify, segment_str};
use mdhtml::render::{format_inline, tag};
use mdhtml::{convert_str, Paragraph, ParagraphKind};

fn html_lines(text: &str) -> Vec<String> {
    convert_str(text).lines().map(str::to_string).collect()
}

#[test]
fn test_header_level_matches_hash_count() {
    for level in 1..=6 {
        let input = format!("{} Section {}", "#".repeat(level), level);
        let expected = format!(
            "<h{level} id=\"Section {level}\">Section {level}</h{level}>",
            level = level
        );
        assert_eq!(html_lines(&input), vec![expected]);
    }
}

#[test]
fn test_paragraph_wrapped_exactly_once() {
    for text in ["one line", "two\nlines", "three\nwhole\nlines"] {
        let html = convert_str(text);
        assert!(html.starts_with("<p>"), "{html:?}");
        assert!(html.ends_with("</p>\n"), "{html:?}");
        assert_eq!(html.matches("<p>").count(), 1);
        assert_eq!(html.matches("</p>").count(), 1);
    }
}

#[test]
fn test_bold_round_trip() {
    assert_eq!(html_lines("**X**"), vec!["<p><strong>X</strong></p>"]);
}

#[test]
fn test_tagged_lines_never_reclassify() {
    let input = "# Title\n\n* a\n  * b\n\n1. one\n2. two\n\nplain *text*";
    for line in convert_str(input).lines() {
        assert_eq!(
            classify(line),
            Some(ParagraphKind::SimpleText),
            "tagged line re-matched markup: {line:?}"
        );
    }
}

#[test]
fn test_nested_list_scenario() {
    let html = html_lines("* a\n  * b\n  * c\n* d");
    assert_eq!(
        html,
        vec![
            "<ul>",
            "<li>a</li>",
            "<ul>",
            "<li>b</li>",
            "<li>c</li>",
            "</ul>",
            "<li>d</li>",
            "</ul>",
        ]
    );
    assert_eq!(html.iter().filter(|l| *l == "<ul>").count(), 2);
    assert_eq!(html.iter().filter(|l| *l == "</ul>").count(), 2);
}

#[test]
fn test_odd_marker_scenario() {
    assert_eq!(
        html_lines("an *emphasised* word and a lone * star"),
        vec!["<p>an <em>emphasised</em> word and a lone * star</p>"]
    );
}

#[test]
fn test_empty_line_boundary_scenario() {
    let paragraphs = segment_str("# Title\n\nplain text");
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(
        html_lines("# Title\n\nplain text"),
        vec!["<h1 id=\"Title\">Title</h1>", "<p>plain text</p>"]
    );
}

#[test]
fn test_emphasis_spans_lines_within_paragraph() {
    assert_eq!(
        html_lines("a ~~struck\nout~~ b"),
        vec!["<p>a <del>struck", "out</del> b</p>"]
    );
}

#[test]
fn test_emphasis_does_not_cross_paragraphs() {
    assert_eq!(
        html_lines("open *here\n\nclose* there"),
        vec!["<p>open *here</p>", "<p>close* there</p>"]
    );
}

#[test]
fn test_emphasis_inside_list_items() {
    assert_eq!(
        html_lines("* **bold** item\n* *it* item"),
        vec![
            "<ul>",
            "<li><strong>bold</strong> item</li>",
            "<li><em>it</em> item</li>",
            "</ul>",
        ]
    );
}

#[test]
fn test_header_id_is_verbatim() {
    assert_eq!(
        html_lines("## Hello, World & Co"),
        vec!["<h2 id=\"Hello, World & Co\">Hello, World & Co</h2>"]
    );
}

#[test]
fn test_stages_compose_by_value() {
    let paragraph = Paragraph::from_lines(ParagraphKind::OrderedList, ["1. *a*", "2. b"]);
    let finished = format_inline(tag(paragraph));

    assert_eq!(finished.kind, ParagraphKind::OrderedList);
    assert_eq!(
        finished.lines,
        vec!["<ol>", "<li><em>a</em></li>", "<li>b</li>", "</ol>"]
    );
}

#[test]
fn test_mixed_document() {
    let input = "\
# Shopping

Things to buy
this week:

* fruit
  * apples
  * pears
* ~~bread~~

1. go to the shop
2. pay";

    assert_eq!(
        html_lines(input),
        vec![
            "<h1 id=\"Shopping\">Shopping</h1>",
            "<p>Things to buy",
            "this week:</p>",
            "<ul>",
            "<li>fruit</li>",
            "<ul>",
            "<li>apples</li>",
            "<li>pears</li>",
            "</ul>",
            "<li><del>bread</del></li>",
            "</ul>",
            "<ol>",
            "<li>go to the shop</li>",
            "<li>pay</li>",
            "</ol>",
        ]
    );
}
