//! Paragraph segmentation.
//!
//! The segmenter pulls raw lines from a [`LineSource`] and groups contiguous
//! lines of the same kind into a [`Paragraph`]. The first line that does not
//! belong to the current paragraph is held back as lookahead and starts the
//! next one, unless it is empty, in which case it is consumed as the
//! boundary.

use crate::model::{Paragraph, ParagraphKind};
use crate::source::{LineSource, LinesSource};

use super::classify;

/// Pull-based paragraph segmenter with one line of lookahead.
pub struct Segmenter<S> {
    source: S,
    lookahead: Option<String>,
}

impl<S: LineSource> Segmenter<S> {
    /// Create a segmenter over a line source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            lookahead: None,
        }
    }

    /// Whether more input remains.
    ///
    /// A held lookahead line always yields one more paragraph. Without one,
    /// the remaining source lines may all be empty, so
    /// [`Segmenter::next_paragraph`] can still return `None`.
    pub fn has_more(&self) -> bool {
        self.lookahead.is_some() || !self.source.at_end()
    }

    /// Produce the next paragraph, or `None` once input is exhausted.
    pub fn next_paragraph(&mut self) -> Option<Paragraph> {
        let (kind, first) = self.first_line()?;
        let mut paragraph = Paragraph::new(kind, first);

        while !self.source.at_end() {
            let line = self.source.next_line();
            if self.source.at_end() {
                break;
            }

            match classify(&line) {
                Some(next_kind) if next_kind == kind => paragraph.push_line(line),
                Some(_) => {
                    self.lookahead = Some(line);
                    break;
                }
                None => break,
            }
        }

        log::debug!("Segmented {} paragraph of {} lines", kind, paragraph.len());
        Some(paragraph)
    }

    /// Borrow the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// First classified line of the next paragraph, skipping empty lines.
    fn first_line(&mut self) -> Option<(ParagraphKind, String)> {
        if let Some(line) = self.lookahead.take() {
            if let Some(kind) = classify(&line) {
                return Some((kind, line));
            }
        }

        while !self.source.at_end() {
            let line = self.source.next_line();
            if self.source.at_end() {
                break;
            }
            if let Some(kind) = classify(&line) {
                return Some((kind, line));
            }
        }
        None
    }
}

impl<S: LineSource> Iterator for Segmenter<S> {
    type Item = Paragraph;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_paragraph()
    }
}

/// Segment in-memory text into untagged paragraphs.
pub fn segment_str(text: &str) -> Vec<Paragraph> {
    Segmenter::new(LinesSource::from_text(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(paragraphs: &[Paragraph]) -> Vec<ParagraphKind> {
        paragraphs.iter().map(|p| p.kind).collect()
    }

    #[test]
    fn test_groups_same_kind() {
        let paragraphs = segment_str("first\nsecond\nthird");
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_kind_change_is_boundary() {
        let paragraphs = segment_str("# Title\ntext\n* item\n* item two\n1. one");
        assert_eq!(
            kinds(&paragraphs),
            vec![
                ParagraphKind::Header,
                ParagraphKind::SimpleText,
                ParagraphKind::UnorderedList,
                ParagraphKind::OrderedList,
            ]
        );
        assert_eq!(paragraphs[2].lines, vec!["* item", "* item two"]);
    }

    #[test]
    fn test_empty_line_boundary() {
        let paragraphs = segment_str("# Title\n\nplain text");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].lines, vec!["# Title"]);
        assert_eq!(paragraphs[1].lines, vec!["plain text"]);
    }

    #[test]
    fn test_empty_line_splits_same_kind() {
        let paragraphs = segment_str("one\n\ntwo");
        assert_eq!(paragraphs.len(), 2);
    }

    #[test]
    fn test_consecutive_empty_lines() {
        let paragraphs = segment_str("\n\nfirst\n\n\n\nsecond\n\n");
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_lookahead_emitted_at_end() {
        let paragraphs = segment_str("text\n# Last");
        assert_eq!(kinds(&paragraphs), vec![ParagraphKind::SimpleText, ParagraphKind::Header]);
        assert_eq!(paragraphs[1].lines, vec!["# Last"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment_str("").is_empty());
        assert!(segment_str("\n\n\n").is_empty());
    }

    #[test]
    fn test_has_more() {
        let mut segmenter = Segmenter::new(LinesSource::new(["text", "# Header"]));
        assert!(segmenter.has_more());

        let first = segmenter.next_paragraph().unwrap();
        assert_eq!(first.kind, ParagraphKind::SimpleText);
        // The header is held back as lookahead
        assert!(segmenter.has_more());

        let second = segmenter.next_paragraph().unwrap();
        assert_eq!(second.kind, ParagraphKind::Header);

        assert!(segmenter.next_paragraph().is_none());
        assert!(!segmenter.has_more());
    }

    #[test]
    fn test_headers_group_together() {
        let paragraphs = segment_str("# One\n## Two");
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].len(), 2);
    }
}
