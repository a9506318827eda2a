//! Line classification.

use crate::model::ParagraphKind;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#{1,6}\s.+").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\*\s.+").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[0-9]+\.\s.+").unwrap());

/// Classify a raw line.
///
/// Patterns are tried in priority order: header, unordered item, ordered
/// item. A non-empty line matching none of them is simple text. The empty
/// line has no kind and always ends the current paragraph.
pub fn classify(line: &str) -> Option<ParagraphKind> {
    if line.is_empty() {
        None
    } else if HEADER.is_match(line) {
        Some(ParagraphKind::Header)
    } else if UNORDERED_ITEM.is_match(line) {
        Some(ParagraphKind::UnorderedList)
    } else if ORDERED_ITEM.is_match(line) {
        Some(ParagraphKind::OrderedList)
    } else {
        Some(ParagraphKind::SimpleText)
    }
}
