//! Conversion statistics.

use crate::model::{Paragraph, ParagraphKind};
use serde::{Deserialize, Serialize};

/// Statistics collected while converting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of paragraphs produced
    pub paragraph_count: u32,

    /// Number of header paragraphs
    pub header_count: u32,

    /// Number of unordered list paragraphs
    pub unordered_list_count: u32,

    /// Number of ordered list paragraphs
    pub ordered_list_count: u32,

    /// Number of plain text paragraphs
    pub text_count: u32,

    /// Non-empty source lines grouped into paragraphs
    pub lines_in: u32,

    /// Lines written to the sink
    pub lines_out: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a segmented, not yet tagged, paragraph.
    pub fn record_source(&mut self, paragraph: &Paragraph) {
        self.paragraph_count += 1;
        self.lines_in += paragraph.len() as u32;
        match paragraph.kind {
            ParagraphKind::Header => self.header_count += 1,
            ParagraphKind::UnorderedList => self.unordered_list_count += 1,
            ParagraphKind::OrderedList => self.ordered_list_count += 1,
            ParagraphKind::SimpleText => self.text_count += 1,
        }
    }

    /// Count the lines of a finished paragraph.
    pub fn record_output(&mut self, paragraph: &Paragraph) {
        self.lines_out += paragraph.len() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.paragraph_count += other.paragraph_count;
        self.header_count += other.header_count;
        self.unordered_list_count += other.unordered_list_count;
        self.ordered_list_count += other.ordered_list_count;
        self.text_count += other.text_count;
        self.lines_in += other.lines_in;
        self.lines_out += other.lines_out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut stats = ConversionStats::new();
        stats.record_source(&Paragraph::from_lines(
            ParagraphKind::UnorderedList,
            ["* a", "* b"],
        ));
        stats.record_source(&Paragraph::new(ParagraphKind::Header, "# T"));

        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.unordered_list_count, 1);
        assert_eq!(stats.header_count, 1);
        assert_eq!(stats.lines_in, 3);
    }

    #[test]
    fn test_merge() {
        let mut stats1 = ConversionStats {
            paragraph_count: 5,
            text_count: 2,
            ..Default::default()
        };
        let stats2 = ConversionStats {
            paragraph_count: 3,
            text_count: 1,
            lines_out: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.text_count, 3);
        assert_eq!(stats1.lines_out, 4);
    }
}
