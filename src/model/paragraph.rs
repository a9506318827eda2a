//! Paragraph types.

use serde::{Deserialize, Serialize};

/// Block type of a paragraph, inferred from its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphKind {
    /// ATX heading (`#` through `######`)
    Header,
    /// Bulleted list item (`* item`)
    UnorderedList,
    /// Numbered list item (`1. item`)
    OrderedList,
    /// Anything else
    SimpleText,
}

impl ParagraphKind {
    /// Short lowercase name, used in logs and dumps.
    pub fn name(&self) -> &'static str {
        match self {
            ParagraphKind::Header => "header",
            ParagraphKind::UnorderedList => "unordered_list",
            ParagraphKind::OrderedList => "ordered_list",
            ParagraphKind::SimpleText => "simple_text",
        }
    }

    /// Check if this is one of the list kinds.
    pub fn is_list(&self) -> bool {
        matches!(self, ParagraphKind::UnorderedList | ParagraphKind::OrderedList)
    }
}

impl std::fmt::Display for ParagraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A maximal run of contiguous lines sharing one block type.
///
/// Each pipeline stage takes a paragraph by value and hands back a new one,
/// so a paragraph is only ever owned by the stage working on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Block type
    pub kind: ParagraphKind,

    /// Lines in source order, without line terminators
    pub lines: Vec<String>,
}

impl Paragraph {
    /// Create a paragraph from its first line.
    pub fn new(kind: ParagraphKind, first_line: impl Into<String>) -> Self {
        Self {
            kind,
            lines: vec![first_line.into()],
        }
    }

    /// Create a paragraph from a list of lines.
    pub fn from_lines<I, S>(kind: ParagraphKind, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the paragraph has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
