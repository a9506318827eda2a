//! Inline emphasis rewriting.
//!
//! Markers are balanced paragraph-wide, so a span may open on one line and
//! close on a later one. Each pass turns the first two remaining occurrences
//! of a marker into an opening and a closing tag; passes repeat until fewer
//! than two occurrences are left. An unmatched last marker stays literal.

use crate::model::Paragraph;

/// A marker and the inline tags it is rewritten to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineMarker {
    /// Marker text in the source
    pub marker: &'static str,
    /// Tag replacing the first occurrence of a pair
    pub open: &'static str,
    /// Tag replacing the second occurrence of a pair
    pub close: &'static str,
}

/// `**bold**`
pub const BOLD: InlineMarker = InlineMarker {
    marker: "**",
    open: "<strong>",
    close: "</strong>",
};

/// `*italic*`
pub const ITALIC: InlineMarker = InlineMarker {
    marker: "*",
    open: "<em>",
    close: "</em>",
};

/// `~~strikeout~~`
pub const STRIKEOUT: InlineMarker = InlineMarker {
    marker: "~~",
    open: "<del>",
    close: "</del>",
};

/// Markers in the order they are resolved. Bold must come before italic,
/// since `**` contains `*`.
pub const MARKERS: [InlineMarker; 3] = [BOLD, ITALIC, STRIKEOUT];

/// Rewrite inline emphasis markers of a tagged paragraph.
pub fn format_inline(mut paragraph: Paragraph) -> Paragraph {
    for marker in MARKERS {
        let pairs = balance(&mut paragraph.lines, marker);
        if pairs > 0 {
            log::trace!("Rewrote {} {:?} pairs", pairs, marker.marker);
        }
    }
    paragraph
}

/// Count occurrences of a marker across all lines.
pub fn count_markers(lines: &[String], marker: &str) -> usize {
    lines.iter().map(|line| line.matches(marker).count()).sum()
}

/// Rewrite pairs until fewer than two markers remain. Returns the pair count.
fn balance(lines: &mut [String], marker: InlineMarker) -> usize {
    let mut pairs = 0;
    while count_markers(lines, marker.marker) >= 2 {
        rewrite_pair(lines, marker);
        pairs += 1;
    }
    pairs
}

/// Replace the first two occurrences, in line order, with open and close.
fn rewrite_pair(lines: &mut [String], marker: InlineMarker) {
    let mut replaced = 0;

    for line in lines.iter_mut() {
        let mut from = 0;
        while replaced < 2 {
            let Some(found) = line[from..].find(marker.marker) else {
                break;
            };
            let start = from + found;
            let tag = if replaced == 0 { marker.open } else { marker.close };
            line.replace_range(start..start + marker.marker.len(), tag);
            from = start + tag.len();
            replaced += 1;
        }
        if replaced == 2 {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParagraphKind;

    fn formatted(lines: &[&str]) -> Vec<String> {
        format_inline(Paragraph::from_lines(ParagraphKind::SimpleText, lines.iter().copied())).lines
    }

    #[test]
    fn test_bold() {
        assert_eq!(formatted(&["**X**"]), vec!["<strong>X</strong>"]);
    }

    #[test]
    fn test_italic_and_strikeout() {
        assert_eq!(
            formatted(&["*a* and ~~b~~"]),
            vec!["<em>a</em> and <del>b</del>"]
        );
    }

    #[test]
    fn test_bold_resolved_before_italic() {
        assert_eq!(
            formatted(&["**bold** and *italic*"]),
            vec!["<strong>bold</strong> and <em>italic</em>"]
        );
    }

    #[test]
    fn test_multiple_pairs() {
        assert_eq!(
            formatted(&["*a* *b* *c*"]),
            vec!["<em>a</em> <em>b</em> <em>c</em>"]
        );
    }

    #[test]
    fn test_odd_marker_left_literal() {
        assert_eq!(formatted(&["*a* and * star"]), vec!["<em>a</em> and * star"]);
    }

    #[test]
    fn test_single_marker_untouched() {
        assert_eq!(formatted(&["2 * 3"]), vec!["2 * 3"]);
        assert_eq!(formatted(&["~~ alone"]), vec!["~~ alone"]);
    }

    #[test]
    fn test_span_across_lines() {
        assert_eq!(
            formatted(&["start **bold", "still bold** end"]),
            vec!["start <strong>bold", "still bold</strong> end"]
        );
    }

    #[test]
    fn test_triple_star() {
        // "***" holds one bold marker followed by one italic marker
        assert_eq!(
            formatted(&["***both***"]),
            vec!["<strong><em>both</strong></em>"]
        );
    }

    #[test]
    fn test_count_markers() {
        let lines = vec!["a ** b".to_string(), "** c **".to_string()];
        assert_eq!(count_markers(&lines, "**"), 3);
        assert_eq!(count_markers(&lines, "~~"), 0);
    }
}
