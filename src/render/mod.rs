//! Rendering stages turning segmented paragraphs into HTML.

mod inline;
mod json;
mod options;
mod result;
mod tagger;

pub use inline::{count_markers, format_inline, InlineMarker, BOLD, ITALIC, MARKERS, STRIKEOUT};
pub use json::{to_json, JsonFormat};
pub use options::{LineEnding, RenderOptions};
pub use result::ConversionStats;
pub use tagger::tag;

use crate::model::Paragraph;

/// Run the block and inline stages on one segmented paragraph.
pub fn render_paragraph(paragraph: Paragraph, options: &RenderOptions) -> Paragraph {
    let tagged = tag(paragraph);
    if options.inline_formatting {
        format_inline(tagged)
    } else {
        tagged
    }
}
