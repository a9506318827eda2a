//! Document model types for the conversion pipeline.
//!
//! A document is never held as a whole: the pipeline moves one
//! [`Paragraph`] at a time from stage to stage.

mod paragraph;

pub use paragraph::{Paragraph, ParagraphKind};
