//! Line classification and paragraph segmentation.

mod classifier;
mod segmenter;

pub use classifier::classify;
pub use segmenter::{segment_str, Segmenter};
