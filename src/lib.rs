//! # mdhtml
//!
//! Line-oriented conversion of lightweight Markdown to HTML fragments.
//!
//! Input is read line by line and grouped into typed paragraphs (headers,
//! unordered lists, ordered lists, plain text). Each paragraph is tagged with
//! block-level HTML and its inline emphasis markers are rewritten before it
//! is written out. No syntax tree is built and the input is never held as a
//! single string.
//!
//! ## Quick Start
//!
//! ```
//! let html = mdhtml::convert_str("# Title\n\nSome **bold** text");
//! assert_eq!(
//!     html,
//!     "<h1 id=\"Title\">Title</h1>\n<p>Some <strong>bold</strong> text</p>\n"
//! );
//! ```
//!
//! ## Supported Syntax
//!
//! - **Headers**: `#` through `######`
//! - **Lists**: `* item` and `1. item`, nested by indentation
//! - **Emphasis**: `**bold**`, `*italic*`, `~~strikeout~~`
//!
//! Links, images, code spans and tables are not recognized.

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod sink;
pub mod source;

// Re-export commonly used types
pub use convert::{convert_batch, BatchJob, Converter};
pub use error::{Error, Result};
pub use model::{Paragraph, ParagraphKind};
pub use parser::{classify, Segmenter};
pub use render::{ConversionStats, JsonFormat, LineEnding, RenderOptions};
pub use sink::{Sink, StringSink, WriterSink};
pub use source::{LineSource, LinesSource, ReaderSource};

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Convert Markdown text to HTML with default options.
///
/// # Example
///
/// ```
/// let html = mdhtml::convert_str("* one\n* two");
/// assert_eq!(html, "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n");
/// ```
pub fn convert_str(text: &str) -> String {
    convert_str_with_options(text, &RenderOptions::default())
}

/// Convert Markdown text to HTML with custom options.
pub fn convert_str_with_options(text: &str, options: &RenderOptions) -> String {
    let mut converter = Converter::new(LinesSource::from_text(text), options.clone());
    let mut sink = StringSink::with_line_ending(options.line_ending);
    while let Some(paragraph) = converter.next_paragraph() {
        sink.push_paragraph(&paragraph);
    }
    sink.into_string()
}

/// Convert a Markdown file into an HTML file.
///
/// # Arguments
///
/// * `input` - Path to the Markdown file
/// * `output` - Path of the HTML file to create
///
/// # Example
///
/// ```no_run
/// use mdhtml::convert_file;
///
/// let stats = convert_file("test.md", "result.html").unwrap();
/// println!("Paragraphs: {}", stats.paragraph_count);
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConversionStats> {
    convert_file_with_options(input, output, &RenderOptions::default())
}

/// Convert a Markdown file into an HTML file with custom options.
///
/// The input is opened before the output is created, so a missing input
/// leaves no empty output file behind.
pub fn convert_file_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &RenderOptions,
) -> Result<ConversionStats> {
    let mut converter = Converter::open(input, options.clone())?;
    let file = File::create(output)?;
    let mut sink = WriterSink::with_line_ending(BufWriter::new(file), options.line_ending);
    converter.run(&mut sink)
}

/// Convert Markdown from a reader, writing HTML to a writer.
///
/// # Example
///
/// ```
/// use mdhtml::{convert_reader, RenderOptions};
///
/// let mut out = Vec::new();
/// convert_reader("1. first".as_bytes(), &mut out, &RenderOptions::default()).unwrap();
/// assert_eq!(out, b"<ol>\n<li>first</li>\n</ol>\n");
/// ```
pub fn convert_reader<R: Read, W: Write>(
    reader: R,
    writer: W,
    options: &RenderOptions,
) -> Result<ConversionStats> {
    let mut converter = Converter::new(ReaderSource::from_reader(reader), options.clone());
    let mut sink = WriterSink::with_line_ending(writer, options.line_ending);
    converter.run(&mut sink)
}

/// Builder for converting Markdown documents.
///
/// # Example
///
/// ```no_run
/// use mdhtml::{LineEnding, MdHtml};
///
/// let stats = MdHtml::new()
///     .with_line_ending(LineEnding::CrLf)
///     .without_inline()
///     .convert_file("notes.md", "notes.html")?;
/// # Ok::<(), mdhtml::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MdHtml {
    options: RenderOptions,
}

impl MdHtml {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave inline emphasis markers untouched.
    pub fn without_inline(mut self) -> Self {
        self.options = self.options.with_inline(false);
        self
    }

    /// Normalize input to Unicode NFC.
    pub fn normalize_unicode(mut self) -> Self {
        self.options = self.options.with_unicode_normalization(true);
        self
    }

    /// Set the output line terminator.
    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.options = self.options.with_line_ending(ending);
        self
    }

    /// Options collected so far.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Convert text in memory.
    pub fn convert_str(&self, text: &str) -> String {
        convert_str_with_options(text, &self.options)
    }

    /// Convert a file into another file.
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ConversionStats> {
        convert_file_with_options(input, output, &self.options)
    }

    /// Convert from a reader into a writer.
    pub fn convert_reader<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<ConversionStats> {
        convert_reader(reader, writer, &self.options)
    }
}
