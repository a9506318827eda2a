//! The conversion pipeline.
//!
//! [`Converter`] pulls paragraphs from a [`Segmenter`], runs them through the
//! block tagger and the inline formatter, and hands them to a [`Sink`].
//! Every stage works on one paragraph at a time.
//!
//! # Example
//!
//! ```no_run
//! use mdhtml::convert::Converter;
//! use mdhtml::sink::WriterSink;
//! use mdhtml::RenderOptions;
//! use std::fs::File;
//!
//! fn main() -> mdhtml::Result<()> {
//!     let mut converter = Converter::open("notes.md", RenderOptions::default())?;
//!     let mut sink = WriterSink::new(File::create("notes.html")?);
//!     let stats = converter.run(&mut sink)?;
//!     println!("{} paragraphs", stats.paragraph_count);
//!     Ok(())
//! }
//! ```

mod batch;

pub use batch::{convert_batch, BatchJob};

use crate::error::Result;
use crate::model::Paragraph;
use crate::parser::Segmenter;
use crate::render::{render_paragraph, ConversionStats, RenderOptions};
use crate::sink::Sink;
use crate::source::{LineSource, NormalizedSource, ReaderSource};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Pull-driven pipeline from a line source to finished paragraphs.
pub struct Converter<S> {
    segmenter: Segmenter<NormalizedSource<S>>,
    options: RenderOptions,
    stats: ConversionStats,
}

impl Converter<ReaderSource<BufReader<File>>> {
    /// Open a source file.
    ///
    /// Fails with [`crate::Error::SourceOpen`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P, options: RenderOptions) -> Result<Self> {
        let source = ReaderSource::open(path)?;
        Ok(Self::new(source, options))
    }
}

impl<S: LineSource> Converter<S> {
    /// Create a converter over a line source.
    pub fn new(source: S, options: RenderOptions) -> Self {
        let source = NormalizedSource::with_enabled(source, options.normalize_unicode);
        Self {
            segmenter: Segmenter::new(source),
            options,
            stats: ConversionStats::new(),
        }
    }

    /// Whether more input remains.
    pub fn has_more(&self) -> bool {
        self.segmenter.has_more()
    }

    /// Next finished paragraph, or `None` once input is exhausted.
    pub fn next_paragraph(&mut self) -> Option<Paragraph> {
        let paragraph = self.segmenter.next_paragraph()?;
        self.stats.record_source(&paragraph);

        let rendered = render_paragraph(paragraph, &self.options);
        self.stats.record_output(&rendered);
        Some(rendered)
    }

    /// Statistics for the paragraphs produced so far.
    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }

    /// Options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Drain the pipeline into a sink.
    ///
    /// A read error that ended the input early is returned after all
    /// paragraphs read before it have been written.
    pub fn run<K: Sink + ?Sized>(&mut self, sink: &mut K) -> Result<ConversionStats> {
        while let Some(paragraph) = self.next_paragraph() {
            sink.write_paragraph(&paragraph)?;
        }
        sink.flush()?;

        if let Some(e) = self.segmenter.source_mut().take_error() {
            return Err(e.into());
        }

        log::debug!(
            "Converted {} paragraphs ({} lines in, {} lines out)",
            self.stats.paragraph_count,
            self.stats.lines_in,
            self.stats.lines_out
        );
        Ok(self.stats.clone())
    }
}

impl<S: LineSource> Iterator for Converter<S> {
    type Item = Paragraph;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_paragraph()
    }
}
