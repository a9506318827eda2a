//! Output sinks for finished paragraphs.

use crate::error::Result;
use crate::model::Paragraph;
use crate::render::LineEnding;
use std::io::Write;

/// Receiver of finished paragraphs.
pub trait Sink {
    /// Write every line of the paragraph, in order.
    fn write_paragraph(&mut self, paragraph: &Paragraph) -> Result<()>;

    /// Flush buffered output.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<K: Sink + ?Sized> Sink for &mut K {
    fn write_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        (**self).write_paragraph(paragraph)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// Sink writing lines to any [`Write`] implementation.
pub struct WriterSink<W: Write> {
    writer: W,
    line_ending: LineEnding,
}

impl<W: Write> WriterSink<W> {
    /// Create a sink using `\n` line endings.
    pub fn new(writer: W) -> Self {
        Self::with_line_ending(writer, LineEnding::Lf)
    }

    /// Create a sink with the given line ending.
    pub fn with_line_ending(writer: W, line_ending: LineEnding) -> Self {
        Self {
            writer,
            line_ending,
        }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        for line in &paragraph.lines {
            self.writer.write_all(line.as_bytes())?;
            self.writer.write_all(self.line_ending.as_str().as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink collecting output in memory.
#[derive(Debug, Clone, Default)]
pub struct StringSink {
    output: String,
    line_ending: LineEnding,
}

impl StringSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sink with the given line ending.
    pub fn with_line_ending(line_ending: LineEnding) -> Self {
        Self {
            output: String::new(),
            line_ending,
        }
    }

    /// Append every line of the paragraph.
    pub fn push_paragraph(&mut self, paragraph: &Paragraph) {
        for line in &paragraph.lines {
            self.output.push_str(line);
            self.output.push_str(self.line_ending.as_str());
        }
    }

    /// Output collected so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Take the collected output.
    pub fn into_string(self) -> String {
        self.output
    }
}

impl Sink for StringSink {
    fn write_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        self.push_paragraph(paragraph);
        Ok(())
    }
}
