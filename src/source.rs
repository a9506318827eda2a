//! Line sources feeding the conversion pipeline.
//!
//! A [`LineSource`] yields raw lines one at a time. Past end of input it
//! keeps returning empty lines and reports [`LineSource::at_end`] as `true`
//! from then on.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Ordered producer of raw text lines.
pub trait LineSource {
    /// Next line without its terminator, or `""` once input is exhausted.
    fn next_line(&mut self) -> String;

    /// Whether a read past the end of input has happened.
    fn at_end(&self) -> bool;

    /// Take the error that ended the input early, if any.
    fn take_error(&mut self) -> Option<io::Error> {
        None
    }
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> String {
        (**self).next_line()
    }

    fn at_end(&self) -> bool {
        (**self).at_end()
    }

    fn take_error(&mut self) -> Option<io::Error> {
        (**self).take_error()
    }
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn next_line(&mut self) -> String {
        (**self).next_line()
    }

    fn at_end(&self) -> bool {
        (**self).at_end()
    }

    fn take_error(&mut self) -> Option<io::Error> {
        (**self).take_error()
    }
}

/// Line source over any buffered reader.
///
/// Read errors end the input early. The first one is kept and can be
/// retrieved with [`LineSource::take_error`].
pub struct ReaderSource<R> {
    reader: R,
    buf: String,
    at_end: bool,
    lines_read: usize,
    error: Option<io::Error>,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            at_end: false,
            lines_read: 0,
            error: None,
        }
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl<R: Read> ReaderSource<BufReader<R>> {
    /// Wrap an unbuffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

impl ReaderSource<BufReader<File>> {
    /// Open a file as a line source.
    ///
    /// Fails with [`Error::SourceOpen`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::SourceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> String {
        if self.at_end {
            return String::new();
        }

        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.at_end = true;
                String::new()
            }
            Ok(_) => {
                self.lines_read += 1;
                strip_terminator(&mut self.buf);
                std::mem::take(&mut self.buf)
            }
            Err(e) => {
                log::warn!("Read failed after {} lines: {}", self.lines_read, e);
                self.error = Some(e);
                self.at_end = true;
                String::new()
            }
        }
    }

    fn at_end(&self) -> bool {
        self.at_end
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

/// Line source over lines already in memory.
#[derive(Debug, Clone)]
pub struct LinesSource {
    lines: std::vec::IntoIter<String>,
    at_end: bool,
}

impl LinesSource {
    /// Create a source from a list of lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            lines: lines.into_iter(),
            at_end: false,
        }
    }

    /// Split text into lines (`\n` or `\r\n` terminated).
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }
}

impl LineSource for LinesSource {
    fn next_line(&mut self) -> String {
        match self.lines.next() {
            Some(line) => line,
            None => {
                self.at_end = true;
                String::new()
            }
        }
    }

    fn at_end(&self) -> bool {
        self.at_end
    }
}

/// Adapter applying Unicode NFC normalization to every line.
pub struct NormalizedSource<S> {
    inner: S,
    enabled: bool,
}

impl<S: LineSource> NormalizedSource<S> {
    /// Wrap a source with normalization enabled.
    pub fn new(inner: S) -> Self {
        Self::with_enabled(inner, true)
    }

    /// Wrap a source, normalizing only if `enabled` is set.
    pub fn with_enabled(inner: S, enabled: bool) -> Self {
        Self { inner, enabled }
    }

    /// Unwrap the inner source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: LineSource> LineSource for NormalizedSource<S> {
    fn next_line(&mut self) -> String {
        let line = self.inner.next_line();
        if !self.enabled || line.is_ascii() {
            line
        } else {
            line.nfc().collect()
        }
    }

    fn at_end(&self) -> bool {
        self.inner.at_end()
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.inner.take_error()
    }
}

fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
