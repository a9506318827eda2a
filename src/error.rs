//! Error types for mdhtml library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
///
/// The conversion pipeline itself never fails; these errors come from the
/// collaborators around it (opening, reading and writing streams).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source document could not be opened.
    #[error("Cannot open source {}: {source}", .path.display())]
    SourceOpen {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Error during rendering (JSON dumps, statistics).
    #[error("Rendering error: {0}")]
    Render(String),
}
