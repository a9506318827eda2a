//! Parallel conversion of independent documents.

use crate::error::Result;
use crate::render::{ConversionStats, RenderOptions};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// One input/output pair of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    /// Source document
    pub input: PathBuf,
    /// Destination file
    pub output: PathBuf,
}

impl BatchJob {
    /// Create a job.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Job writing `<stem>.html` into `dir`.
    pub fn in_dir(input: impl Into<PathBuf>, dir: &Path) -> Self {
        let input = input.into();
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let output = dir.join(format!("{}.html", stem));
        Self { input, output }
    }
}

/// Convert many documents in parallel.
///
/// Each document runs through its own sequential pipeline. Results are
/// returned in job order; one failing job does not stop the others.
pub fn convert_batch(jobs: &[BatchJob], options: &RenderOptions) -> Vec<Result<ConversionStats>> {
    let results: Vec<_> = jobs
        .par_iter()
        .map(|job| crate::convert_file_with_options(&job.input, &job.output, options))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    log::info!(
        "Batch finished: {} converted, {} failed",
        results.len() - failed,
        failed
    );
    results
}
