//! Per-file processing and sequential batch runs.

use crate::config::{ErrorPolicy, MapConfig};
use crate::entropy::{entropy_map, FieldSummary};
use crate::error::{MapError, Result};
use crate::intensity::load_intensity;
use crate::output::{output_path, write_field};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of one successfully processed image.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub window: usize,
    pub summary: Option<FieldSummary>,
}

/// An image that could not be processed.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: String,
}

/// Summary of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub processed: Vec<FileReport>,
    pub failed: Vec<FileFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed.len() + self.failed.len()
    }

    /// True when every input was processed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Loads `path`, computes its entropy map and writes the text file.
pub fn process_file(path: &Path, config: &MapConfig) -> Result<FileReport> {
    let span = crate::span_trace!("process_file", image = %path.display());
    let _guard = span.enter();

    let field = load_intensity(path)?;
    let map = entropy_map(&field, config.padding)?;

    let summary = FieldSummary::of(&map);
    if let Some(summary) = &summary {
        debug!(
            min = summary.min,
            max = summary.max,
            mean = summary.mean,
            flat = summary.is_flat(),
            "entropy range"
        );
    }

    let window = config.window_size();
    let output = output_path(path, config.output_dir.as_deref(), window);
    write_field(&map, &output, config.precision)?;
    info!(output = %output.display(), "Wrote entropy map");

    Ok(FileReport {
        input: path.to_path_buf(),
        output,
        width: map.width(),
        height: map.height(),
        window,
        summary,
    })
}

/// Processes `paths` in order.
///
/// With [`ErrorPolicy::Skip`] a failing file is logged and recorded and the
/// run continues; with [`ErrorPolicy::Abort`] the first failure ends the run
/// with [`MapError::Batch`], which carries the partial report. An unusable
/// padding fails before any file is read.
pub fn run_batch<P: AsRef<Path>>(paths: &[P], config: &MapConfig) -> Result<BatchReport> {
    config.validate()?;
    debug!(
        padding = config.padding,
        window = config.window_size(),
        files = paths.len(),
        "Starting batch"
    );

    let mut report = BatchReport::default();
    for path in paths {
        let path = path.as_ref();
        match process_file(path, config) {
            Ok(file) => report.processed.push(file),
            Err(err) => {
                let err = crate::log_error!(err, "image failed");
                report.failed.push(FileFailure {
                    input: path.to_path_buf(),
                    error: err.to_string(),
                });
                if config.on_error == ErrorPolicy::Abort {
                    return Err(MapError::Batch {
                        failed: report.failed.len(),
                        total: paths.len(),
                        report: Box::new(report),
                    });
                }
            }
        }
    }

    info!(
        processed = report.processed.len(),
        failed = report.failed.len(),
        "Batch finished"
    );
    Ok(report)
}
