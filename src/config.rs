//! Configuration for entropy map generation.
//!
//! Defaults mirror the command line: a one-sided padding of 4 (9x9 window),
//! ten significant digits in the text output, output next to the input image
//! and skip-and-continue on per-file failures.

use crate::entropy::window_dimensions;
use crate::error::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What the batch runner does when one input file fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the failure, record it and continue with the next file.
    #[default]
    Skip,
    /// Stop the batch at the first failure.
    Abort,
}

/// Master configuration for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// One-sided padding `p`; the window edge is `1 + 2p`.
    pub padding: usize,
    /// Directory for output files. `None` writes next to each input image.
    pub output_dir: Option<PathBuf>,
    /// Significant digits per value in the text output.
    pub precision: usize,
    /// Per-file failure policy.
    pub on_error: ErrorPolicy,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            padding: 4,
            output_dir: None,
            precision: 10,
            on_error: ErrorPolicy::Skip,
        }
    }
}

impl MapConfig {
    /// Window edge length `1 + 2p`, saturating for paddings that
    /// [`validate`](Self::validate) rejects.
    pub fn window_size(&self) -> usize {
        self.padding.saturating_mul(2).saturating_add(1)
    }

    /// Rejects a padding whose window cannot be counted.
    pub fn validate(&self) -> Result<()> {
        window_dimensions(self.padding).map(|_| ())
    }

    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| MapError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
