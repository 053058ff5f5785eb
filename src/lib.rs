//! Per-pixel local Shannon entropy maps of images.
//!
//! An image is reduced to one intensity per pixel, zero-padded, and scanned
//! by a sliding square window whose histogram is updated incrementally. The
//! result is a field of normalized entropies in `[0, 1]` with the same
//! dimensions as the image, written as plain text.

pub mod config;
pub mod entropy;
pub mod error;
pub mod field;
pub mod intensity;
pub mod logging;
pub mod output;
pub mod padding;
pub mod pipeline;

pub use config::{ErrorPolicy, MapConfig};
pub use entropy::entropy_map;
pub use error::{MapError, Result};
pub use field::{EntropyField, Field, IntensityField};
pub use intensity::{load_intensity, reduce};
pub use padding::{pad, unpad, PaddedField};
pub use pipeline::{process_file, run_batch, BatchReport, FileFailure, FileReport};
