//! Local Shannon entropy of intensity fields.
//!
//! For every pixel the entropy of the `(1+2p) x (1+2p)` window centred on it
//! is estimated and normalized to `[0, 1]`: 0 for a window holding a single
//! value, 1 for a window whose cells are all distinct. Windows reaching past
//! the image border see the padding value 0.
//!
//! The module provides:
//!
//! - A precomputed `n log2 n` table ([`LogWeightedTable`])
//! - A running window histogram with an incremental accumulator
//! - A serpentine scan ([`Boustrophedon`]) whose steps move the window by one
//!   row or one column
//! - The sliding engine, the normalizer and a brute-force reference
//!
//! # Example
//!
//! ```ignore
//! use shannon_map::entropy::entropy_map;
//! use shannon_map::field::IntensityField;
//!
//! let field = IntensityField::new(16, 16, vec![0; 256])?;
//! let map = entropy_map(&field, 4)?;
//! assert!(map.as_slice().iter().all(|&v| v == 0.0));
//! ```

pub mod engine;
pub mod histogram;
pub mod normalize;
pub mod reference;
pub mod scan;
pub mod summary;
pub mod table;

pub use self::engine::raw_entropy;
pub use self::histogram::WindowHistogram;
pub use self::normalize::{normalize, normalize_value};
pub use self::reference::{brute_force_map, shannon_entropy, window_entropy};
pub use self::scan::{Boustrophedon, Move, Phase, Step, Sweep};
pub use self::summary::FieldSummary;
pub use self::table::{window_dimensions, LogWeightedTable};

use crate::error::Result;
use crate::field::{EntropyField, IntensityField};
use crate::padding::pad;
use tracing::trace;

/// Normalized local entropy map of `field` with one-sided padding `padding`.
///
/// The result has the same dimensions as `field`. The padded copy, histogram
/// and table live only for the duration of the call. A padding whose window
/// area overflows or exceeds the `u32` histogram counts is rejected with
/// [`MapError::InvalidInput`](crate::error::MapError::InvalidInput).
pub fn entropy_map(field: &IntensityField, padding: usize) -> Result<EntropyField> {
    let (window, area) = window_dimensions(padding)?;
    let table = LogWeightedTable::new(area);
    let padded = pad(field, padding);
    trace!(
        width = field.width(),
        height = field.height(),
        window,
        buckets = field.max_value() + 1,
        "Scanning entropy windows"
    );

    let mut map = raw_entropy(&padded, &table);
    normalize(&mut map, &table);
    Ok(map)
}
