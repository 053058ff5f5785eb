//! Precomputed `n * log2(n)` weights.

use crate::error::{MapError, Result};

/// Window edge `1 + 2p` and area for one-sided padding `padding`.
///
/// Fails when the arithmetic overflows or the area does not fit the `u32`
/// histogram counts.
pub fn window_dimensions(padding: usize) -> Result<(usize, usize)> {
    let dimensions = padding
        .checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .and_then(|window| window.checked_mul(window).map(|area| (window, area)));
    match dimensions {
        Some((window, area)) if u32::try_from(area).is_ok() => Ok((window, area)),
        _ => Err(MapError::InvalidInput(format!(
            "padding {padding} gives a window too large to count"
        ))),
    }
}

/// Lookup table of `n * log2(n)` for every count a window can hold.
///
/// Entries are single precision, with `0 * log2(0)` defined as 0. The table
/// is a pure function of the window area and is shared read-only by the
/// engine for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct LogWeightedTable {
    weights: Vec<f32>,
}

impl LogWeightedTable {
    /// Builds the table for counts `0..=area`.
    pub fn new(area: usize) -> Self {
        let weights = (0..=area)
            .map(|n| {
                if n == 0 {
                    0.0
                } else {
                    let n = n as f32;
                    n * n.log2()
                }
            })
            .collect();
        Self { weights }
    }

    /// Table for the square window around one-sided padding `padding`.
    pub fn for_padding(padding: usize) -> Result<Self> {
        let (_, area) = window_dimensions(padding)?;
        Ok(Self::new(area))
    }

    /// Largest count covered, i.e. the window area.
    #[inline]
    pub fn area(&self) -> usize {
        self.weights.len() - 1
    }

    /// `n * log2(n)`.
    #[inline]
    pub fn weight(&self, n: u32) -> f32 {
        self.weights[n as usize]
    }

    /// Weight of a window holding a single value, `area * log2(area)`.
    #[inline]
    pub fn uniform_weight(&self) -> f32 {
        self.weights[self.area()]
    }
}
