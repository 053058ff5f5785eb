//! Dense row-major 2D scalar fields.
//!
//! [`IntensityField`] holds quantized pixel intensities (histogram bucket
//! indices) and [`EntropyField`] holds one entropy value per pixel.

use crate::error::{MapError, Result};

/// A dense row-major `width x height` array.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Quantized per-pixel intensities.
pub type IntensityField = Field<u32>;

/// Per-pixel entropy values (raw or normalized).
pub type EntropyField = Field<f32>;

impl<T: Copy> Field<T> {
    /// Wraps an existing buffer, checking that it holds `width * height` cells.
    pub fn new(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| MapError::InvalidInput(format!("{width}x{height} field overflows")))?;
        if data.len() != expected {
            return Err(MapError::InvalidInput(format!(
                "{width}x{height} field needs {expected} cells, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    // Callers guarantee `data.len() == width * height`.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// A field with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        self.data[y * self.width + x] = value;
    }

    /// Row `y` as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks_exact(0) panics; an empty-width field has no data anyway
        self.data.chunks_exact(self.width.max(1))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<T> {
        self.data
    }
}

impl IntensityField {
    /// Largest intensity present, or 0 for an empty field.
    pub fn max_value(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }
}
