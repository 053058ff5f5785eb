//! Zero padding around intensity fields.
//!
//! The entropy engine reads a full `(1+2p) x (1+2p)` window around every
//! source pixel. Surrounding the field with `p` rows and columns of the
//! sentinel intensity 0 keeps every such read in bounds.

use crate::field::IntensityField;

/// An intensity field surrounded on all four sides by `padding` cells of 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedField {
    field: IntensityField,
    padding: usize,
    inner_width: usize,
    inner_height: usize,
}

impl PaddedField {
    /// One-sided padding `p`.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Window edge `1 + 2p`.
    pub fn window(&self) -> usize {
        1 + 2 * self.padding
    }

    /// Width of the unpadded source field.
    pub fn inner_width(&self) -> usize {
        self.inner_width
    }

    /// Height of the unpadded source field.
    pub fn inner_height(&self) -> usize {
        self.inner_height
    }

    /// The padded cells, `(inner_width + 2p) x (inner_height + 2p)`.
    pub fn as_field(&self) -> &IntensityField {
        &self.field
    }
}

/// Copies `field` into the centre of a fresh zero-filled buffer with `padding`
/// extra cells on each side.
pub fn pad(field: &IntensityField, padding: usize) -> PaddedField {
    let width = field.width() + 2 * padding;
    let height = field.height() + 2 * padding;
    let mut padded = IntensityField::filled(width, height, 0);

    let cells = padded.as_mut_slice();
    for (y, row) in field.rows().enumerate() {
        let start = (y + padding) * width + padding;
        cells[start..start + row.len()].copy_from_slice(row);
    }

    PaddedField {
        field: padded,
        padding,
        inner_width: field.width(),
        inner_height: field.height(),
    }
}

/// Recovers the original field from a padded one.
pub fn unpad(padded: &PaddedField) -> IntensityField {
    let p = padded.padding;
    let mut data = Vec::with_capacity(padded.inner_width * padded.inner_height);
    for row in padded.field.rows().skip(p).take(padded.inner_height) {
        data.extend_from_slice(&row[p..p + padded.inner_width]);
    }
    IntensityField::from_parts(padded.inner_width, padded.inner_height, data)
}
