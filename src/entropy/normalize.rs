//! Rescaling of raw window entropy to `[0, 1]`.

use super::table::LogWeightedTable;
use crate::field::EntropyField;

/// Normalizes one raw value `-e` for a window of area `m`:
/// `1 + (-e) / (m log2 m)`.
///
/// A uniform window (`e = m log2 m`) maps to exactly 0 and a window of
/// all-distinct values (`e = 0`) to exactly 1. A single-cell window has no
/// spread to measure and always yields 0.
#[inline]
pub fn normalize_value(raw: f32, table: &LogWeightedTable) -> f32 {
    let max_weight = table.uniform_weight();
    if max_weight <= 0.0 {
        return 0.0;
    }
    1.0 + raw / max_weight
}

/// Normalizes a raw entropy field in place.
pub fn normalize(field: &mut EntropyField, table: &LogWeightedTable) {
    for value in field.as_mut_slice() {
        *value = normalize_value(*value, table);
    }
}
