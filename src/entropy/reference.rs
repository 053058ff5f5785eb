//! Direct per-window entropy, used as a reference for the sliding engine.
//!
//! These functions rebuild a histogram for every window and cost
//! `O(w*w)` per pixel. They exist for verification and benchmarking.

use crate::field::{EntropyField, IntensityField};
use crate::padding::pad;
use std::collections::HashMap;

/// Shannon entropy in bits of a multiset of values.
pub fn shannon_entropy(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut histogram: HashMap<u32, usize> = HashMap::new();
    for &v in values {
        *histogram.entry(v).or_insert(0) += 1;
    }

    let len = values.len() as f64;
    let mut entropy = 0.0;
    for &count in histogram.values() {
        let p = count as f64 / len;
        entropy -= p * p.log2();
    }
    entropy
}

/// Shannon entropy divided by its maximum `log2(len)`, in `[0, 1]`.
pub fn window_entropy(values: &[u32]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    shannon_entropy(values) / (values.len() as f64).log2()
}

/// Normalized entropy map computed by rebuilding every window from scratch
/// over the zero-padded field.
pub fn brute_force_map(field: &IntensityField, padding: usize) -> EntropyField {
    let padded = pad(field, padding);
    let cells = padded.as_field();
    let window = padded.window();
    let mut out = EntropyField::filled(field.width(), field.height(), 0.0);
    let mut values = Vec::with_capacity(window * window);

    for y in 0..field.height() {
        for x in 0..field.width() {
            values.clear();
            for row in cells.rows().skip(y).take(window) {
                values.extend_from_slice(&row[x..x + window]);
            }
            out.set(x, y, window_entropy(&values) as f32);
        }
    }
    out
}
