//! Sliding-window entropy engine.
//!
//! For a window holding `n_v` copies of each value `v`, with area `m = w*w`,
//!
//! ```text
//! H = -sum_v (n_v/m) log2(n_v/m) = log2(m) - (1/m) sum_v n_v log2(n_v)
//! ```
//!
//! so the only per-window quantity needed is `e = sum_v T[n_v]`. The engine
//! walks the field in serpentine order and keeps `e` current by moving one
//! row or one column of cells in and out of a running histogram, which costs
//! `O(w)` per pixel instead of `O(w*w)` for a rebuild.

use super::histogram::WindowHistogram;
use super::scan::{Boustrophedon, Move};
use super::table::LogWeightedTable;
use crate::field::EntropyField;
use crate::padding::PaddedField;

/// Computes the raw entropy field `-e` for every pixel of the source field.
///
/// `table` must cover the padded field's window area. Raw values lie in
/// `[-m log2(m), 0]`; see [`super::normalize`] for the `[0, 1]` rescaling.
pub fn raw_entropy(padded: &PaddedField, table: &LogWeightedTable) -> EntropyField {
    let window = padded.window();
    debug_assert_eq!(table.area(), window * window);

    let width = padded.inner_width();
    let height = padded.inner_height();
    let cells = padded.as_field();
    // Every cell is overwritten exactly once by the scan
    let mut raw = EntropyField::filled(width, height, f32::NAN);
    if raw.is_empty() {
        return raw;
    }

    let buckets = cells.max_value() as usize + 1;
    let mut hist = WindowHistogram::new(buckets, table);
    let column = move |x: usize, top: usize| (top..top + window).map(move |y| cells.get(x, y));
    let row = move |y: usize, left: usize| cells.row(y)[left..left + window].iter().copied();

    for step in Boustrophedon::new(width, height) {
        let (x, y) = (step.x, step.y);
        match step.movement {
            Move::Start => {
                for top in 0..window {
                    for v in row(top, 0) {
                        hist.add(v);
                    }
                }
            }
            Move::Right => hist.slide(column(x - 1, y), column(x + window - 1, y)),
            Move::Left => hist.slide(column(x + window, y), column(x, y)),
            Move::Down => hist.slide(row(y - 1, x), row(y + window - 1, x)),
        }
        debug_assert_eq!(hist.len(), window * window);
        raw.set(x, y, -hist.weighted_sum() as f32);
    }

    raw
}
