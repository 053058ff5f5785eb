//! Running window histogram with an incremental `sum n*log2(n)` accumulator.

use super::table::LogWeightedTable;

/// Histogram of the values inside the current window.
///
/// Alongside the per-value counts it keeps `weighted = sum_v T[n_v]`, updated
/// by table lookups on every `+1`/`-1` change so the window entropy is
/// available without rescanning the buckets.
#[derive(Debug, Clone)]
pub struct WindowHistogram<'t> {
    counts: Vec<u32>,
    total: usize,
    weighted: f64,
    table: &'t LogWeightedTable,
}

impl<'t> WindowHistogram<'t> {
    /// Creates an empty histogram with `buckets` value slots.
    pub fn new(buckets: usize, table: &'t LogWeightedTable) -> Self {
        Self {
            counts: vec![0; buckets],
            total: 0,
            weighted: 0.0,
            table,
        }
    }

    /// Adds one occurrence of `value`.
    #[inline]
    pub fn add(&mut self, value: u32) {
        let count = &mut self.counts[value as usize];
        let before = self.table.weight(*count);
        *count += 1;
        self.weighted += f64::from(self.table.weight(*count)) - f64::from(before);
        self.total += 1;
    }

    /// Removes one occurrence of `value`.
    #[inline]
    pub fn remove(&mut self, value: u32) {
        let count = &mut self.counts[value as usize];
        debug_assert!(*count > 0, "removing value {value} absent from window");
        let before = self.table.weight(*count);
        *count -= 1;
        self.weighted += f64::from(self.table.weight(*count)) - f64::from(before);
        self.total -= 1;
    }

    /// Slides the window by removing `old` values and adding `new` ones
    /// pairwise.
    #[inline]
    pub fn slide<I, J>(&mut self, old: I, new: J)
    where
        I: IntoIterator<Item = u32>,
        J: IntoIterator<Item = u32>,
    {
        for (old, new) in old.into_iter().zip(new) {
            if old != new {
                self.remove(old);
                self.add(new);
            }
        }
    }

    /// `sum_v n_v * log2(n_v)` over the current window.
    #[inline]
    pub fn weighted_sum(&self) -> f64 {
        self.weighted
    }

    /// Occurrences of `value` in the window.
    #[inline]
    pub fn count(&self, value: u32) -> u32 {
        self.counts[value as usize]
    }

    /// Number of cells in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
