//! Growth metrics for a dynamic array.
//!
//! [`ArrayMetrics`] counts reallocation work so callers can check the
//! amortised-growth behaviour of a workload without a profiler.

/// Cumulative counters for buffer reallocations.
///
/// Updated by the array each time its buffer grows. Counters are never
/// reset; a clone of the array carries a copy of its counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrayMetrics {
    /// Number of times the backing buffer was replaced by a larger one.
    pub reallocations: u64,
    /// Total live elements copied across all reallocations.
    pub elements_copied: u64,
}

impl ArrayMetrics {
    pub(crate) fn record_growth(&mut self, copied: usize) {
        self.reallocations += 1;
        self.elements_copied += copied as u64;
    }
}
