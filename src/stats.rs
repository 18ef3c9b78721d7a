//! Step counting for the quicksort drivers.

/// Receives the events of a sort as they happen.
///
/// The drivers are generic over the recorder, `()` compiles down to nothing.
pub(crate) trait Recorder {
    #[inline]
    fn on_exchange(&mut self) {}

    /// `depth` is 1 for the top-level partition of a sort.
    #[inline]
    fn on_partition(&mut self, _depth: usize) {}
}

impl Recorder for () {}

/// What a single sort did.
///
/// The pivot choice is deterministic, so the same input always yields the same stats.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    /// Number of element comparisons, counting both cursor scans.
    pub comparisons: u64,
    /// Number of calls to the exchange primitive, including self-exchanges `i == j`.
    pub exchanges: u64,
    /// Number of partition calls.
    pub partitions: u64,
    /// Deepest nesting of partition calls, 0 if nothing was partitioned.
    pub max_depth: usize,
}

impl Recorder for SortStats {
    #[inline]
    fn on_exchange(&mut self) {
        self.exchanges += 1;
    }

    #[inline]
    fn on_partition(&mut self, depth: usize) {
        self.partitions += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}
