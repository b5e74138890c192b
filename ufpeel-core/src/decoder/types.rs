//! Shared types for the per-shot clustering state.

use core::cmp::Ordering;

/// Sentinel parent value for a vertex that no cluster has absorbed yet.
pub(crate) const UNCLUSTERED: u32 = u32::MAX;

/// Key under which a cluster sits in the grow queue.
///
/// Clusters are grown smallest-first: by frontier length, then by accumulated
/// growth, then by root id. The root id tie-break makes simultaneous-fusion
/// ordering reproducible across runs for identical input.
///
/// An entry is a snapshot. Whenever a cluster grows or merges, its key
/// changes and every older queue entry for it becomes stale; stale entries
/// are recognized by key mismatch at pop time and skipped.
#[derive(Debug, Clone, Copy)]
pub struct GrowQueueEntry {
    /// Frontier length at enqueue time.
    pub frontier_len: usize,
    /// Accumulated growth at enqueue time.
    pub growth: f64,
    /// Root vertex of the cluster.
    pub root: u32,
}

impl PartialEq for GrowQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GrowQueueEntry {}

impl PartialOrd for GrowQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GrowQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frontier_len
            .cmp(&other.frontier_len)
            .then_with(|| self.growth.total_cmp(&other.growth))
            .then_with(|| self.root.cmp(&other.root))
    }
}
