// =============================================================================
// Decoder Submodules
// =============================================================================

/// Core types: grow-queue entries and cluster sentinels.
pub mod types;

/// Per-shot clustering state built over a decoding graph.
pub mod state;

/// Union-Find (disjoint set) operations for cluster merging.
pub mod union_find;

/// Cluster growth: frontier expansion, fusion, and the grow queue.
pub mod growth;

/// Peeling: spanning-forest reduction and correction extraction.
pub mod peeling;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use growth::ClusterGrowth;
pub use peeling::{spanning_forest, PeelingDecoder, SpanningForest};
pub use state::UnionFindState;
pub use types::GrowQueueEntry;
pub use union_find::UnionFind;
