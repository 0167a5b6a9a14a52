//! Suffix/prefix overlap detection.
//!
//! - [`OverlapEngine`]: Computes the [`OverlapGraph`] for a sequence store
//! - [`SeedIndex`]: Prefix-seed index used to prune candidate pairs
//!
//! ## Algorithm
//!
//! For every ordered pair of distinct contigs (A, B) the engine reports the
//! largest `size` in `[min_overlap, max_overlap]` such that the last `size`
//! residues of A equal the first `size` residues of B. Two strategies give
//! identical results:
//!
//! 1. **Brute force**: every pair, every size from the largest down
//! 2. **Seed filtered**: contigs are indexed by their first `min_overlap`
//!    residues; for each candidate size the seed at the start of A's suffix
//!    is looked up and only the contigs sharing it are verified
//!
//! Edges are returned in canonical order (source, target, size descending).
//!
//! ## Example
//!
//! ```rust
//! use contig_overlap::core::contig::Contig;
//! use contig_overlap::core::store::SequenceStore;
//! use contig_overlap::overlap::{OverlapConfig, OverlapEngine};
//!
//! let store = SequenceStore::new(vec![
//!     Contig::new("A", "ACGTT"),
//!     Contig::new("B", "TTGGA"),
//! ])
//! .unwrap();
//!
//! let engine = OverlapEngine::new(&store, OverlapConfig::new(2, 4)).unwrap();
//! let graph = engine.compute();
//!
//! let edge = graph.edges().next().unwrap();
//! assert_eq!((edge.source.name.as_str(), edge.target.name.as_str(), edge.size), ("A", "B", 2));
//! ```
//!
//! [`OverlapGraph`]: crate::core::graph::OverlapGraph

pub mod engine;
pub mod seed_index;

pub use engine::{OverlapConfig, OverlapEngine, OverlapError, ScanStrategy};
pub use seed_index::SeedIndex;
