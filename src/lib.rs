//! # contig-overlap
//!
//! A library for building overlap graphs between assembled contigs.
//!
//! Two contigs overlap when a suffix of the first is identical to a prefix
//! of the second. Given a set of contigs and a length window
//! `[min_overlap, max_overlap]`, `contig-overlap` finds the longest such
//! overlap for every ordered pair and records it as a directed edge.
//!
//! ## Features
//!
//! - **Exact matching**: Only identical suffix/prefix pairs are reported
//! - **Maximal edges**: One edge per ordered pair, carrying the longest overlap
//! - **Seed filtering**: A prefix-seed index prunes candidate pairs without losing any
//! - **Both strands**: Optionally overlaps reverse complements as `+name` / `-name`
//! - **Several outputs**: TSV edge list, DOT, JSON, or an assembly graph
//!
//! ## Example
//!
//! ```rust,no_run
//! use contig_overlap::{OverlapConfig, OverlapEngine, SequenceStore};
//! use std::path::Path;
//!
//! let store = SequenceStore::load(Path::new("contigs.fasta")).unwrap();
//!
//! let engine = OverlapEngine::new(&store, OverlapConfig::new(33, 200)).unwrap();
//! let graph = engine.compute();
//!
//! for edge in graph.edges() {
//!     println!("{} -> {} ({})", edge.source.name, edge.target.name, edge.size);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Contigs, the sequence store, and the overlap graph
//! - [`overlap`]: Overlap engine and seed index
//! - [`parsing`]: FASTA loading
//! - [`output`]: Graph serializers
//! - [`builder`]: Load → compute → write pipeline
//! - [`cli`]: Command-line interface implementation

pub mod builder;
pub mod cli;
pub mod core;
pub mod output;
pub mod overlap;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use builder::{
    build_overlap_graph, make_overlap_graph, BuildConfig, BuildError, BuildSummary, ErrorKind,
};
pub use core::contig::{Contig, ContigId, Strand};
pub use core::graph::{Overlap, OverlapGraph};
pub use core::store::SequenceStore;
pub use output::GraphFormat;
pub use overlap::{OverlapConfig, OverlapEngine, OverlapError, ScanStrategy};
