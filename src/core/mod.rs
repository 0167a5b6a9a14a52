//! Core data types for overlap graph construction.
//!
//! - [`Contig`]: A sequence record with name, description and residues
//! - [`ContigId`]: Stable index of a contig inside its store
//! - [`SequenceStore`]: The frozen, ordered collection of contigs for one run
//! - [`Overlap`], [`OverlapGraph`]: Suffix/prefix edges between contigs
//!
//! ## Ownership
//!
//! The store owns every contig. Overlaps only carry [`ContigId`]s, and the
//! graph borrows the store, so the store always outlives the graph computed
//! from it.
//!
//! [`Contig`]: contig::Contig
//! [`ContigId`]: contig::ContigId
//! [`SequenceStore`]: store::SequenceStore
//! [`Overlap`]: graph::Overlap
//! [`OverlapGraph`]: graph::OverlapGraph

pub mod contig;
pub mod graph;
pub mod store;
