//! Command-line interface for contig-overlap.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **build**: Compute the overlap graph of a FASTA file and write it out
//! - **verify**: Run both overlap strategies and check that they agree
//!
//! ## Usage
//!
//! ```text
//! # Overlaps of 33-200 bases, written as a TSV edge list
//! contig-overlap build contigs.fasta overlaps.tsv
//!
//! # Both strands, Graphviz assembly graph
//! contig-overlap build contigs.fasta graph.dot --both-strands --graph-format assembly
//!
//! # Check the seed filter against the brute-force scan
//! contig-overlap verify contigs.fasta --min-overlap 20 --max-overlap 100
//! ```

use clap::{Parser, Subcommand};

use crate::overlap::engine::{DEFAULT_MAX_OVERLAP, DEFAULT_MIN_OVERLAP};

pub mod build;
pub mod verify;

#[derive(Parser)]
#[command(name = "contig-overlap")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Build suffix/prefix overlap graphs between contigs")]
#[command(
    long_about = "contig-overlap finds, for every ordered pair of contigs in a FASTA file, the longest suffix of one that equals a prefix of the other within a length window, and writes the resulting overlap graph.\n\nOnly exact overlaps are reported, and only the longest one per ordered pair."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Format of the run summary printed to stdout
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the overlap graph of a FASTA file
    Build(build::BuildArgs),

    /// Check that the seed-filtered and brute-force scans agree
    Verify(verify::VerifyArgs),
}

/// Overlap length window shared by all commands
#[derive(clap::Args, Clone, Copy, Debug)]
pub struct RangeArgs {
    /// Minimum overlap length (also the seed length)
    #[arg(long, default_value_t = DEFAULT_MIN_OVERLAP)]
    pub min_overlap: usize,

    /// Maximum overlap length
    #[arg(long, default_value_t = DEFAULT_MAX_OVERLAP)]
    pub max_overlap: usize,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
