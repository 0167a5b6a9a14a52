//! Parsers for loading contig records.
//!
//! Currently FASTA only (plain, gzip/bgzip, or standard input). The parser
//! owns the record rules: the identifier is the first token of the
//! definition line, the rest is the description, wrapped sequence lines are
//! joined and upper-cased.
//!
//! ## Example
//!
//! ```rust,no_run
//! use contig_overlap::parsing::fasta::load_fasta;
//! use std::path::Path;
//!
//! let store = load_fasta(Path::new("contigs.fasta")).unwrap();
//! println!("{} contigs", store.len());
//! ```

pub mod fasta;
