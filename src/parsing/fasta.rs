//! FASTA loading using noodles.
//!
//! Reads every record (name, description, residues) into a [`SequenceStore`].
//! Supports both uncompressed and gzip/bgzip compressed files, and `-` for
//! standard input.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)
//!
//! Other names are still read as FASTA, with a warning; a trailing `.gz` or
//! `.bgz` always selects the gzip decoder.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::contig::Contig;
use crate::core::store::{SequenceStore, StoreError};
use crate::utils::validation::{check_contig_limit, find_invalid_residue, MAX_CONTIGS};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("Failed to parse FASTA record: {0}")]
    Malformed(String),

    #[error("Invalid contig set: {0}")]
    Store(#[from] StoreError),

    #[error("Too many contigs: {0} exceeds maximum allowed ({MAX_CONTIGS})")]
    TooManyContigs(usize),
}

impl LoadError {
    /// Whether the input was read but did not parse as sequence records
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// On-disk encoding of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Plain,
    Gzip,
}

/// Split a file name into its encoding and whether the remaining extension
/// is a FASTA one; `contigs.fa.bgz` is `(Gzip, true)`, `contigs.gz` is
/// `(Gzip, false)`.
fn classify(path: &Path) -> (Encoding, bool) {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let (stem, encoding) = match name.rsplit_once('.') {
        Some((stem, "gz" | "bgz")) => (stem, Encoding::Gzip),
        _ => (name.as_str(), Encoding::Plain),
    };
    let is_fasta = matches!(stem.rsplit_once('.'), Some((_, "fa" | "fasta" | "fna")));

    (encoding, is_fasta)
}

/// Load a FASTA file into a frozen [`SequenceStore`].
///
/// A path of `-` reads from standard input.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, and one of the format
/// variants (`Malformed`, `InvalidFormat`, `Store`, `TooManyContigs`) if the
/// content does not parse as a set of uniquely named sequence records.
pub fn load_fasta(path: &Path) -> Result<SequenceStore, LoadError> {
    if path == Path::new("-") {
        let stdin = std::io::stdin();
        return read_fasta(stdin.lock());
    }

    let file = std::fs::File::open(path)?;
    let (encoding, is_fasta) = classify(path);
    if !is_fasta {
        warn!(
            "{} does not have a FASTA extension, reading it as FASTA anyway",
            path.display()
        );
    }

    match encoding {
        Encoding::Gzip => read_fasta(BufReader::new(MultiGzDecoder::new(file))),
        Encoding::Plain => read_fasta(BufReader::new(file)),
    }
}

/// Parse FASTA records from any buffered reader
///
/// # Errors
///
/// See [`load_fasta`].
pub fn read_fasta<R: BufRead>(reader: R) -> Result<SequenceStore, LoadError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut contigs = Vec::new();

    for result in fasta_reader.records() {
        let record = result.map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData | std::io::ErrorKind::UnexpectedEof => {
                LoadError::Malformed(e.to_string())
            }
            _ => LoadError::Io(e),
        })?;

        // Check contig limit for DOS protection
        if check_contig_limit(contigs.len()).is_some() {
            return Err(LoadError::TooManyContigs(contigs.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        if name.is_empty() {
            return Err(LoadError::InvalidFormat(format!(
                "record {} has an empty name",
                contigs.len() + 1
            )));
        }

        let description = record
            .description()
            .map(|d| String::from_utf8_lossy(d).trim().to_string())
            .unwrap_or_default();

        let sequence: &[u8] = record.sequence().as_ref();
        if let Some((offset, byte)) = find_invalid_residue(sequence) {
            return Err(LoadError::InvalidFormat(format!(
                "invalid residue {:?} at position {} of '{name}'",
                char::from(byte),
                offset + 1
            )));
        }

        if sequence.is_empty() {
            warn!("Contig '{name}' has an empty sequence and cannot overlap");
        }

        // Overlaps are exact, so soft-masked bases must not break a match
        let sequence = sequence.to_ascii_uppercase();

        contigs.push(Contig::new(name, sequence).with_description(description));
    }

    if contigs.is_empty() {
        return Err(LoadError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    let store = SequenceStore::new(contigs)?;
    debug!(
        "Loaded {} contigs ({} residues)",
        store.len(),
        store.total_length()
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contig::ContigId;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_classify_extensions() {
        assert_eq!(classify(Path::new("test.fa")), (Encoding::Plain, true));
        assert_eq!(classify(Path::new("test.fasta")), (Encoding::Plain, true));
        assert_eq!(classify(Path::new("test.fna")), (Encoding::Plain, true));
        assert_eq!(classify(Path::new("test.fa.gz")), (Encoding::Gzip, true));
        assert_eq!(classify(Path::new("test.fna.bgz")), (Encoding::Gzip, true));
        assert_eq!(classify(Path::new("/path/to/Contigs.FA")), (Encoding::Plain, true));

        assert_eq!(classify(Path::new("test.dot")), (Encoding::Plain, false));
        assert_eq!(classify(Path::new("contigs.gz")), (Encoding::Gzip, false));
        assert_eq!(classify(Path::new("fa")), (Encoding::Plain, false));
        assert_eq!(classify(Path::new("dir.fa/contigs")), (Encoding::Plain, false));
    }

    #[test]
    fn test_load_without_fasta_extension() {
        let mut plain = NamedTempFile::with_suffix(".txt").unwrap();
        plain.write_all(b">ctg1\nACGT\n").unwrap();
        plain.flush().unwrap();
        assert_eq!(load_fasta(plain.path()).unwrap().len(), 1);

        // Still decompressed on the strength of the .gz suffix alone
        let gzipped = NamedTempFile::with_suffix(".gz").unwrap();
        let mut encoder = GzEncoder::new(gzipped.reopen().unwrap(), Compression::default());
        encoder.write_all(b">ctg1\nACGT\n>ctg2\nTT\n").unwrap();
        encoder.finish().unwrap();
        assert_eq!(load_fasta(gzipped.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_load_fasta_file() {
        let fasta_content = b">ctg1 first contig\nACGTACGT\nacgt\n>ctg2\nGGGG\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let store = load_fasta(temp.path()).unwrap();
        assert_eq!(store.len(), 2);

        let first = store.get(ContigId(0)).unwrap();
        assert_eq!(first.name, "ctg1");
        assert_eq!(first.description, "first contig");
        assert_eq!(first.sequence, b"ACGTACGTACGT"); // wrapped lines joined, upper-cased

        let second = store.get(ContigId(1)).unwrap();
        assert_eq!(second.name, "ctg2");
        assert_eq!(second.description, "");
        assert_eq!(second.len(), 4);
    }

    #[test]
    fn test_load_gzipped_fasta() {
        let temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        let mut encoder = GzEncoder::new(temp.reopen().unwrap(), Compression::default());
        encoder.write_all(b">ctg1\nACGT\n").unwrap();
        encoder.finish().unwrap();

        let store = load_fasta(temp.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(ContigId(0)).unwrap().sequence, b"ACGT");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_fasta(Path::new("/nonexistent/contigs.fa"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_parse_empty_fasta() {
        let result = read_fasta(&b""[..]);
        assert!(matches!(result, Err(LoadError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_missing_header() {
        let result = read_fasta(&b"ACGT\n>ctg1\nACGT\n"[..]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_residue() {
        let result = read_fasta(&b">ctg1\nAC1GT\n"[..]);
        assert!(matches!(result, Err(LoadError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_duplicate_names() {
        let result = read_fasta(&b">ctg1\nACGT\n>ctg1 again\nTTTT\n"[..]);
        assert!(matches!(
            result,
            Err(LoadError::Store(StoreError::DuplicateName(_)))
        ));
    }

    #[test]
    fn test_parse_empty_sequence_allowed() {
        let store = read_fasta(&b">ctg1\n>ctg2\nACGT\n"[..]).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.get(ContigId(0)).unwrap().is_empty());
    }
}
