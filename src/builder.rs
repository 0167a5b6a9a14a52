//! Load → compute → serialize pipeline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

use crate::core::store::SequenceStore;
use crate::output::{write_graph, GraphFormat};
use crate::overlap::{OverlapConfig, OverlapEngine, OverlapError};
use crate::parsing::fasta::LoadError;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to load contigs: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Overlap(#[from] OverlapError),

    #[error("Failed to write graph to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a failed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input unreadable or output unwritable
    Io,
    /// Input is not a valid set of sequence records
    Format,
    /// Overlap range violates `1 <= min <= max`
    InvalidRange,
}

impl BuildError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Load(e) if e.is_format_error() => ErrorKind::Format,
            Self::Load(_) | Self::Write { .. } => ErrorKind::Io,
            Self::Overlap(_) => ErrorKind::InvalidRange,
        }
    }
}

/// Configuration for one graph-building run
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildConfig {
    pub overlap: OverlapConfig,
    /// Output layout; inferred from the output extension when `None`
    pub format: Option<GraphFormat>,
    /// Add the reverse complement of every contig before computing overlaps
    pub both_strands: bool,
}

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub contigs: usize,
    pub overlaps: usize,
}

/// Build the overlap graph of `input` and write it to `output`.
///
/// The overlap range is validated before the input is read.
///
/// # Errors
///
/// Returns `BuildError::Overlap` for an invalid range, `BuildError::Load` if
/// the input cannot be read or parsed, and `BuildError::Write` if the output
/// cannot be written.
pub fn build_overlap_graph(
    input: &Path,
    output: &Path,
    config: &BuildConfig,
) -> Result<BuildSummary, BuildError> {
    config.overlap.validate()?;

    let mut store = SequenceStore::load(input)?;
    if config.both_strands {
        store = store.with_reverse_complements();
    }
    info!("Loaded {} contigs from {}", store.len(), input.display());

    let engine = OverlapEngine::new(&store, config.overlap)?;
    let graph = engine.compute();

    let format = config
        .format
        .unwrap_or_else(|| GraphFormat::from_path(output));
    let write_error = |source: std::io::Error| BuildError::Write {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    write_graph(&graph, format, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    info!(
        "Wrote {} overlaps to {} ({:?})",
        graph.len(),
        output.display(),
        format
    );

    Ok(BuildSummary {
        contigs: store.len(),
        overlaps: graph.len(),
    })
}

/// Boolean entry point: `true` iff loading, computing and writing all succeeded.
///
/// Always overlaps both strands and writes the assembly DOT layout, so every
/// edge label of `output` is a signed contig label (`+name` / `-name`)
/// whatever its extension. The failure cause is logged rather than returned;
/// prefer [`build_overlap_graph`] when the caller needs it.
pub fn make_overlap_graph(
    input: &Path,
    output: &Path,
    min_overlap: usize,
    max_overlap: usize,
    use_seed_filter: bool,
) -> bool {
    let config = BuildConfig {
        overlap: OverlapConfig::new(min_overlap, max_overlap).with_seed_filter(use_seed_filter),
        format: Some(GraphFormat::Assembly),
        both_strands: true,
    };

    match build_overlap_graph(input, output, &config) {
        Ok(_) => true,
        Err(e) => {
            error!("Overlap graph construction failed ({:?}): {e}", e.kind());
            false
        }
    }
}
