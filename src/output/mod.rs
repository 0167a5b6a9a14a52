//! Serializers for overlap graphs.
//!
//! | Format | Content |
//! |--------|---------|
//! | TSV | `source\ttarget\tsize` edge list with header |
//! | DOT | Contigs as nodes, overlaps as edges labelled with their size |
//! | JSON | Contig table (name, length, MD5) and edge list |
//! | Assembly | Contigs as edges, overlapping ends merged into shared nodes |
//!
//! Every format is a pure function of the graph, so writing the same graph
//! twice produces byte-identical output.

use std::io::{self, Write};
use std::path::Path;

use crate::core::graph::OverlapGraph;

pub mod assembly;
pub mod dot;
pub mod json;
pub mod tsv;

/// On-disk graph layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GraphFormat {
    /// Tab-separated edge list
    #[default]
    Tsv,
    /// Graphviz overlap graph
    Dot,
    /// JSON document with contigs and overlaps
    Json,
    /// Graphviz assembly graph with contigs as edges
    Assembly,
}

impl GraphFormat {
    /// Infer the format from an output path extension, defaulting to TSV
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("dot" | "gv") => Self::Dot,
            Some("json") => Self::Json,
            _ => Self::Tsv,
        }
    }
}

/// Serialize `graph` in `format` to `writer`
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_graph<W: Write>(
    graph: &OverlapGraph<'_>,
    format: GraphFormat,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        GraphFormat::Tsv => tsv::write_tsv(graph, writer),
        GraphFormat::Dot => dot::write_dot(graph, writer),
        GraphFormat::Json => json::write_json(graph, writer),
        GraphFormat::Assembly => assembly::write_assembly_dot(graph, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(GraphFormat::from_path(Path::new("out.dot")), GraphFormat::Dot);
        assert_eq!(GraphFormat::from_path(Path::new("out.GV")), GraphFormat::Dot);
        assert_eq!(GraphFormat::from_path(Path::new("out.json")), GraphFormat::Json);
        assert_eq!(GraphFormat::from_path(Path::new("out.tsv")), GraphFormat::Tsv);
        assert_eq!(GraphFormat::from_path(Path::new("overlaps")), GraphFormat::Tsv);
    }
}
