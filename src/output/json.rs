use std::io::{self, Write};

use serde::Serialize;

use crate::core::graph::OverlapGraph;

#[derive(Debug, Serialize)]
struct GraphDocument {
    contigs: Vec<ContigRecord>,
    overlaps: Vec<OverlapRecord>,
}

#[derive(Debug, Serialize)]
struct ContigRecord {
    name: String,
    length: usize,
    md5: String,
}

#[derive(Debug, Serialize)]
struct OverlapRecord {
    source: String,
    target: String,
    size: usize,
}

/// Write the graph as a pretty-printed JSON document
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_json<W: Write>(graph: &OverlapGraph<'_>, writer: &mut W) -> io::Result<()> {
    let document = GraphDocument {
        contigs: graph
            .store()
            .iter()
            .map(|(_, contig)| ContigRecord {
                name: contig.label(),
                length: contig.len(),
                md5: contig.md5(),
            })
            .collect(),
        overlaps: graph
            .edges()
            .map(|edge| OverlapRecord {
                source: edge.source.label(),
                target: edge.target.label(),
                size: edge.size,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *writer, &document)?;
    writeln!(writer)
}
