use std::io::{self, Write};

use crate::core::graph::OverlapGraph;

/// Quote a Graphviz identifier
pub(crate) fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Write the overlap graph in Graphviz DOT: one node per contig, one edge
/// per overlap labelled with its size
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_dot<W: Write>(graph: &OverlapGraph<'_>, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "digraph overlaps {{")?;

    // Isolated contigs are still nodes
    for (_, contig) in graph.store().iter() {
        writeln!(
            writer,
            "  {} [length={}];",
            quote(&contig.label()),
            contig.len()
        )?;
    }

    for edge in graph.edges() {
        writeln!(
            writer,
            "  {} -> {} [label=\"{}\"];",
            quote(&edge.source.label()),
            quote(&edge.target.label()),
            edge.size
        )?;
    }

    writeln!(writer, "}}")
}
