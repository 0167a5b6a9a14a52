use std::io::{self, Write};

use crate::core::graph::OverlapGraph;

/// Write one `source\ttarget\tsize` line per overlap, after a header line
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_tsv<W: Write>(graph: &OverlapGraph<'_>, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "source\ttarget\tsize")?;
    for edge in graph.edges() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            edge.source.label(),
            edge.target.label(),
            edge.size
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contig::{Contig, ContigId};
    use crate::core::graph::Overlap;
    use crate::core::store::SequenceStore;

    #[test]
    fn test_write_tsv() {
        let store = SequenceStore::new(vec![
            Contig::new("ctg1", "ACGTT"),
            Contig::new("ctg2", "TTGGA"),
        ])
        .unwrap();
        let graph = OverlapGraph::new(&store, vec![Overlap::new(ContigId(0), ContigId(1), 2)]);

        let mut out = Vec::new();
        write_tsv(&graph, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "source\ttarget\tsize\nctg1\tctg2\t2\n"
        );
    }

    #[test]
    fn test_write_tsv_empty_graph() {
        let store = SequenceStore::new(vec![Contig::new("ctg1", "ACGT")]).unwrap();
        let graph = OverlapGraph::new(&store, Vec::new());

        let mut out = Vec::new();
        write_tsv(&graph, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "source\ttarget\tsize\n");
    }
}
