//! Assembly-graph DOT output.
//!
//! Every contig becomes an edge `start -> end` labelled with its signed name.
//! An overlap `(A, B)` glues the end node of A to the start node of B, so a
//! path through the graph spells a sequence of contigs that can be joined.
//! Contigs without an orientation are written as forward (`+name`).

use std::collections::HashMap;
use std::io::{self, Write};

use crate::core::contig::Strand;
use crate::core::graph::OverlapGraph;
use crate::output::dot::quote;

/// Union-find over contig end points
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            // Smaller root wins so the result does not depend on edge order
            let (low, high) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[high] = low;
        }
    }
}

fn start_node(index: usize) -> usize {
    2 * index
}

fn end_node(index: usize) -> usize {
    2 * index + 1
}

/// Write the graph with contigs as edges and overlaps as shared nodes
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn write_assembly_dot<W: Write>(graph: &OverlapGraph<'_>, writer: &mut W) -> io::Result<()> {
    let store = graph.store();
    let mut nodes = DisjointSet::new(2 * store.len());

    for overlap in graph.overlaps() {
        nodes.union(end_node(overlap.source.index()), start_node(overlap.target.index()));
    }

    // Number merged nodes 1.. in order of first appearance
    let mut numbering: HashMap<usize, usize> = HashMap::new();
    let mut number_of = |node: usize, nodes: &mut DisjointSet| {
        let root = nodes.find(node);
        let next = numbering.len() + 1;
        *numbering.entry(root).or_insert(next)
    };

    writeln!(writer, "digraph {{")?;
    for (id, contig) in store.iter() {
        let from = number_of(start_node(id.index()), &mut nodes);
        let to = number_of(end_node(id.index()), &mut nodes);
        let label = format!("{}{}", contig.strand.unwrap_or(Strand::Forward), contig.name);
        writeln!(writer, "  {from} -> {to} [label={}];", quote(&label))?;
    }
    writeln!(writer, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contig::{Contig, ContigId};
    use crate::core::graph::Overlap;
    use crate::core::store::SequenceStore;

    #[test]
    fn test_overlaps_merge_nodes() {
        let store = SequenceStore::new(vec![
            Contig::new("A", "GGGACC"),
            Contig::new("B", "ACCTTT"),
            Contig::new("C", "TTTCAG"),
            Contig::new("D", "CCCCCC"),
        ])
        .unwrap();
        let graph = OverlapGraph::new(
            &store,
            vec![
                Overlap::new(ContigId(0), ContigId(1), 3),
                Overlap::new(ContigId(1), ContigId(2), 3),
            ],
        );

        let mut out = Vec::new();
        write_assembly_dot(&graph, &mut out).unwrap();
        let expected = "digraph {\n  1 -> 2 [label=\"+A\"];\n  2 -> 3 [label=\"+B\"];\n  3 -> 4 [label=\"+C\"];\n  5 -> 6 [label=\"+D\"];\n}\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_stranded_labels() {
        let store = SequenceStore::new(vec![Contig::new("A", "ACGT")])
            .unwrap()
            .with_reverse_complements();
        let graph = OverlapGraph::new(&store, Vec::new());

        let mut out = Vec::new();
        write_assembly_dot(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1 -> 2 [label=\"+A\"]"));
        assert!(text.contains("3 -> 4 [label=\"-A\"]"));
    }
}
