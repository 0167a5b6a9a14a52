use std::cmp::Ordering;

use crate::core::contig::{Contig, ContigId};
use crate::core::store::SequenceStore;

/// A directed suffix/prefix overlap: the last `size` residues of `source`
/// equal the first `size` residues of `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap {
    pub source: ContigId,
    pub target: ContigId,
    pub size: usize,
}

impl Overlap {
    #[must_use]
    pub fn new(source: ContigId, target: ContigId, size: usize) -> Self {
        Self {
            source,
            target,
            size,
        }
    }
}

/// Canonical edge order: source ascending, target ascending, size descending
impl Ord for Overlap {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then(self.target.cmp(&other.target))
            .then(other.size.cmp(&self.size))
    }
}

impl PartialOrd for Overlap {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An overlap edge with both endpoints resolved against the store
#[derive(Debug, Clone, Copy)]
pub struct EdgeRef<'a> {
    pub source: &'a Contig,
    pub target: &'a Contig,
    pub size: usize,
}

/// All overlaps between the contigs of one store.
///
/// Every contig of the store is an implicit node; the graph borrows the store
/// and never copies its records.
#[derive(Debug, Clone)]
pub struct OverlapGraph<'a> {
    store: &'a SequenceStore,
    overlaps: Vec<Overlap>,
}

impl<'a> OverlapGraph<'a> {
    /// Wrap a list of overlaps, sorting them into canonical order
    #[must_use]
    pub fn new(store: &'a SequenceStore, mut overlaps: Vec<Overlap>) -> Self {
        overlaps.sort_unstable();
        Self { store, overlaps }
    }

    #[must_use]
    pub fn store(&self) -> &'a SequenceStore {
        self.store
    }

    #[must_use]
    pub fn overlaps(&self) -> &[Overlap] {
        &self.overlaps
    }

    #[must_use]
    pub fn into_overlaps(self) -> Vec<Overlap> {
        self.overlaps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overlaps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlaps.is_empty()
    }

    /// Number of nodes, i.e. contigs in the store
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Overlaps leaving `id`, in canonical order
    pub fn successors(&self, id: ContigId) -> impl Iterator<Item = &Overlap> + '_ {
        // Sorted by source, so the outgoing edges form one contiguous run
        let start = self.overlaps.partition_point(|o| o.source < id);
        self.overlaps[start..]
            .iter()
            .take_while(move |o| o.source == id)
    }

    /// Overlaps entering `id`, in canonical order
    pub fn predecessors(&self, id: ContigId) -> impl Iterator<Item = &Overlap> + '_ {
        self.overlaps.iter().filter(move |o| o.target == id)
    }

    /// Edges with their endpoints resolved to contig records
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'a>> + '_ {
        let contigs = self.store.contigs();
        self.overlaps.iter().map(move |o| EdgeRef {
            source: &contigs[o.source.index()],
            target: &contigs[o.target.index()],
            size: o.size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> SequenceStore {
        SequenceStore::new(vec![
            Contig::new("a", "AAAT"),
            Contig::new("b", "ATTT"),
            Contig::new("c", "TTTG"),
        ])
        .unwrap()
    }

    #[test]
    fn test_canonical_order() {
        let store = make_store();
        let graph = OverlapGraph::new(
            &store,
            vec![
                Overlap::new(ContigId(1), ContigId(2), 3),
                Overlap::new(ContigId(0), ContigId(2), 1),
                Overlap::new(ContigId(0), ContigId(1), 1),
                Overlap::new(ContigId(0), ContigId(1), 2),
            ],
        );

        let triples: Vec<(usize, usize, usize)> = graph
            .overlaps()
            .iter()
            .map(|o| (o.source.index(), o.target.index(), o.size))
            .collect();
        assert_eq!(triples, vec![(0, 1, 2), (0, 1, 1), (0, 2, 1), (1, 2, 3)]);
    }

    #[test]
    fn test_successors_and_predecessors() {
        let store = make_store();
        let graph = OverlapGraph::new(
            &store,
            vec![
                Overlap::new(ContigId(0), ContigId(1), 2),
                Overlap::new(ContigId(1), ContigId(2), 3),
                Overlap::new(ContigId(0), ContigId(2), 1),
            ],
        );

        let out: Vec<usize> = graph
            .successors(ContigId(0))
            .map(|o| o.target.index())
            .collect();
        assert_eq!(out, vec![1, 2]);
        assert_eq!(graph.successors(ContigId(2)).count(), 0);

        let incoming: Vec<usize> = graph
            .predecessors(ContigId(2))
            .map(|o| o.source.index())
            .collect();
        assert_eq!(incoming, vec![0, 1]);
    }

    #[test]
    fn test_edges_resolve_contigs() {
        let store = make_store();
        let graph = OverlapGraph::new(&store, vec![Overlap::new(ContigId(1), ContigId(2), 3)]);

        let edge = graph.edges().next().unwrap();
        assert_eq!(edge.source.name, "b");
        assert_eq!(edge.target.name, "c");
        assert_eq!(edge.size, 3);
        assert_eq!(graph.node_count(), 3);
    }
}
