use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::core::contig::{Contig, ContigId, Strand};
use crate::parsing::fasta::{load_fasta, LoadError};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Contig index {index} out of bounds (store holds {len} contigs)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Duplicate contig name: {0}")]
    DuplicateName(String),
}

/// An ordered, immutable collection of contigs.
///
/// The store is populated once and exposes no way to add, remove or reorder
/// records afterwards, so a [`ContigId`] handed out by it stays valid for the
/// store's whole lifetime.
#[derive(Debug, Clone)]
pub struct SequenceStore {
    contigs: Vec<Contig>,

    /// Index: label -> position in `contigs`
    label_to_index: HashMap<String, usize>,
}

impl SequenceStore {
    /// Freeze a list of contigs into a store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateName` if two records share a label.
    pub fn new(contigs: Vec<Contig>) -> Result<Self, StoreError> {
        let mut label_to_index = HashMap::with_capacity(contigs.len());

        for (index, contig) in contigs.iter().enumerate() {
            let label = contig.label();
            if label_to_index.insert(label.clone(), index).is_some() {
                return Err(StoreError::DuplicateName(label));
            }
        }

        Ok(Self {
            contigs,
            label_to_index,
        })
    }

    /// Load a store from a FASTA file (`-` for stdin).
    ///
    /// # Errors
    ///
    /// See [`load_fasta`].
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        load_fasta(path)
    }

    /// Expand a single-stranded store into one holding every contig followed
    /// by its reverse complement.
    ///
    /// Consumes the store, so no `ContigId` from the single-stranded store
    /// can outlive it.
    #[must_use]
    pub fn with_reverse_complements(self) -> Self {
        if self.is_stranded() {
            return self;
        }

        let mut contigs = Vec::with_capacity(self.contigs.len() * 2);
        for contig in self.contigs {
            let reverse = contig.reverse_complement();
            contigs.push(contig.with_strand(Strand::Forward));
            contigs.push(reverse);
        }

        let label_to_index = contigs
            .iter()
            .enumerate()
            .map(|(index, contig)| (contig.label(), index))
            .collect();

        Self {
            contigs,
            label_to_index,
        }
    }

    /// Whether records carry an orientation
    #[must_use]
    pub fn is_stranded(&self) -> bool {
        self.contigs.iter().any(|c| c.strand.is_some())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    /// Bounds-checked access to a contig
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfBounds` if `id` was not issued by this store.
    pub fn get(&self, id: ContigId) -> Result<&Contig, StoreError> {
        self.contigs
            .get(id.index())
            .ok_or(StoreError::IndexOutOfBounds {
                index: id.index(),
                len: self.contigs.len(),
            })
    }

    /// Look up a contig by its label (`name`, or `+name` / `-name` when stranded)
    #[must_use]
    pub fn find(&self, label: &str) -> Option<ContigId> {
        self.label_to_index.get(label).copied().map(ContigId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContigId, &Contig)> {
        self.contigs
            .iter()
            .enumerate()
            .map(|(index, contig)| (ContigId(index), contig))
    }

    #[must_use]
    pub fn contigs(&self) -> &[Contig] {
        &self.contigs
    }

    /// Total number of residues across all contigs
    #[must_use]
    pub fn total_length(&self) -> usize {
        self.contigs.iter().map(Contig::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> SequenceStore {
        SequenceStore::new(vec![
            Contig::new("ctg1", "ACGTT"),
            Contig::new("ctg2", "TTGGA"),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_in_bounds() {
        let store = make_store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(ContigId(1)).unwrap().name, "ctg2");
    }

    #[test]
    fn test_get_out_of_bounds() {
        let store = make_store();
        let result = store.get(ContigId(2));
        assert!(matches!(
            result,
            Err(StoreError::IndexOutOfBounds { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = SequenceStore::new(vec![
            Contig::new("ctg1", "ACGT"),
            Contig::new("ctg1", "GGGG"),
        ]);
        assert!(matches!(result, Err(StoreError::DuplicateName(name)) if name == "ctg1"));
    }

    #[test]
    fn test_find() {
        let store = make_store();
        assert_eq!(store.find("ctg2"), Some(ContigId(1)));
        assert_eq!(store.find("ctg3"), None);
    }

    #[test]
    fn test_with_reverse_complements() {
        let store = make_store().with_reverse_complements();
        assert_eq!(store.len(), 4);
        assert!(store.is_stranded());

        let labels: Vec<String> = store.iter().map(|(_, c)| c.label()).collect();
        assert_eq!(labels, vec!["+ctg1", "-ctg1", "+ctg2", "-ctg2"]);
        assert_eq!(store.get(ContigId(1)).unwrap().sequence, b"AACGT");
        assert_eq!(store.find("-ctg2"), Some(ContigId(3)));
        assert_eq!(store.find("ctg2"), None);

        // Expanding twice is a no-op
        assert_eq!(store.with_reverse_complements().len(), 4);
    }

    #[test]
    fn test_total_length() {
        assert_eq!(make_store().total_length(), 10);
    }
}
