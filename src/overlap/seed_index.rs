use std::collections::HashMap;

use crate::core::contig::ContigId;
use crate::core::store::SequenceStore;

/// Index from a fixed-length prefix ("seed") to the contigs that start with it.
///
/// Borrows seed bytes straight from the store's sequences.
pub struct SeedIndex<'a> {
    seed_len: usize,
    seed_to_contigs: HashMap<&'a [u8], Vec<ContigId>>,
}

impl<'a> SeedIndex<'a> {
    /// Index the length-`seed_len` prefix of every contig at least that long
    pub fn build(store: &'a SequenceStore, seed_len: usize) -> Self {
        let mut seed_to_contigs: HashMap<&'a [u8], Vec<ContigId>> = HashMap::new();

        for (id, contig) in store.iter() {
            if let Some(seed) = contig.prefix(seed_len) {
                seed_to_contigs.entry(seed).or_default().push(id);
            }
        }

        Self {
            seed_len,
            seed_to_contigs,
        }
    }

    #[must_use]
    pub fn seed_len(&self) -> usize {
        self.seed_len
    }

    /// Contigs whose sequence begins with `seed`, in store order
    #[must_use]
    pub fn candidates(&self, seed: &[u8]) -> &[ContigId] {
        self.seed_to_contigs
            .get(seed)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct seeds
    #[must_use]
    pub fn len(&self) -> usize {
        self.seed_to_contigs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seed_to_contigs.is_empty()
    }
}
