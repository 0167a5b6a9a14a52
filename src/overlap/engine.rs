use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info};

use crate::core::contig::ContigId;
use crate::core::graph::{Overlap, OverlapGraph};
use crate::core::store::SequenceStore;
use crate::overlap::seed_index::SeedIndex;

/// Default minimum overlap length
pub const DEFAULT_MIN_OVERLAP: usize = 33;

/// Default maximum overlap length
pub const DEFAULT_MAX_OVERLAP: usize = 200;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlapError {
    #[error("Invalid overlap range [{min}, {max}]: requires 1 <= min <= max")]
    InvalidRange { min: usize, max: usize },
}

/// Algorithm used to enumerate candidate pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Compare every ordered pair of contigs
    BruteForce,
    /// Only compare pairs whose boundary seeds match
    SeedFiltered,
}

/// Configuration for the overlap engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapConfig {
    /// Smallest overlap reported (also the seed length)
    pub min_overlap: usize,
    /// Largest overlap considered
    pub max_overlap: usize,
    /// Prune candidate pairs with a seed index
    pub use_seed_filter: bool,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            min_overlap: DEFAULT_MIN_OVERLAP,
            max_overlap: DEFAULT_MAX_OVERLAP,
            use_seed_filter: true,
        }
    }
}

impl OverlapConfig {
    #[must_use]
    pub fn new(min_overlap: usize, max_overlap: usize) -> Self {
        Self {
            min_overlap,
            max_overlap,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed_filter(mut self, use_seed_filter: bool) -> Self {
        self.use_seed_filter = use_seed_filter;
        self
    }

    /// Check `1 <= min_overlap <= max_overlap`
    ///
    /// # Errors
    ///
    /// Returns `OverlapError::InvalidRange` if the range is empty or starts at zero.
    pub fn validate(&self) -> Result<(), OverlapError> {
        if self.min_overlap < 1 || self.max_overlap < self.min_overlap {
            return Err(OverlapError::InvalidRange {
                min: self.min_overlap,
                max: self.max_overlap,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn strategy(&self) -> ScanStrategy {
        if self.use_seed_filter {
            ScanStrategy::SeedFiltered
        } else {
            ScanStrategy::BruteForce
        }
    }
}

/// Largest `size` in `[min, max]` such that the last `size` residues of
/// `source` equal the first `size` residues of `target`
#[must_use]
pub fn longest_overlap(source: &[u8], target: &[u8], min: usize, max: usize) -> Option<usize> {
    let upper = max.min(source.len()).min(target.len());
    (min.max(1)..=upper)
        .rev()
        .find(|&size| source[source.len() - size..] == target[..size])
}

/// Computes suffix/prefix overlaps between all contigs of a store
pub struct OverlapEngine<'a> {
    store: &'a SequenceStore,
    config: OverlapConfig,
}

impl<'a> OverlapEngine<'a> {
    /// Create an engine, rejecting an invalid overlap range before any work is done
    ///
    /// # Errors
    ///
    /// Returns `OverlapError::InvalidRange` if the configured range is invalid.
    pub fn new(store: &'a SequenceStore, config: OverlapConfig) -> Result<Self, OverlapError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    #[must_use]
    pub fn config(&self) -> &OverlapConfig {
        &self.config
    }

    /// Compute the overlap graph with the configured strategy
    #[must_use]
    pub fn compute(&self) -> OverlapGraph<'a> {
        self.compute_with(self.config.strategy())
    }

    /// Compute the overlap graph with an explicit strategy
    #[must_use]
    pub fn compute_with(&self, strategy: ScanStrategy) -> OverlapGraph<'a> {
        info!(
            "Computing overlaps between {} contigs (range {}..={}, {:?})",
            self.store.len(),
            self.config.min_overlap,
            self.config.max_overlap,
            strategy
        );

        let overlaps = match strategy {
            ScanStrategy::BruteForce => self.brute_force(),
            ScanStrategy::SeedFiltered => self.seed_filtered(),
        };

        info!("Found {} overlaps", overlaps.len());
        OverlapGraph::new(self.store, overlaps)
    }

    fn brute_force(&self) -> Vec<Overlap> {
        let OverlapConfig {
            min_overlap,
            max_overlap,
            ..
        } = self.config;
        let mut overlaps = Vec::new();

        for (source_id, source) in self.store.iter() {
            if source.len() < min_overlap {
                continue;
            }

            for (target_id, target) in self.store.iter() {
                if source_id == target_id {
                    continue;
                }
                if let Some(size) =
                    longest_overlap(&source.sequence, &target.sequence, min_overlap, max_overlap)
                {
                    overlaps.push(Overlap::new(source_id, target_id, size));
                }
            }
        }

        overlaps
    }

    fn seed_filtered(&self) -> Vec<Overlap> {
        let OverlapConfig {
            min_overlap,
            max_overlap,
            ..
        } = self.config;
        let contigs = self.store.contigs();
        let index = SeedIndex::build(self.store, min_overlap);
        debug!(
            "Indexed {} distinct seeds of length {}",
            index.len(),
            index.seed_len()
        );

        let mut overlaps = Vec::new();
        let mut matched: HashSet<ContigId> = HashSet::new();
        let mut verified = 0usize;

        for (source_id, source) in self.store.iter() {
            let len = source.len();
            if len < min_overlap {
                continue;
            }
            matched.clear();

            // A size-`size` overlap puts the target's seed at the start of the
            // source's length-`size` suffix. Sizes are tried largest first, so
            // the first verified hit for a target is its maximal overlap.
            for size in (min_overlap..=max_overlap.min(len)).rev() {
                let window = &source.sequence[len - size..];
                let seed = &window[..min_overlap];

                for &target_id in index.candidates(seed) {
                    if target_id == source_id || matched.contains(&target_id) {
                        continue;
                    }

                    verified += 1;
                    if contigs[target_id.index()].prefix(size) == Some(window) {
                        matched.insert(target_id);
                        overlaps.push(Overlap::new(source_id, target_id, size));
                    }
                }
            }
        }

        debug!("Verified {verified} seed-matched candidates");
        overlaps
    }
}
