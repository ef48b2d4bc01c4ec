//! Thread-safe accumulation of matching models and search progress.

use bfcrc_engine::CrcModel;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Shared sink that workers report matches and progress into.
///
/// Matches are appended under a mutex; they are rare, so contention is
/// negligible. Progress is a relaxed atomic counter that the reporter reads
/// without taking the lock.
pub struct MatchCollector {
    matches: Mutex<Vec<CrcModel>>,
    progress: AtomicU64,
}

impl MatchCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self {
            matches: Mutex::new(Vec::new()),
            progress: AtomicU64::new(0),
        }
    }

    /// Records a model that reproduced every test vector.
    pub fn record_match(&self, model: CrcModel) {
        let mut matches = self.matches.lock().unwrap_or_else(PoisonError::into_inner);
        matches.push(model);
    }

    /// Adds `steps` evaluated candidates to the progress counter and returns
    /// the new total.
    pub fn add_progress(&self, steps: u64) -> u64 {
        self.progress
            .fetch_add(steps, Ordering::Relaxed)
            .saturating_add(steps)
    }

    /// Number of candidates evaluated so far.
    pub fn progress(&self) -> u64 {
        self.progress.load(Ordering::Relaxed)
    }

    /// Number of matches recorded so far.
    pub fn match_count(&self) -> usize {
        self.matches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Drains the recorded matches into a deduplicated, ordered set.
    pub fn take(&self) -> MatchSet {
        let mut matches = self.matches.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *matches).into_iter().collect()
    }
}

impl Default for MatchCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// The models found by a search, in a deterministic order.
///
/// Ordering follows [`CrcModel`]'s derived `Ord`, so the result is the same
/// no matter how many threads produced it or in which order they finished.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    models: BTreeSet<CrcModel>,
}

impl MatchSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns `true` if the search found nothing.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterates the models in order.
    pub fn iter(&self) -> impl Iterator<Item = &CrcModel> {
        self.models.iter()
    }

    /// Returns `true` if `model` was found.
    pub fn contains(&self, model: &CrcModel) -> bool {
        self.models.contains(model)
    }

    /// Converts into an ordered vector.
    pub fn into_vec(self) -> Vec<CrcModel> {
        self.models.into_iter().collect()
    }
}

impl FromIterator<CrcModel> for MatchSet {
    fn from_iter<I: IntoIterator<Item = CrcModel>>(iter: I) -> Self {
        Self {
            models: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a CrcModel;
    type IntoIter = std::collections::btree_set::Iter<'a, CrcModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}
