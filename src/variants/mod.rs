//! Look-alike variant generators and the candidate accumulator
//!
//! Label generators (typo, hyphen, homoglyph) work on the main label only and
//! are combined with TLDs by [`expand_label`]. The prefixer works on the whole
//! original domain.

mod expand;
mod homoglyph;
mod hyphen;
mod prefix;
mod typo;

pub use expand::expand_label;
pub use homoglyph::HomoglyphMap;
pub use hyphen::hyphenations;
pub use prefix::prefixed;
pub use typo::{deletions, doublings, insertions, run_doublings, transpositions, typo_variants};

use std::collections::hash_set;
use std::collections::HashSet;

/// Deduplicated set of generated domains for one run.
///
/// Only grows. Iteration order is unspecified; use [`CandidateSet::into_sorted`]
/// when a stable order is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    inner: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate. Returns `true` if it was not already present.
    pub fn insert(&mut self, candidate: String) -> bool {
        self.inner.insert(candidate)
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.inner.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.inner.iter()
    }

    /// Consume the set into a lexicographically sorted list
    pub fn into_sorted(self) -> Vec<String> {
        let mut sorted: Vec<String> = self.inner.into_iter().collect();
        sorted.sort();
        sorted
    }

    /// Sorted copy, leaving the set intact
    pub fn sorted(&self) -> Vec<String> {
        self.clone().into_sorted()
    }
}

impl IntoIterator for CandidateSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
