//! Immutable ascending prime sequence.

use std::ops::Deref;

use serde::Serialize;

/// The first N primes, strictly increasing.
///
/// Constructed only by the enumerator; read-only afterwards. Serializes as
/// a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrimeSequence {
    primes: Vec<u64>,
}

impl PrimeSequence {
    pub(crate) fn new(primes: Vec<u64>) -> Self {
        debug_assert!(primes.windows(2).all(|w| w[0] < w[1]));
        Self { primes }
    }

    /// Number of primes in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Largest prime found, i.e. the last element.
    #[must_use]
    pub fn largest(&self) -> Option<u64> {
        self.primes.last().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<u64> {
        self.primes
    }

    /// Split into consecutive rows of at most `width` primes.
    ///
    /// Each row carries its 1-based start position. A `width` of 0 is
    /// treated as 1.
    pub fn rows(&self, width: usize) -> impl Iterator<Item = (usize, &[u64])> + '_ {
        let width = width.max(1);
        self.primes
            .chunks(width)
            .enumerate()
            .map(move |(i, row)| (i * width + 1, row))
    }
}

impl Deref for PrimeSequence {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.primes
    }
}

impl<'a> IntoIterator for &'a PrimeSequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.iter()
    }
}
