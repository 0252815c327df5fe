//! Lazy prime iterator walking candidates one by one.

use crate::primality::is_prime;

/// Lazy iterator over the primes in ascending order.
///
/// Yields `(index, prime)` pairs with a 1-based index, so the first item is
/// `(1, 2)`. Every integer from 2 upward is tested in turn.
///
/// # Example
/// ```
/// use primecalc_core::iterator::PrimeIterator;
/// let primes: Vec<u64> = PrimeIterator::new().take(5).map(|(_, p)| p).collect();
/// assert_eq!(primes, [2, 3, 5, 7, 11]);
/// ```
pub struct PrimeIterator {
    candidate: u64,
    index: u64,
}

impl PrimeIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidate: 2,
            index: 0,
        }
    }

    /// Start iteration so that the next item is the `n`-th prime.
    ///
    /// `from_index(0)` and `from_index(1)` both start at 2.
    #[must_use]
    pub fn from_index(n: u64) -> Self {
        let mut iter = Self::new();
        for _ in 1..n {
            iter.next();
        }
        iter
    }
}

impl Default for PrimeIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeIterator {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.candidate;
            self.candidate = self.candidate.checked_add(1)?;
            if is_prime(candidate) {
                self.index += 1;
                return Some((self.index, candidate));
            }
        }
    }
}

impl std::iter::FusedIterator for PrimeIterator {}
