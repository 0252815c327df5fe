//! First-N prime enumeration and its error type.
//!
//! `PrimeEnumerator` validates the requested count against its `Options`,
//! then collects primes from a `PrimeIterator` until the count is reached.

use tracing::{debug, warn};

use crate::iterator::PrimeIterator;
use crate::options::Options;
use crate::sequence::PrimeSequence;

/// Error type for prime enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimeError {
    /// The requested count was zero or negative.
    #[error("count must be a positive integer, got {0}")]
    NonPositiveCount(i64),

    /// The requested count is above the configured ceiling.
    #[error("count cannot exceed {limit} (requested {count})")]
    LimitExceeded {
        /// Requested count.
        count: u64,
        /// Inclusive ceiling.
        limit: u64,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PrimeError {
    /// Whether this error rejects the requested count itself.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::NonPositiveCount(_) | Self::LimitExceeded { .. })
    }
}

/// Enumerates the first N primes by incremental trial division.
#[derive(Debug, Clone, Default)]
pub struct PrimeEnumerator {
    opts: Options,
}

impl PrimeEnumerator {
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    /// Check `count` against positivity and the ceiling.
    pub fn validate_count(&self, count: i64) -> Result<u64, PrimeError> {
        self.opts.validate()?;
        let Ok(count) = u64::try_from(count) else {
            return Err(PrimeError::NonPositiveCount(count));
        };
        if count == 0 {
            return Err(PrimeError::NonPositiveCount(0));
        }
        match self.opts.max_count {
            Some(limit) if count > limit => Err(PrimeError::LimitExceeded { count, limit }),
            _ => Ok(count),
        }
    }

    /// Return the first `count` primes in ascending order.
    pub fn enumerate(&self, count: i64) -> Result<PrimeSequence, PrimeError> {
        let count = self.validate_count(count)?;
        if self.opts.max_count.is_none() {
            warn!(count, "enumerating without a count ceiling");
        }
        debug!(count, "enumerating primes");

        let too_large = || PrimeError::Config(format!("count {count} does not fit in memory"));
        let capacity = usize::try_from(count).map_err(|_| too_large())?;
        let mut primes = Vec::new();
        primes.try_reserve_exact(capacity).map_err(|_| too_large())?;
        primes.extend(PrimeIterator::new().take(capacity).map(|(_, p)| p));

        let seq = PrimeSequence::new(primes);
        debug!(count = seq.len(), largest = ?seq.largest(), "enumeration complete");
        Ok(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_one_and_five() {
        let e = PrimeEnumerator::default();
        assert_eq!(e.enumerate(1).unwrap().into_vec(), vec![2]);
        assert_eq!(e.enumerate(5).unwrap().into_vec(), vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn hundredth_prime() {
        let seq = PrimeEnumerator::default().enumerate(100).unwrap();
        assert_eq!(seq.len(), 100);
        assert_eq!(seq.largest(), Some(541));
    }

    #[test]
    fn zero_and_negative_rejected() {
        let e = PrimeEnumerator::default();
        assert_eq!(e.enumerate(0), Err(PrimeError::NonPositiveCount(0)));
        assert_eq!(e.enumerate(-1), Err(PrimeError::NonPositiveCount(-1)));
        assert_eq!(
            e.enumerate(i64::MIN),
            Err(PrimeError::NonPositiveCount(i64::MIN))
        );
    }

    #[test]
    fn ceiling_is_inclusive() {
        let e = PrimeEnumerator::new(Options::with_max_count(20));
        assert_eq!(e.validate_count(20), Ok(20));
        assert_eq!(
            e.enumerate(21),
            Err(PrimeError::LimitExceeded {
                count: 21,
                limit: 20
            })
        );
    }

    #[test]
    fn default_ceiling_is_ten_thousand() {
        let e = PrimeEnumerator::default();
        assert_eq!(e.validate_count(10_000), Ok(10_000));
        assert!(matches!(
            e.validate_count(10_001),
            Err(PrimeError::LimitExceeded { limit: 10_000, .. })
        ));
    }

    #[test]
    fn unlimited_accepts_large_counts() {
        let e = PrimeEnumerator::new(Options::unlimited());
        assert_eq!(e.validate_count(1_000_000), Ok(1_000_000));
        assert_eq!(e.enumerate(10_001).unwrap().largest(), Some(104_743));
    }

    #[test]
    fn unreservable_count_is_config_error() {
        let e = PrimeEnumerator::new(Options::unlimited());
        assert!(matches!(e.enumerate(i64::MAX), Err(PrimeError::Config(_))));
    }

    #[test]
    fn zero_ceiling_is_config_error() {
        let e = PrimeEnumerator::new(Options::with_max_count(0));
        assert!(matches!(e.enumerate(1), Err(PrimeError::Config(_))));
    }

    #[test]
    fn invalid_argument_classification() {
        assert!(PrimeError::NonPositiveCount(0).is_invalid_argument());
        assert!(PrimeError::LimitExceeded { count: 2, limit: 1 }.is_invalid_argument());
        assert!(!PrimeError::Config("x".into()).is_invalid_argument());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            PrimeError::NonPositiveCount(-3).to_string(),
            "count must be a positive integer, got -3"
        );
        assert_eq!(
            PrimeError::LimitExceeded {
                count: 10_001,
                limit: 10_000
            }
            .to_string(),
            "count cannot exceed 10000 (requested 10001)"
        );
    }
}
