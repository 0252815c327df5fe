//! # primecalc-core
//!
//! Core library for the PrimeCalc-rs calculator.
//! Implements a trial-division primality test and first-N prime enumeration
//! with an optional ceiling on the requested count.

pub mod constants;
pub mod enumerator;
pub mod iterator;
pub mod options;
pub mod primality;
pub mod sequence;

// Re-exports
pub use constants::{
    exit_codes, CELL_WIDTH, DEFAULT_COUNT, DEFAULT_MAX_COUNT, DEFAULT_ROW_WIDTH, PRIMES_BELOW_100,
};
pub use enumerator::{PrimeEnumerator, PrimeError};
pub use iterator::PrimeIterator;
pub use options::Options;
pub use primality::is_prime;
pub use sequence::PrimeSequence;

/// Return the first `count` primes using the default options.
///
/// Fails when `count` is not positive or exceeds the default ceiling of
/// 10,000. Use `PrimeEnumerator` directly to configure the ceiling.
///
/// # Example
/// ```
/// let primes = primecalc_core::enumerate_primes(5).unwrap();
/// assert_eq!(primes.as_slice(), &[2, 3, 5, 7, 11]);
/// assert!(primecalc_core::enumerate_primes(0).is_err());
/// ```
pub fn enumerate_primes(count: i64) -> Result<PrimeSequence, PrimeError> {
    PrimeEnumerator::default().enumerate(count)
}
