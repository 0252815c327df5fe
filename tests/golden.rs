//! Golden file integration tests.
//!
//! Reads tests/testdata/primes_golden.json and verifies the enumerator and
//! the lazy iterator against known prime sequences.

use serde::Deserialize;

use primecalc_core::enumerator::{PrimeEnumerator, PrimeError};
use primecalc_core::iterator::PrimeIterator;
use primecalc_core::options::Options;
use primecalc_core::DEFAULT_MAX_COUNT;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    count: u64,
    last: u64,
    sum: u64,
    #[serde(default)]
    primes: Option<Vec<u64>>,
}

fn load_golden() -> GoldenData {
    let data = std::fs::read_to_string("tests/testdata/primes_golden.json")
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

fn as_count(count: u64) -> i64 {
    i64::try_from(count).expect("golden count fits in i64")
}

// ---------------------------------------------------------------------------
// Enumerator
// ---------------------------------------------------------------------------

#[test]
fn golden_enumerator_unlimited() {
    let enumerator = PrimeEnumerator::new(Options::unlimited());
    for entry in load_golden().values {
        let seq = enumerator.enumerate(as_count(entry.count)).unwrap();
        assert_eq!(seq.len() as u64, entry.count, "length for N={}", entry.count);
        assert_eq!(seq.largest(), Some(entry.last), "last for N={}", entry.count);
        assert_eq!(seq.iter().sum::<u64>(), entry.sum, "sum for N={}", entry.count);
        if let Some(primes) = entry.primes {
            assert_eq!(seq.as_slice(), primes.as_slice(), "list for N={}", entry.count);
        }
    }
}

#[test]
fn golden_enumerator_default_ceiling() {
    let enumerator = PrimeEnumerator::default();
    for entry in load_golden().values {
        let result = enumerator.enumerate(as_count(entry.count));
        if entry.count <= DEFAULT_MAX_COUNT {
            assert_eq!(result.unwrap().largest(), Some(entry.last));
        } else {
            assert_eq!(
                result.unwrap_err(),
                PrimeError::LimitExceeded {
                    count: entry.count,
                    limit: DEFAULT_MAX_COUNT
                }
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Iterator
// ---------------------------------------------------------------------------

#[test]
fn golden_iterator_nth_prime() {
    for entry in load_golden().values.into_iter().filter(|e| e.count <= 1229) {
        let (index, prime) = PrimeIterator::from_index(entry.count).next().unwrap();
        assert_eq!(index, entry.count);
        assert_eq!(prime, entry.last, "p({}) mismatch", entry.count);
    }
}

#[test]
fn golden_first_hundred_properties() {
    let seq = primecalc_core::enumerate_primes(100).unwrap();
    assert_eq!(seq.len(), 100);
    assert_eq!(seq[0], 2);
    assert_eq!(seq[99], 541);
    assert!(seq.windows(2).all(|w| w[0] < w[1]));
    let mut dedup = seq.to_vec();
    dedup.dedup();
    assert_eq!(dedup.len(), 100);
}
