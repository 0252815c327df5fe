//! Enumeration options.

use crate::constants::DEFAULT_MAX_COUNT;
use crate::enumerator::PrimeError;

/// Options for prime enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Inclusive ceiling on the requested count (`None` = unlimited).
    pub max_count: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_count: Some(DEFAULT_MAX_COUNT),
        }
    }
}

impl Options {
    /// Options without any ceiling on the requested count.
    #[must_use]
    pub fn unlimited() -> Self {
        Self { max_count: None }
    }

    /// Options with the given inclusive ceiling.
    #[must_use]
    pub fn with_max_count(max_count: u64) -> Self {
        Self {
            max_count: Some(max_count),
        }
    }

    /// Reject configurations that could never accept a request.
    pub fn validate(&self) -> Result<(), PrimeError> {
        match self.max_count {
            Some(0) => Err(PrimeError::Config(
                "max count must be at least 1".into(),
            )),
            _ => Ok(()),
        }
    }
}
