//! Constants for prime enumeration defaults and process exit codes.

/// Number of primes computed when no count is given.
pub const DEFAULT_COUNT: i64 = 100;

/// Default inclusive ceiling on the number of primes a single call may request.
pub const DEFAULT_MAX_COUNT: u64 = 10_000;

/// Default number of primes per row in the table output.
pub const DEFAULT_ROW_WIDTH: usize = 10;

/// Minimum display width of one prime in the table output.
pub const CELL_WIDTH: usize = 4;

/// Primes below 100, used as a fast sanity reference.
pub const PRIMES_BELOW_100: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Count was zero or negative.
    pub const ERROR_INVALID_COUNT: i32 = 2;
    /// Count exceeded the configured ceiling.
    pub const ERROR_LIMIT_EXCEEDED: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
