//! Trial-division primality test.

use num_integer::Roots;
use num_traits::PrimInt;

/// Test whether `n` is prime by trial division.
///
/// Values below 2, negatives included, are not prime. Even values other
/// than 2 are rejected up front; odd values are checked against every odd
/// divisor in `[3, isqrt(n)]`.
///
/// Works for any primitive integer type. The square-root bound is computed
/// with integer arithmetic, so it is exact across the whole range of `u64`.
///
/// # Example
/// ```
/// use primecalc_core::primality::is_prime;
///
/// assert!(is_prime(541u64));
/// assert!(!is_prime(-7i64));
/// assert!(!is_prime(1i32));
/// ```
#[must_use]
pub fn is_prime<T: PrimInt + Roots>(n: T) -> bool {
    let two = T::one() + T::one();
    if n < two {
        return false;
    }
    if n == two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let limit = n.sqrt();
    let mut divisor = two + T::one();
    while divisor <= limit {
        if (n % divisor).is_zero() {
            return false;
        }
        divisor = divisor + two;
    }
    true
}
