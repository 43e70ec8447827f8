//! Counting and indexing primes.
//!
//! ## Purpose
//!
//! This module implements the fixed-bound queries: counting primes in a
//! collection, counting primes below a bound, and locating the k-th prime.
//!
//! ## Design notes
//!
//! * **Wheel walk**: `nth_prime` special-cases 2 and 3, then only probes the
//!   6k±1 candidates.
//! * **Unvalidated**: Callers validate `k >= 1`; this layer only reports
//!   domain exhaustion (as `None`).
//!
//! ## Invariants
//!
//! * `nth_prime(k)` equals the k-th value yielded by an ascending scan from 2.
//! * `count_smaller_than(n) == 0` for every `n <= 2`.

// Internal dependencies
use crate::algorithms::primality::is_prime;
use crate::algorithms::scan::Ascending;
use crate::math::wheel::Wheel;
use crate::primitives::integer::PrimeInt;

/// Number of primes among `values`.
pub fn count<T, I>(values: I) -> usize
where
    T: PrimeInt,
    I: IntoIterator<Item = T>,
{
    values.into_iter().filter(|&v| is_prime(v)).count()
}

/// Number of primes `p` with `2 <= p < n`.
pub fn count_smaller_than<T: PrimeInt>(n: T) -> usize {
    if n <= T::two() {
        return 0;
    }
    Ascending::between(T::two(), n).count()
}

/// The k-th prime (1-based), or `None` if it lies beyond `T::max_value()`.
///
/// `k = 0` also yields `None`.
pub fn nth_prime<T: PrimeInt>(k: usize) -> Option<T> {
    match k {
        0 => None,
        1 => Some(T::two()),
        2 => Some(T::three()),
        _ => Wheel::new().filter(|&c| is_prime(c)).nth(k - 3),
    }
}
