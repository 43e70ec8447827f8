//! Deterministic trial-division primality test.
//!
//! ## Purpose
//!
//! This module implements the primality oracle every other operation is
//! built on. It answers exactly, for every value of every integer width.
//!
//! ## Design notes
//!
//! * **Wheel**: Multiples of 2 and 3 are rejected up front; the remaining
//!   trial divisors are the 6k±1 pairs, roughly a third of naive trial division.
//! * **Bound**: Divisor pairs are tried while `6k <= isqrt(n) + 1`, so the pair
//!   straddling `sqrt(n)` is always checked.
//! * **Total**: Values below 2 (including negatives) are simply not prime.
//!
//! ## Invariants
//!
//! * `is_prime(n)` iff `n >= 2` and `n` has no divisor in `[2, sqrt(n)]`.
//! * The test performs no allocation and has no side effects.
//!
//! ## Non-goals
//!
//! * Probabilistic tests (Miller-Rabin, Baillie-PSW).
//! * Arbitrary-precision integers.

// Internal dependencies
use crate::math::isqrt::isqrt;
use crate::math::wheel::DivisorPairs;
use crate::primitives::integer::PrimeInt;

/// Return `true` iff `n` is prime.
pub fn is_prime<T: PrimeInt>(n: T) -> bool {
    let (two, three) = (T::two(), T::three());

    if n < two {
        return false;
    }
    if n == two || n == three {
        return true;
    }
    if (n % two).is_zero() || (n % three).is_zero() {
        return false;
    }

    // isqrt(n) < n for n >= 4, so the +1 cannot overflow.
    let limit = isqrt(n) + T::one();
    !DivisorPairs::new(limit).any(|(lo, hi)| (n % lo).is_zero() || (n % hi).is_zero())
}
