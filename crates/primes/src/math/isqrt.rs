//! Exact integer square root.
//!
//! The trial-division bound must never overflow, even for `T::max_value()`.
//! Newton's iteration is started from a power of two that is guaranteed to
//! over-estimate the root, so every intermediate `x + n / x` stays below
//! `2^(bits / 2 + 2)` and fits in the value's own width.

// Internal dependencies
use crate::primitives::integer::PrimeInt;

/// Floor of the square root of `n`. Negative inputs return zero.
pub fn isqrt<T: PrimeInt>(n: T) -> T {
    if n < T::two() {
        return n.max(T::zero());
    }

    let shift = n.significant_bits().div_ceil(2) as usize;
    let mut x = T::one() << shift;
    loop {
        let y = (x + n / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}
