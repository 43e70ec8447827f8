//! The 6k±1 wheel.
//!
//! ## Purpose
//!
//! Every prime above 3 has the form `6k - 1` or `6k + 1`. This module
//! provides the two walks built on that fact:
//!
//! * [`DivisorPairs`] yields the trial divisors `(6k - 1, 6k + 1)` for
//!   `6k` up to an inclusive limit.
//! * [`Wheel`] yields the candidates `5, 7, 11, 13, 17, ...` by alternating
//!   `+2` and `+4` steps.
//!
//! ## Invariants
//!
//! * Both walks stop instead of wrapping when the next step would overflow `T`.
//! * No value yielded is divisible by 2 or 3.

// Internal dependencies
use crate::primitives::integer::PrimeInt;

// ============================================================================
// Divisor Pairs
// ============================================================================

/// Trial-divisor pairs `(d - 1, d + 1)` for `d = 6, 12, 18, ...` while `d <= limit`.
#[derive(Debug, Clone)]
pub struct DivisorPairs<T> {
    d: Option<T>,
    limit: T,
}

impl<T: PrimeInt> DivisorPairs<T> {
    /// Start the walk at `d = 6`.
    pub fn new(limit: T) -> Self {
        Self {
            d: Some(T::six()),
            limit,
        }
    }
}

impl<T: PrimeInt> Iterator for DivisorPairs<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        let d = self.d.filter(|&d| d <= self.limit)?;
        let hi = d.checked_add(&T::one())?;
        self.d = d.checked_add(&T::six());
        Some((d - T::one(), hi))
    }
}

// ============================================================================
// Candidate Wheel
// ============================================================================

/// Candidates of the form 6k±1, starting at 5.
#[derive(Debug, Clone)]
pub struct Wheel<T> {
    candidate: Option<T>,
    step: T,
}

impl<T: PrimeInt> Wheel<T> {
    /// Start the wheel at 5 with a `+2` step.
    pub fn new() -> Self {
        Self {
            candidate: Some(T::five()),
            step: T::two(),
        }
    }
}

impl<T: PrimeInt> Default for Wheel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimeInt> Iterator for Wheel<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.candidate?;
        self.candidate = current.checked_add(&self.step);
        self.step = T::six() - self.step;
        Some(current)
    }
}
