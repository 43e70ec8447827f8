//! Ascending linear scan over candidates.
//!
//! ## Purpose
//!
//! This module provides [`Ascending`], the iterator shared by every
//! operation that walks the integers in natural order and keeps the primes:
//! bounded interval scans, fresh `first_n` enumeration, and the resumable
//! cursor.
//!
//! ## Design notes
//!
//! * **Position**: The iterator holds the next candidate to probe, so it can be
//!   inspected and reseeded by the cursor adapter.
//! * **Exhaustion**: When the candidate would step past `T::max_value()` the scan
//!   ends instead of wrapping. [`Ascending::is_exhausted`] reports it,
//!   and the cursor adapter exposes it to callers.
//! * **Bounds**: An optional exclusive end stops the scan without probing past it.
//!
//! ## Invariants
//!
//! * Yielded values are prime, strictly ascending, and never repeat.
//! * The position never decreases except through [`Ascending::seek`].

// Internal dependencies
use crate::algorithms::primality::is_prime;
use crate::primitives::integer::PrimeInt;

/// Ascending scan yielding every prime from a starting candidate.
#[derive(Debug, Clone)]
pub struct Ascending<T> {
    /// Next value to probe; `None` once the integer domain is exhausted.
    candidate: Option<T>,

    /// Exclusive upper bound, if any.
    end: Option<T>,
}

impl<T: PrimeInt> Ascending<T> {
    /// Scan from `start` with no upper bound. Starts below 2 clamp to 2.
    pub fn starting_at(start: T) -> Self {
        Self {
            candidate: Some(start.max(T::two())),
            end: None,
        }
    }

    /// Scan the half-open interval `[start, end)`.
    pub fn between(start: T, end: T) -> Self {
        Self {
            candidate: Some(start.max(T::two())),
            end: Some(end),
        }
    }

    /// Next candidate that will be probed, if the domain is not exhausted.
    pub fn position(&self) -> Option<T> {
        self.candidate
    }

    /// `true` once the scan has stepped past the largest value of `T`.
    pub fn is_exhausted(&self) -> bool {
        self.candidate.is_none()
    }

    /// Move the scan so the next prime yielded is the first one `>= start`.
    pub fn seek(&mut self, start: T) {
        self.candidate = Some(start.max(T::two()));
    }
}

impl<T: PrimeInt> Iterator for Ascending<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let candidate = self.candidate?;
            if self.end.is_some_and(|end| candidate >= end) {
                return None;
            }
            self.candidate = candidate.checked_add(&T::one());
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
    }
}
