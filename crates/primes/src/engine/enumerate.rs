//! Bulk enumeration of primes.
//!
//! ## Purpose
//!
//! This module produces complete, ascending sequences of primes: the first
//! `n` primes, all primes below a bound, and all primes in a half-open
//! interval. Each call starts from fresh local state.
//!
//! ## Design notes
//!
//! * **Two-pass**: `up_to(bound)` counts the primes below `bound`, then regenerates
//!   exactly that many from 2. The result length always equals the count.
//! * **Single-pass**: Collects primes below `bound` in one scan into a growable vector.
//! * **Interval fast path**: `between` with a lower bound of 2 (or less) reuses `up_to`.
//!
//! ## Invariants
//!
//! * Results are strictly ascending, duplicate-free, and all-prime.
//! * Both strategies return identical results for every input.
//! * No partial results: either the full sequence or an error.
//!
//! ## Non-goals
//!
//! * Sieve-based generation.
//! * Caching results between calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use tracing::{debug, warn};

// Internal dependencies
use crate::algorithms::counting::count_smaller_than;
use crate::algorithms::scan::Ascending;
use crate::primitives::errors::PrimesError;
use crate::primitives::integer::PrimeInt;

// ============================================================================
// Enumeration Strategy
// ============================================================================

/// Strategy used to materialize "all primes below a bound".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enumeration {
    /// Count the primes below the bound, then regenerate that many from 2.
    #[default]
    TwoPass,

    /// Collect the primes below the bound in a single scan.
    SinglePass,
}

impl Enumeration {
    /// All primes strictly less than `bound`, ascending.
    pub fn up_to<T: PrimeInt>(&self, bound: T) -> Result<Vec<T>, PrimesError> {
        debug!(%bound, strategy = ?self, "enumerating primes below bound");
        match self {
            Self::TwoPass => first_n(count_smaller_than(bound)),
            Self::SinglePass => Ok(Ascending::between(T::two(), bound).collect()),
        }
    }

    /// All primes `p` with `lower <= p < upper`, ascending.
    pub fn between<T: PrimeInt>(&self, lower: T, upper: T) -> Result<Vec<T>, PrimesError> {
        if upper <= lower {
            return Ok(Vec::new());
        }
        if lower <= T::two() {
            return self.up_to(upper);
        }
        debug!(%lower, %upper, "enumerating primes in interval");
        Ok(Ascending::between(lower, upper).collect())
    }
}

// ============================================================================
// Fixed-Start Enumeration
// ============================================================================

/// The first `n` primes, ascending.
///
/// Fails with [`PrimesError::DomainExhausted`] if fewer than `n` primes fit in `T`.
pub fn first_n<T: PrimeInt>(n: usize) -> Result<Vec<T>, PrimesError> {
    let primes: Vec<T> = Ascending::starting_at(T::two()).take(n).collect();
    if primes.len() < n {
        warn!(requested = n, found = primes.len(), "integer domain exhausted");
        return Err(PrimesError::exhausted::<T>("first_n"));
    }
    Ok(primes)
}
