//! Batch adapter for fixed-bound prime queries.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: stateless primality
//! tests, counts, k-th prime lookup, and bulk enumeration. Every call starts
//! from fresh local state and shares nothing with any cursor.
//!
//! ## Design notes
//!
//! * **Stateless**: The processor holds configuration only, so it is `Copy`
//!   and can be used from any number of threads at once.
//! * **Delegation**: Counting and enumeration are delegated to the algorithm
//!   and engine layers.
//! * **Generics**: Generic over [`PrimeInt`] types.
//!
//! ## Key concepts
//!
//! * **Validation first**: Arguments are validated before any probing.
//! * **Enumeration strategy**: Two-pass (default) or single-pass `up_to`.
//!
//! ## Invariants
//!
//! * `nth_prime(k)` equals the k-th element of `first_n(k)`.
//! * `between(2, b)` equals `up_to(b)`.
//!
//! ## Non-goals
//!
//! * This adapter does not keep a resumable position (use the cursor adapter).
//! * This adapter does not draw random primes (use the sampler adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use tracing::warn;

// Internal dependencies
use crate::algorithms::counting;
use crate::algorithms::primality;
use crate::engine::enumerate::{self, Enumeration};
use crate::engine::validator::Validator;
use crate::primitives::errors::PrimesError;
use crate::primitives::integer::PrimeInt;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch prime processor.
#[derive(Debug, Clone)]
pub struct BatchPrimesBuilder<T> {
    /// Strategy for materializing "all primes below a bound"
    pub enumeration: Enumeration,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<PrimesError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _domain: PhantomData<T>,
}

impl<T: PrimeInt> Default for BatchPrimesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimeInt> BatchPrimesBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            enumeration: Enumeration::default(),
            deferred_error: None,
            duplicate_param: None,
            _domain: PhantomData,
        }
    }

    /// Set the enumeration strategy.
    pub fn enumeration(mut self, strategy: Enumeration) -> Self {
        self.enumeration = strategy;
        self
    }

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchPrimes<T>, PrimesError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(BatchPrimes {
            enumeration: self.enumeration,
            _domain: PhantomData,
        })
    }
}

// ============================================================================
// Batch Processor
// ============================================================================

/// Stateless prime query processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPrimes<T> {
    enumeration: Enumeration,
    _domain: PhantomData<T>,
}

impl<T: PrimeInt> BatchPrimes<T> {
    /// The configured enumeration strategy.
    pub fn enumeration(&self) -> Enumeration {
        self.enumeration
    }

    /// Return `true` iff `n` is prime.
    pub fn is_prime(&self, n: T) -> bool {
        primality::is_prime(n)
    }

    /// Number of primes among `values`.
    pub fn count<I: IntoIterator<Item = T>>(&self, values: I) -> usize {
        counting::count(values)
    }

    /// Number of primes `p` with `2 <= p < n`.
    pub fn count_smaller_than(&self, n: T) -> usize {
        counting::count_smaller_than(n)
    }

    /// The k-th prime, 1-based (`nth_prime(1) == 2`).
    pub fn nth_prime(&self, k: usize) -> Result<T, PrimesError> {
        Validator::validate_index(k)?;
        counting::nth_prime(k).ok_or_else(|| {
            warn!(k, "integer domain exhausted");
            PrimesError::exhausted::<T>("nth_prime")
        })
    }

    /// The first `n` primes, ascending.
    pub fn first_n(&self, n: usize) -> Result<Vec<T>, PrimesError> {
        enumerate::first_n(n)
    }

    /// All primes strictly less than `bound`, ascending.
    pub fn up_to(&self, bound: T) -> Result<Vec<T>, PrimesError> {
        self.enumeration.up_to(bound)
    }

    /// All primes `p` with `lower <= p < upper`, ascending.
    pub fn between(&self, lower: T, upper: T) -> Result<Vec<T>, PrimesError> {
        self.enumeration.between(lower, upper)
    }
}
