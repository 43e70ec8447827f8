//! Cursor adapter for resumable prime generation.
//!
//! ## Purpose
//!
//! This module provides the cursor execution adapter: an owned, resumable
//! position in the ascending sequence of primes. Each call to `next`
//! returns the next prime and moves past it.
//!
//! ## Design notes
//!
//! * **Ownership**: The cursor is a plain value owned by the caller. Sharing one
//!   cursor between threads requires the caller's own synchronization.
//! * **Iterator**: Implements [`Iterator`], yielding `None` once the integer
//!   domain is exhausted. [`PrimeCursor::try_next`] reports that as an error.
//! * **Generics**: Generic over [`PrimeInt`] types.
//!
//! ## Key concepts
//!
//! * **Position**: The next candidate to probe, initially 2.
//! * **Reseek**: `start_from(n)` makes the next prime returned the first prime `>= n`.
//! * **Reset**: `reset()` is `start_from(2)`.
//!
//! ## Invariants
//!
//! * Between reseeks, returned primes are strictly ascending.
//! * The position is always `>= 2` while the domain is not exhausted.
//! * `reset` and `start_from` are idempotent.
//!
//! ## Non-goals
//!
//! * This adapter is not a thread-safe shared generator.
//! * This adapter does not move backwards except through an explicit reseek.

// External dependencies
use tracing::{trace, warn};

// Internal dependencies
use crate::algorithms::scan::Ascending;
use crate::engine::validator::Validator;
use crate::primitives::errors::PrimesError;
use crate::primitives::integer::PrimeInt;

// ============================================================================
// Cursor Builder
// ============================================================================

/// Builder for the prime cursor.
#[derive(Debug, Clone)]
pub struct CursorPrimesBuilder<T> {
    /// Initial position of the cursor
    pub start: T,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<PrimesError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: PrimeInt> Default for CursorPrimesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimeInt> CursorPrimesBuilder<T> {
    /// Create a new cursor builder positioned at 2.
    fn new() -> Self {
        Self {
            start: T::two(),
            deferred_error: None,
            duplicate_param: None,
        }
    }

    /// Set the initial position. Values below 2 clamp to 2.
    pub fn start_from(mut self, start: T) -> Self {
        self.start = start;
        self
    }

    /// Build the cursor.
    pub fn build(self) -> Result<PrimeCursor<T>, PrimesError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(PrimeCursor::starting_at(self.start))
    }
}

// ============================================================================
// Prime Cursor
// ============================================================================

/// Resumable, forward-only position in the sequence of primes.
#[derive(Debug, Clone)]
pub struct PrimeCursor<T> {
    scan: Ascending<T>,
}

impl<T: PrimeInt> Default for PrimeCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimeInt> PrimeCursor<T> {
    /// A cursor positioned at the beginning of the sequence.
    pub fn new() -> Self {
        Self::starting_at(T::two())
    }

    /// A cursor whose first prime is the first prime `>= start`.
    pub fn starting_at(start: T) -> Self {
        Self {
            scan: Ascending::starting_at(start),
        }
    }

    /// Next candidate that will be probed, or `None` once the domain is exhausted.
    pub fn position(&self) -> Option<T> {
        self.scan.position()
    }

    /// `true` once the cursor has stepped past the largest value of `T`.
    ///
    /// An exhausted cursor yields nothing until `reset` or `start_from`.
    pub fn is_exhausted(&self) -> bool {
        self.scan.is_exhausted()
    }

    /// Return the next prime and move the cursor one past it.
    pub fn try_next(&mut self) -> Result<T, PrimesError> {
        self.scan.next().ok_or_else(|| {
            warn!("cursor exhausted the integer domain");
            PrimesError::exhausted::<T>("next")
        })
    }

    /// Rewind the cursor to the beginning of the sequence.
    pub fn reset(&mut self) {
        self.start_from(T::two());
    }

    /// Position the cursor so the next prime returned is the first prime `>= n`.
    ///
    /// Values below 2 clamp to 2.
    pub fn start_from(&mut self, n: T) {
        trace!(%n, "cursor reseek");
        self.scan.seek(n);
    }
}

impl<T: PrimeInt> Iterator for PrimeCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.scan.next()
    }
}
