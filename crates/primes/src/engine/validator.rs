//! Input validation for prime queries and builder configuration.
//!
//! ## Purpose
//!
//! This module checks arguments and configuration before any computation
//! starts, so that operations either run to completion or fail without
//! producing partial results.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Cheap**: Every check is O(1); none of them probe primality.
//! * **Generics**: Bound checks are generic over [`PrimeInt`] types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their operation's preconditions.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or correct invalid inputs.
//! * This module does not detect domain exhaustion, which is only known mid-scan.

// Internal dependencies
use crate::primitives::errors::PrimesError;
use crate::primitives::integer::PrimeInt;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for prime queries and configuration.
///
/// All methods return `Result<(), PrimesError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Argument Validation
    // ========================================================================

    /// Validate a 1-based prime index.
    pub fn validate_index(k: usize) -> Result<(), PrimesError> {
        if k == 0 {
            return Err(PrimesError::InvalidIndex(k));
        }
        Ok(())
    }

    /// Validate that an exclusive upper bound admits at least one prime.
    pub fn validate_bound<T: PrimeInt>(bound: T) -> Result<(), PrimesError> {
        if bound <= T::two() {
            return Err(PrimesError::InvalidBound(bound.render()));
        }
        Ok(())
    }

    /// Validate that a random selection has at least one candidate.
    pub fn validate_selection<T: PrimeInt>(
        candidates: &[T],
        lower: T,
        upper: T,
    ) -> Result<(), PrimesError> {
        if candidates.is_empty() {
            return Err(PrimesError::EmptySelection {
                lower: lower.render(),
                upper: upper.render(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PrimesError> {
        if let Some(param) = duplicate_param {
            return Err(PrimesError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
