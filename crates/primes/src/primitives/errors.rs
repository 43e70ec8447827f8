//! Error types for prime operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while querying,
//! enumerating, or sampling primes, including argument validation, integer
//! domain limits, builder misconfiguration, and empty random selections.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (index, bounds, operation).
//! * **Deferred**: Builder misconfiguration is recorded and surfaced at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Invalid arguments**: Zero index, bounds admitting no primes, domain overflow.
//! 2. **Empty selection**: A random draw over an empty candidate set.
//! 3. **Builder constraints**: Duplicate parameters, adapter-specific options.
//!
//! ## Invariants
//!
//! * Every variant maps onto exactly one [`ErrorKind`].
//! * Bounds are rendered with the caller's integer type before being stored.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::integer::PrimeInt;

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`PrimesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied an argument outside the operation's domain.
    InvalidArgument,

    /// A random draw was requested over an empty set of primes.
    EmptySelection,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for prime operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimesError {
    /// Prime indices are 1-based; `k = 0` has no prime.
    InvalidIndex(usize),

    /// The scan would step past the largest value of the integer type.
    DomainExhausted {
        /// Name of the operation that ran out of room.
        operation: &'static str,
        /// Largest representable value of the integer type.
        limit: String,
    },

    /// A configured bound admits no primes.
    InvalidBound(String),

    /// No primes exist in the requested range.
    EmptySelection {
        /// Inclusive lower bound of the range.
        lower: String,
        /// Exclusive upper bound of the range.
        upper: String,
    },

    /// Selected adapter does not support the requested option.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Batch", "Cursor").
        adapter: &'static str,
        /// Name of the unsupported option.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl PrimesError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySelection { .. } => ErrorKind::EmptySelection,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Domain exhaustion for integer type `T` while running `operation`.
    pub fn exhausted<T: PrimeInt>(operation: &'static str) -> Self {
        Self::DomainExhausted {
            operation,
            limit: T::max_value().render(),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PrimesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidIndex(k) => write!(f, "Invalid prime index: {k} (must be >= 1)"),
            Self::DomainExhausted { operation, limit } => {
                write!(
                    f,
                    "Domain exhausted: {operation} would exceed the integer limit {limit}"
                )
            }
            Self::InvalidBound(bound) => {
                write!(f, "Invalid bound: {bound} (must be > 2 to admit a prime)")
            }
            Self::EmptySelection { lower, upper } => {
                write!(f, "Empty selection: no primes in [{lower}, {upper})")
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PrimesError {}

