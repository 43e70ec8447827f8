//! High-level API for prime queries.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring shared parameters and choosing an
//! execution adapter (Batch, Cursor, or Sampler).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over primitive integer types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PrimesBuilder`] via `Primes::new()`.
//! 2. Chain configuration methods (`.enumeration()`, `.start_from()`, `.default_bound()`).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.
//! 4. Call `.build()`.

// Internal dependencies
use crate::adapters::batch::BatchPrimesBuilder;
use crate::adapters::cursor::CursorPrimesBuilder;
use crate::adapters::sampler::SamplerPrimesBuilder;
use crate::primitives::integer::PrimeInt;

// Publicly re-exported types
pub use crate::adapters::batch::BatchPrimes;
pub use crate::adapters::cursor::PrimeCursor;
pub use crate::adapters::sampler::{IndexSource, PrimeSampler};
pub use crate::engine::enumerate::Enumeration;
pub use crate::primitives::errors::{ErrorKind, PrimesError};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Cursor, Sampler};
}

/// Fluent builder for configuring prime queries and execution modes.
#[derive(Debug, Clone)]
pub struct PrimesBuilder<T> {
    /// Strategy for materializing "all primes below a bound".
    pub enumeration: Option<Enumeration>,

    /// Initial cursor position (Cursor only).
    pub start: Option<T>,

    /// Exclusive bound for the no-argument random draw (Sampler only).
    pub default_bound: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: PrimeInt> Default for PrimesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimeInt> PrimesBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: PrimesAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            enumeration: None,
            start: None,
            default_bound: None,
            duplicate_param: None,
        }
    }

    /// Set the enumeration strategy (two-pass by default).
    pub fn enumeration(mut self, strategy: Enumeration) -> Self {
        if self.enumeration.is_some() {
            self.duplicate_param = Some("enumeration");
        }
        self.enumeration = Some(strategy);
        self
    }

    /// Set the initial cursor position (Cursor only).
    pub fn start_from(mut self, start: T) -> Self {
        if self.start.is_some() {
            self.duplicate_param = Some("start_from");
        }
        self.start = Some(start);
        self
    }

    /// Set the exclusive bound for the no-argument random draw (Sampler only).
    pub fn default_bound(mut self, bound: T) -> Self {
        if self.default_bound.is_some() {
            self.duplicate_param = Some("default_bound");
        }
        self.default_bound = Some(bound);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait PrimesAdapter<T: PrimeInt> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`PrimesBuilder`] into a specialized execution builder.
    fn convert(builder: PrimesBuilder<T>) -> Self::Output;
}

/// Marker for stateless fixed-bound queries.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: PrimeInt> PrimesAdapter<T> for Batch {
    type Output = BatchPrimesBuilder<T>;

    fn convert(builder: PrimesBuilder<T>) -> Self::Output {
        let mut result = BatchPrimesBuilder::default();

        if let Some(strategy) = builder.enumeration {
            result.enumeration = strategy;
        }
        result.duplicate_param = builder.duplicate_param;

        if builder.start.is_some() {
            result.deferred_error = Some(PrimesError::UnsupportedFeature {
                adapter: "Batch",
                feature: "start_from",
            });
        } else if builder.default_bound.is_some() {
            result.deferred_error = Some(PrimesError::UnsupportedFeature {
                adapter: "Batch",
                feature: "default_bound",
            });
        }

        result
    }
}

/// Marker for the resumable prime cursor.
#[derive(Debug, Clone, Copy)]
pub struct Cursor;

impl<T: PrimeInt> PrimesAdapter<T> for Cursor {
    type Output = CursorPrimesBuilder<T>;

    fn convert(builder: PrimesBuilder<T>) -> Self::Output {
        let mut result = CursorPrimesBuilder::default();

        if let Some(start) = builder.start {
            result.start = start;
        }
        result.duplicate_param = builder.duplicate_param;

        if builder.enumeration.is_some() {
            result.deferred_error = Some(PrimesError::UnsupportedFeature {
                adapter: "Cursor",
                feature: "enumeration",
            });
        } else if builder.default_bound.is_some() {
            result.deferred_error = Some(PrimesError::UnsupportedFeature {
                adapter: "Cursor",
                feature: "default_bound",
            });
        }

        result
    }
}

/// Marker for uniformly random prime selection.
#[derive(Debug, Clone, Copy)]
pub struct Sampler;

impl<T: PrimeInt> PrimesAdapter<T> for Sampler {
    type Output = SamplerPrimesBuilder<T>;

    fn convert(builder: PrimesBuilder<T>) -> Self::Output {
        let mut result = SamplerPrimesBuilder::default();

        if let Some(strategy) = builder.enumeration {
            result.enumeration = strategy;
        }
        if let Some(bound) = builder.default_bound {
            result.default_bound = bound;
        }
        result.duplicate_param = builder.duplicate_param;

        if builder.start.is_some() {
            result.deferred_error = Some(PrimesError::UnsupportedFeature {
                adapter: "Sampler",
                feature: "start_from",
            });
        }

        result
    }
}
