//! Sampler adapter for uniformly random primes.
//!
//! ## Purpose
//!
//! This module provides the sampler execution adapter. It materializes the
//! primes in a bound or interval with the batch enumeration, then draws one
//! of them uniformly using a caller-supplied [`IndexSource`].
//!
//! ## Design notes
//!
//! * **Injected randomness**: The sampler owns no random state. Any `rand::Rng`
//!   is an [`IndexSource`]; seeded generators make draws reproducible.
//! * **Default bound**: The no-argument draw covers primes below 10,000,000,
//!   saturated to `T::max_value()` for narrower types.
//! * **Generics**: Generic over [`PrimeInt`] types.
//!
//! ## Invariants
//!
//! * A returned value is prime and lies inside the requested range.
//! * An empty candidate set is an error, never an out-of-bounds draw.
//!
//! ## Non-goals
//!
//! * This adapter does not cache enumerated candidate sets between draws.
//! * This adapter does not provide cryptographically secure prime generation.

// External dependencies
use rand::Rng;
use tracing::debug;

// Internal dependencies
use crate::engine::enumerate::Enumeration;
use crate::engine::validator::Validator;
use crate::primitives::errors::PrimesError;
use crate::primitives::integer::PrimeInt;

/// Default exclusive bound for [`PrimeSampler::random_prime`].
pub const DEFAULT_RANDOM_BOUND: u32 = 10_000_000;

// ============================================================================
// Index Source
// ============================================================================

/// Source of uniformly distributed indices.
pub trait IndexSource {
    /// Return an index uniformly distributed in `[0, len)`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

// ============================================================================
// Sampler Builder
// ============================================================================

/// Builder for the prime sampler.
#[derive(Debug, Clone)]
pub struct SamplerPrimesBuilder<T> {
    /// Exclusive bound for the no-argument draw
    pub default_bound: T,

    /// Strategy for materializing candidate sets
    pub enumeration: Enumeration,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<PrimesError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: PrimeInt> Default for SamplerPrimesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimeInt> SamplerPrimesBuilder<T> {
    /// Create a new sampler builder with default parameters.
    fn new() -> Self {
        Self {
            default_bound: T::from(DEFAULT_RANDOM_BOUND).unwrap_or_else(T::max_value),
            enumeration: Enumeration::default(),
            deferred_error: None,
            duplicate_param: None,
        }
    }

    /// Set the exclusive bound used by [`PrimeSampler::random_prime`].
    pub fn default_bound(mut self, bound: T) -> Self {
        self.default_bound = bound;
        self
    }

    /// Set the enumeration strategy.
    pub fn enumeration(mut self, strategy: Enumeration) -> Self {
        self.enumeration = strategy;
        self
    }

    /// Build the sampler.
    pub fn build(self) -> Result<PrimeSampler<T>, PrimesError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate default bound
        Validator::validate_bound(self.default_bound)?;

        Ok(PrimeSampler {
            default_bound: self.default_bound,
            enumeration: self.enumeration,
        })
    }
}

// ============================================================================
// Prime Sampler
// ============================================================================

/// Draws primes uniformly at random from a bound or interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeSampler<T> {
    default_bound: T,
    enumeration: Enumeration,
}

impl<T: PrimeInt> PrimeSampler<T> {
    /// The exclusive bound used by [`PrimeSampler::random_prime`].
    pub fn default_bound(&self) -> T {
        self.default_bound
    }

    /// A uniformly random prime below the default bound.
    pub fn random_prime<S>(&self, source: &mut S) -> Result<T, PrimesError>
    where
        S: IndexSource + ?Sized,
    {
        self.random_prime_below(self.default_bound, source)
    }

    /// A uniformly random prime strictly less than `bound`.
    pub fn random_prime_below<S>(&self, bound: T, source: &mut S) -> Result<T, PrimesError>
    where
        S: IndexSource + ?Sized,
    {
        let candidates = self.enumeration.up_to(bound)?;
        Self::draw(&candidates, bound.min(T::two()), bound, source)
    }

    /// A uniformly random prime `p` with `lower <= p < upper`.
    pub fn random_prime_between<S>(
        &self,
        lower: T,
        upper: T,
        source: &mut S,
    ) -> Result<T, PrimesError>
    where
        S: IndexSource + ?Sized,
    {
        let candidates = self.enumeration.between(lower, upper)?;
        Self::draw(&candidates, lower, upper, source)
    }

    fn draw<S>(candidates: &[T], lower: T, upper: T, source: &mut S) -> Result<T, PrimesError>
    where
        S: IndexSource + ?Sized,
    {
        Validator::validate_selection(candidates, lower, upper)?;
        // Out-of-range indices from a misbehaving source clamp to the last candidate.
        let index = source.index(candidates.len()).min(candidates.len() - 1);
        debug!(candidates = candidates.len(), index, "drew random prime");
        Ok(candidates[index])
    }
}
