//! Integer domain abstraction.
//!
//! ## Purpose
//!
//! This module defines [`PrimeInt`], the single trait bound used by every
//! layer of the crate, along with the small constants the wheel arithmetic
//! needs. Any primitive integer (signed or unsigned, 8 to 128 bits) is a
//! valid domain.
//!
//! ## Design notes
//!
//! * **Blanket**: Implemented for every `num_traits::PrimInt` that can be printed.
//! * **Infallible constants**: Small constants are built from `one()` so they
//!   exist in every width, including `i8`.
//!
//! ## Invariants
//!
//! * `two() < three() < five() < six()` in every implementing type.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Debug, Display};
use num_traits::PrimInt;

/// Integer type usable as a prime domain.
pub trait PrimeInt: PrimInt + Debug + Display {
    /// The constant 2.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// The constant 3.
    #[inline]
    fn three() -> Self {
        Self::two() + Self::one()
    }

    /// The constant 5.
    #[inline]
    fn five() -> Self {
        Self::three() + Self::two()
    }

    /// The constant 6, one full turn of the 6k±1 wheel.
    #[inline]
    fn six() -> Self {
        Self::three() + Self::three()
    }

    /// Render a value for error messages.
    fn render(self) -> String {
        format!("{self}")
    }

    /// Number of significant bits in a non-negative value.
    #[inline]
    fn significant_bits(self) -> u32 {
        (core::mem::size_of::<Self>() as u32) * 8 - self.leading_zeros()
    }
}

impl<T: PrimInt + Debug + Display> PrimeInt for T {}
