//! # primes — Exact primality testing and prime enumeration for Rust
//!
//! Deterministic trial-division primality testing and ordered prime
//! enumeration over every primitive integer type, from `u8` to `i128`.
//!
//! ## What does it provide?
//!
//! - A yes/no primality oracle using the 6k±1 wheel.
//! - The k-th prime in natural order.
//! - All primes below a bound, or in a half-open interval.
//! - A resumable, forward-only prime cursor.
//! - Uniformly random prime selection with an injected random source.
//!
//! ## Quick Start
//!
//! ### Fixed-bound queries
//!
//! ```rust
//! use primes::prelude::*;
//!
//! let primes = Primes::<u32>::new().adapter(Batch).build()?;
//!
//! assert!(primes.is_prime(7919));
//! assert_eq!(primes.nth_prime(1000)?, 7919);
//! assert_eq!(primes.count_smaller_than(19), 7);
//! assert_eq!(primes.up_to(20)?, vec![2, 3, 5, 7, 11, 13, 17, 19]);
//! assert_eq!(primes.between(4, 11)?, vec![5, 7]);
//! # Result::<(), PrimesError>::Ok(())
//! ```
//!
//! ### Resumable cursor
//!
//! ```rust
//! use primes::prelude::*;
//!
//! let mut cursor = Primes::<u64>::new().start_from(100).adapter(Cursor).build()?;
//!
//! assert_eq!(cursor.try_next()?, 101);
//! assert_eq!(cursor.try_next()?, 103);
//!
//! cursor.reset();
//! let first: Vec<u64> = cursor.by_ref().take(4).collect();
//! assert_eq!(first, vec![2, 3, 5, 7]);
//! # Result::<(), PrimesError>::Ok(())
//! ```
//!
//! ### Random primes
//!
//! ```rust
//! use primes::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let sampler = Primes::<u32>::new().default_bound(1_000).adapter(Sampler).build()?;
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let p = sampler.random_prime_between(100, 200, &mut rng)?;
//! assert!(is_prime(p) && (100..200).contains(&p));
//! # Result::<(), PrimesError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, PrimesError>`. Every error maps
//! onto one of two kinds via [`PrimesError::kind`](prelude::PrimesError::kind):
//!
//! - **`InvalidArgument`**: a zero prime index, a bound admitting no primes,
//!   a scan that would step past the integer type's maximum, or builder
//!   misconfiguration.
//! - **`EmptySelection`**: a random draw over a range containing no primes.
//!
//! ```rust
//! use primes::prelude::*;
//!
//! let primes = Primes::<u32>::new().adapter(Batch).build()?;
//!
//! match primes.nth_prime(0) {
//!     Ok(p) => println!("{p}"),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::InvalidArgument),
//! }
//! # Result::<(), PrimesError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency
//! (`alloc` is still required for enumerations):
//!
//! ```toml
//! [dependencies]
//! primes = { version = "0.3", default-features = false }
//! ```
//!
//! ## Concurrency
//!
//! The batch processor and sampler are stateless `Copy` values. A cursor is
//! a plain owned value; sharing one between threads needs the caller's own
//! synchronization (e.g. a `Mutex<PrimeCursor<T>>`).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - integer domain and errors.
mod primitives;

// Layer 2: Math - integer square root and the 6k±1 wheel.
mod math;

// Layer 3: Algorithms - primality, scanning, counting.
mod algorithms;

// Layer 4: Engine - validation and enumeration.
mod engine;

// Layer 5: Adapters - batch, cursor, and sampler processors.
mod adapters;

// High-level fluent API.
mod api;

pub use crate::algorithms::primality::is_prime;
pub use crate::primitives::integer::PrimeInt;

// Standard prelude.
pub mod prelude {
    pub use crate::algorithms::primality::is_prime;
    pub use crate::api::{
        Adapter::{Batch, Cursor, Sampler},
        BatchPrimes, Enumeration,
        Enumeration::{SinglePass, TwoPass},
        ErrorKind, IndexSource, PrimeCursor, PrimeSampler, PrimesBuilder as Primes, PrimesError,
    };
    pub use crate::primitives::integer::PrimeInt;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
