//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure integer arithmetic the primality test is
//! built on:
//! - Overflow-free integer square root
//! - The 6k±1 wheel (trial divisors and candidate walk)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exact integer square root.
pub mod isqrt;

/// 6k±1 wheel iterators.
pub mod wheel;
