//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core prime algorithms:
//! - The trial-division primality oracle
//! - The ascending prime scan
//! - Counting and k-th prime queries
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Primality oracle.
pub mod primality;

/// Ascending prime scan.
pub mod scan;

/// Counting and indexing.
pub mod counting;
