//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing processors that adapt the engine layer
//! for different usage patterns:
//!
//! - **Batch**: Stateless fixed-bound queries and bulk enumeration
//! - **Cursor**: Resumable forward-only generation
//! - **Sampler**: Uniformly random selection
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Stateless batch queries.
pub mod batch;

/// Resumable prime cursor.
pub mod cursor;

/// Random prime selection.
pub mod sampler;
