//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the algorithms into complete operations:
//! - Validation of arguments and configuration
//! - Bulk enumeration strategies
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Bulk enumeration.
pub mod enumerate;
