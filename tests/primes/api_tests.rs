#![cfg(feature = "dev")]
//! Tests for the high-level builder API.
//!
//! ## Test Organization
//!
//! 1. **Defaults** - Builder starts with every parameter unset
//! 2. **Duplicate Detection** - Parameters can only be set once
//! 3. **Adapter Conversion** - Parameters flow into adapter builders

use primes::prelude::*;

use primes::internals::api::PrimesBuilder;
use primes::internals::primitives::errors::PrimesError;

// ============================================================================
// Defaults Tests
// ============================================================================

/// Test that a new builder has no parameters set.
#[test]
fn test_builder_defaults() {
    let builder = PrimesBuilder::<u32>::default();

    assert!(builder.enumeration.is_none());
    assert!(builder.start.is_none());
    assert!(builder.default_bound.is_none());
    assert!(builder.duplicate_param.is_none());
}

// ============================================================================
// Duplicate Detection Tests
// ============================================================================

/// Test that setting a parameter twice fails at build time.
#[test]
fn test_duplicate_enumeration() {
    let res = Primes::<u32>::new()
        .enumeration(TwoPass)
        .enumeration(SinglePass)
        .adapter(Batch)
        .build();

    assert_eq!(
        res,
        Err(PrimesError::DuplicateParameter {
            parameter: "enumeration"
        })
    );
}

/// Test duplicate detection for each adapter-specific parameter.
#[test]
fn test_duplicate_adapter_parameters() {
    let cursor = Primes::<u32>::new()
        .start_from(3)
        .start_from(5)
        .adapter(Cursor)
        .build();
    assert!(matches!(
        cursor,
        Err(PrimesError::DuplicateParameter {
            parameter: "start_from"
        })
    ));

    let sampler = Primes::<u32>::new()
        .default_bound(100)
        .default_bound(200)
        .adapter(Sampler)
        .build();
    assert_eq!(
        sampler,
        Err(PrimesError::DuplicateParameter {
            parameter: "default_bound"
        })
    );
}

// ============================================================================
// Adapter Conversion Tests
// ============================================================================

/// Test that parameters reach the adapter builders.
#[test]
fn test_parameters_flow_into_adapters() {
    let batch = Primes::<u32>::new().enumeration(SinglePass).adapter(Batch);
    assert_eq!(batch.enumeration, SinglePass);

    let cursor = Primes::<u32>::new().start_from(40).adapter(Cursor);
    assert_eq!(cursor.start, 40);

    let sampler = Primes::<u32>::new()
        .default_bound(500)
        .enumeration(SinglePass)
        .adapter(Sampler);
    assert_eq!(sampler.default_bound, 500);
    assert_eq!(sampler.enumeration, SinglePass);
}

/// Test that adapter builders can still be tuned after conversion.
#[test]
fn test_adapter_builder_setters() {
    let batch = Primes::<u32>::new()
        .adapter(Batch)
        .enumeration(SinglePass)
        .build()
        .unwrap();
    assert_eq!(batch.enumeration(), SinglePass);

    let sampler = Primes::<u32>::new()
        .adapter(Sampler)
        .default_bound(30)
        .build()
        .unwrap();
    assert_eq!(sampler.default_bound(), 30);
}
