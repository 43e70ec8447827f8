#![cfg(feature = "dev")]
//! Tests for the Batch adapter.
//!
//! The Batch adapter provides stateless fixed-bound queries, designed for:
//! - Primality checks
//! - Counting and k-th prime lookup
//! - Bulk enumeration below a bound or inside an interval
//!
//! ## Test Organization
//!
//! 1. **Basic Functionality** - Reference values for every query
//! 2. **Consistency** - Relationships between queries
//! 3. **Error Handling** - Invalid arguments and domain exhaustion
//! 4. **Builder Validation** - Parameter validation

use primes::prelude::*;

use primes::internals::adapters::batch::BatchPrimesBuilder;
use primes::internals::primitives::errors::PrimesError;

const FIRST_PRIMES: [i32; 8] = [2, 3, 5, 7, 11, 13, 17, 19];

fn batch() -> BatchPrimes<i32> {
    Primes::new()
        .adapter(Batch)
        .build()
        .expect("Builder should succeed")
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

/// Test k-th prime reference values.
#[test]
fn test_batch_nth_prime() {
    let primes = batch();

    assert_eq!(primes.nth_prime(1), Ok(2));
    assert_eq!(primes.nth_prime(6), Ok(13));
    assert_eq!(primes.nth_prime(1000), Ok(7919));
}

/// Test primality reference values.
#[test]
fn test_batch_is_prime() {
    let primes = batch();

    assert!(primes.is_prime(2));
    assert!(!primes.is_prime(4));
    assert!(primes.is_prime(7919));
}

/// Test counting.
#[test]
fn test_batch_counts() {
    let primes = batch();

    assert_eq!(primes.count(FIRST_PRIMES), FIRST_PRIMES.len());
    assert_eq!(primes.count_smaller_than(5), 2);
    assert_eq!(primes.count_smaller_than(19), FIRST_PRIMES.len() - 1);
}

/// Test bulk enumeration.
#[test]
fn test_batch_enumeration() {
    let primes = batch();

    assert_eq!(primes.first_n(FIRST_PRIMES.len()).unwrap(), FIRST_PRIMES);
    assert_eq!(primes.up_to(20).unwrap(), FIRST_PRIMES);
    assert_eq!(primes.between(4, 11).unwrap(), vec![5, 7]);
}

// ============================================================================
// Consistency Tests
// ============================================================================

/// Test that `between(2, b)` equals `up_to(b)`.
#[test]
fn test_batch_between_from_two() {
    let primes = batch();

    for bound in [0, 2, 3, 20, 97, 98, 1000] {
        assert_eq!(primes.between(2, bound), primes.up_to(bound), "bound = {bound}");
    }
}

/// Test that the k-th prime is the last of the first k.
#[test]
fn test_batch_nth_prime_matches_first_n() {
    let primes = batch();

    for k in 1..200 {
        assert_eq!(primes.nth_prime(k).ok(), primes.first_n(k).unwrap().last().copied());
    }
}

/// Test that both strategies give identical results.
#[test]
fn test_batch_strategies_agree() {
    let two_pass = Primes::<u32>::new().enumeration(TwoPass).adapter(Batch).build().unwrap();
    let single = Primes::<u32>::new().enumeration(SinglePass).adapter(Batch).build().unwrap();

    assert_eq!(two_pass.enumeration(), TwoPass);
    assert_eq!(single.enumeration(), SinglePass);
    assert_eq!(two_pass.up_to(5000), single.up_to(5000));
    assert_eq!(two_pass.between(1000, 2000), single.between(1000, 2000));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

/// Test that the zero index is rejected.
#[test]
fn test_batch_nth_prime_zero() {
    assert_eq!(batch().nth_prime(0), Err(PrimesError::InvalidIndex(0)));
}

/// Test domain exhaustion in a narrow type.
#[test]
fn test_batch_domain_exhausted() {
    let primes = Primes::<i8>::new().adapter(Batch).build().unwrap();

    assert_eq!(primes.nth_prime(31), Ok(127));
    assert!(matches!(
        primes.nth_prime(32),
        Err(PrimesError::DomainExhausted {
            operation: "nth_prime",
            ..
        })
    ));
    assert!(primes.first_n(32).is_err());
    assert_eq!(primes.up_to(i8::MAX).unwrap().len(), 30);
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test direct construction of the execution builder.
#[test]
fn test_batch_builder_default() {
    let primes = BatchPrimesBuilder::<u64>::default().build().unwrap();
    assert_eq!(primes.enumeration(), TwoPass);
}

/// Test that cursor-only options are rejected.
#[test]
fn test_batch_rejects_start_from() {
    let res = Primes::<u32>::new().start_from(10).adapter(Batch).build();

    assert_eq!(
        res,
        Err(PrimesError::UnsupportedFeature {
            adapter: "Batch",
            feature: "start_from",
        })
    );
}

/// Test that sampler-only options are rejected.
#[test]
fn test_batch_rejects_default_bound() {
    let res = Primes::<u32>::new().default_bound(100).adapter(Batch).build();

    assert!(matches!(
        res,
        Err(PrimesError::UnsupportedFeature {
            feature: "default_bound",
            ..
        })
    ));
}
