#![cfg(feature = "dev")]
//! Tests for the Cursor adapter.
//!
//! The Cursor adapter provides resumable forward-only prime generation.
//!
//! ## Test Organization
//!
//! 1. **Basic Functionality** - Sequential generation from 2
//! 2. **Lifecycle Management** - Reset and reseek behavior
//! 3. **Iterator Integration** - Standard iterator adapters
//! 4. **Edge Cases** - Clamping and domain exhaustion

use primes::prelude::*;

use primes::internals::adapters::cursor::{CursorPrimesBuilder, PrimeCursor};
use primes::internals::primitives::errors::PrimesError;

const FIRST_PRIMES: [u32; 8] = [2, 3, 5, 7, 11, 13, 17, 19];

// ============================================================================
// Basic Functionality Tests
// ============================================================================

/// Test sequential generation from a fresh cursor.
#[test]
fn test_cursor_sequence_from_start() {
    let mut cursor = Primes::<u32>::new().adapter(Cursor).build().unwrap();

    for &expected in &FIRST_PRIMES {
        assert_eq!(cursor.try_next(), Ok(expected));
    }
    assert_eq!(cursor.position(), Some(20));
}

// ============================================================================
// Lifecycle Management Tests
// ============================================================================

/// Test that reset restarts the sequence, repeatedly.
#[test]
fn test_cursor_reset_is_repeatable() {
    let mut cursor = PrimeCursor::<u32>::new();

    for _ in 0..2 {
        cursor.reset();
        for &expected in &FIRST_PRIMES {
            assert_eq!(cursor.try_next(), Ok(expected));
        }
    }
}

/// Test reseeking to a composite, a prime, and back.
#[test]
fn test_cursor_start_from() {
    let mut cursor = PrimeCursor::<u32>::new();

    cursor.start_from(14);
    assert_eq!(cursor.next(), Some(17));

    cursor.start_from(17);
    assert_eq!(cursor.next(), Some(17));

    cursor.start_from(3);
    assert_eq!(cursor.next(), Some(3));
    assert_eq!(cursor.next(), Some(5));
}

/// Test that reseeking is idempotent.
#[test]
fn test_cursor_start_from_idempotent() {
    let mut cursor = PrimeCursor::<u32>::new();

    cursor.start_from(100);
    cursor.start_from(100);
    assert_eq!(cursor.position(), Some(100));
    assert_eq!(cursor.next(), Some(101));
}

/// Test the builder's initial position.
#[test]
fn test_cursor_builder_start() {
    let mut cursor = Primes::<i64>::new()
        .start_from(1_000_000)
        .adapter(Cursor)
        .build()
        .unwrap();

    assert_eq!(cursor.next(), Some(1_000_003));
}

// ============================================================================
// Iterator Integration Tests
// ============================================================================

/// Test cursor as a standard iterator.
#[test]
fn test_cursor_iterator_adapters() {
    let cursor = PrimeCursor::<u64>::new();
    let twins: Vec<(u64, u64)> = cursor
        .scan(None, |prev: &mut Option<u64>, p| {
            let pair = prev.map(|q| (q, p));
            *prev = Some(p);
            Some(pair)
        })
        .flatten()
        .filter(|(q, p)| p - q == 2)
        .take(4)
        .collect();

    assert_eq!(twins, vec![(3, 5), (5, 7), (11, 13), (17, 19)]);
}

// ============================================================================
// Edge Cases Tests
// ============================================================================

/// Test that starts below 2 clamp to 2.
#[test]
fn test_cursor_clamps_low_starts() {
    let mut cursor = PrimeCursor::<i32>::starting_at(-40);
    assert_eq!(cursor.position(), Some(2));
    assert_eq!(cursor.next(), Some(2));

    cursor.start_from(i32::MIN);
    assert_eq!(cursor.next(), Some(2));
}

/// Test exhaustion of a narrow type and recovery via reset.
#[test]
fn test_cursor_domain_exhausted() {
    let mut cursor = CursorPrimesBuilder::<i8>::default()
        .start_from(120)
        .build()
        .unwrap();

    assert!(!cursor.is_exhausted());
    assert_eq!(cursor.try_next(), Ok(127));
    assert!(cursor.is_exhausted());
    assert!(matches!(
        cursor.try_next(),
        Err(PrimesError::DomainExhausted {
            operation: "next",
            ..
        })
    ));
    assert_eq!(cursor.next(), None);

    cursor.reset();
    assert!(!cursor.is_exhausted());
    assert_eq!(cursor.next(), Some(2));
}

/// Test that batch-only options are rejected.
#[test]
fn test_cursor_rejects_enumeration() {
    let res = Primes::<u32>::new().enumeration(TwoPass).adapter(Cursor).build();

    assert!(matches!(
        res,
        Err(PrimesError::UnsupportedFeature {
            adapter: "Cursor",
            feature: "enumeration",
        })
    ));
}
