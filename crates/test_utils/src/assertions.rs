//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use domain_policy::{Policy, PolicyError, PolicyErrorKind, Risk};
use rust_decimal::Decimal;

/// Asserts that a policy's premium equals the expected amount
pub fn assert_premium_eq(policy: &Policy, expected: Decimal) {
    assert_eq!(
        policy.premium(),
        expected,
        "Premium mismatch for '{}': actual={}, expected={}, risks={:?}",
        policy.insured_object_name(),
        policy.premium(),
        expected,
        policy.insured_risks()
    );
}

/// Asserts that a policy carries exactly these risks, in this order
pub fn assert_risks_eq(policy: &Policy, expected: &[Risk]) {
    assert_eq!(
        policy.insured_risks(),
        expected,
        "Risk list mismatch for '{}'",
        policy.insured_object_name()
    );
}

/// Asserts that a policy is active at the instant
pub fn assert_covers(policy: &Policy, instant: DateTime<Utc>) {
    assert!(
        policy.covers(instant),
        "Expected {} to be covered by policy [{}, {}]",
        instant,
        policy.valid_from(),
        policy.valid_till()
    );
}

/// Asserts that a policy is not active at the instant
pub fn assert_not_covers(policy: &Policy, instant: DateTime<Utc>) {
    assert!(
        !policy.covers(instant),
        "Expected {} to be outside policy [{}, {}]",
        instant,
        policy.valid_from(),
        policy.valid_till()
    );
}

/// Asserts that a result failed with the given error kind
pub fn assert_error_kind<T: Debug>(result: Result<T, PolicyError>, expected: PolicyErrorKind) {
    match result {
        Ok(value) => panic!("Expected {:?} error, got Ok({:?})", expected, value),
        Err(error) => assert_eq!(
            error.kind(),
            expected,
            "Expected {:?} error, got {:?}",
            expected,
            error
        ),
    }
}
