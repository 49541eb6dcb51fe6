//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{DateTime, Duration, TimeZone, Utc};
use domain_policy::Risk;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating risk names
pub fn risk_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}"
}

/// Strategy for generating positive yearly prices with two decimal places
pub fn yearly_price_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating valid risks
pub fn risk_strategy() -> impl Strategy<Value = Risk> {
    (risk_name_strategy(), yearly_price_strategy())
        .prop_map(|(name, price)| Risk::new(name, price))
}

/// Strategy for generating non-empty risk lists
pub fn risk_list_strategy(max_len: usize) -> impl Strategy<Value = Vec<Risk>> {
    prop::collection::vec(risk_strategy(), 1..=max_len.max(1))
}

/// Strategy for generating accepted policy lengths in months
pub fn valid_months_strategy() -> impl Strategy<Value = i16> {
    1i16..=120i16
}

/// Strategy for generating non-positive policy lengths
pub fn invalid_months_strategy() -> impl Strategy<Value = i16> {
    i16::MIN..=0i16
}

/// Strategy for generating start instants from the given day onwards
pub fn start_from_strategy(earliest: DateTime<Utc>) -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..3650i64, 0i64..86_400i64)
        .prop_map(move |(days, seconds)| {
            earliest + Duration::days(days) + Duration::seconds(seconds)
        })
}

/// Strategy for generating instants in a fixed ten-year window
pub fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..315_360_000i64)
        .prop_map(|secs| {
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)
        })
}
