//! Core Kernel - Foundational types and utilities for the policy book
//!
//! This crate provides the building blocks the policy domain is written against:
//! - Precondition checks that fail fast with a classified error
//! - Inclusive coverage periods and calendar-month arithmetic
//! - A clock port so "now" and "today" can be injected

pub mod validation;
pub mod temporal;
pub mod clock;

pub use validation::ArgumentError;
pub use temporal::{CoveragePeriod, TemporalError, Timezone, add_months};
pub use clock::{Clock, FixedClock, SystemClock};
