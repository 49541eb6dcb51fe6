//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! policy book test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built risks, instants, and clocks
//! - `builders`: Builder for companies with a catalog and sold policies
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators
//! - `tracing`: One-time log subscriber setup for tests

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod tracing;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use self::tracing::init_test_tracing;
