//! Policy Book Domain
//!
//! This crate implements an in-memory policy book for an insurance company.
//! The company sells policies, each covering one insured object for a
//! contiguous period and bundling a set of priced risks, and answers queries
//! against the book.
//!
//! # Model
//!
//! - **Risk**: a named peril with a yearly price
//! - **RiskCatalog**: the shared list of risks the company currently sells
//! - **Policy**: one insured object's coverage period and its risks
//! - **InsuranceCompany**: the engine that owns the book
//! - **PolicyEvent**: record of every successful mutation
//!
//! # Rules
//!
//! ```text
//! sell:   name, start >= today, months > 0, risks ∩ catalog != ∅,
//!         period disjoint from every policy of the object
//! get:    first policy of the object whose period covers the date
//! add:    append risk to the policy covering the date
//! remove: drop first equal risk from the policy covering the date
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{InsuranceCompany, Risk};
//!
//! let mut company = InsuranceCompany::new("Insurance Company 1")?;
//! company.available_risks().replace(vec![Risk::new("Theft", dec!(100))]);
//!
//! let sold = company.sell_policy("Car", start, 12, &[Risk::new("Theft", dec!(100))][..])?;
//! let active = company.get_policy("Car", start)?;
//! assert_eq!(active.premium(), sold.premium());
//! ```

pub mod company;
pub mod config;
pub mod error;
pub mod events;
pub mod policy;
pub mod risk;

pub use company::InsuranceCompany;
pub use config::{BookConfig, RiskConfig};
pub use error::{PolicyError, PolicyErrorKind};
pub use events::PolicyEvent;
pub use policy::Policy;
pub use risk::{Risk, RiskCatalog};
