//! Domain events for the policy book
//!
//! Every successful mutation of the book is recorded as an event. Events are
//! used for:
//! - Audit trails
//! - Feeding downstream views of the book without re-reading it

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::risk::Risk;

/// Domain events emitted by the insurance company
///
/// A policy is identified by its insured object and the start of its
/// coverage, which are unique together since periods never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyEvent {
    /// A policy has been sold
    PolicySold {
        insured_object: String,
        valid_from: DateTime<Utc>,
        valid_till: DateTime<Utc>,
        risks: Vec<Risk>,
        premium: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// A risk has been added to an existing policy
    RiskAdded {
        insured_object: String,
        policy_valid_from: DateTime<Utc>,
        risk: Risk,
        risk_valid_from: DateTime<Utc>,
        premium: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// A risk has been removed from an existing policy
    RiskRemoved {
        insured_object: String,
        policy_valid_from: DateTime<Utc>,
        risk: Risk,
        risk_valid_till: DateTime<Utc>,
        premium: Decimal,
        timestamp: DateTime<Utc>,
    },
}

impl PolicyEvent {
    /// Returns the insured object the event concerns
    pub fn insured_object(&self) -> &str {
        match self {
            PolicyEvent::PolicySold { insured_object, .. }
            | PolicyEvent::RiskAdded { insured_object, .. }
            | PolicyEvent::RiskRemoved { insured_object, .. } => insured_object,
        }
    }

    /// Returns when the event was recorded
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            PolicyEvent::PolicySold { timestamp, .. }
            | PolicyEvent::RiskAdded { timestamp, .. }
            | PolicyEvent::RiskRemoved { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the premium of the policy right after the event
    pub fn premium_after(&self) -> Decimal {
        match self {
            PolicyEvent::PolicySold { premium, .. }
            | PolicyEvent::RiskAdded { premium, .. }
            | PolicyEvent::RiskRemoved { premium, .. } => *premium,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            PolicyEvent::PolicySold { .. } => "PolicySold",
            PolicyEvent::RiskAdded { .. } => "RiskAdded",
            PolicyEvent::RiskRemoved { .. } => "RiskRemoved",
        }
    }
}
