//! Policy domain errors
//!
//! This module defines all error types that can occur within the
//! policy book.

use chrono::{DateTime, Utc};
use thiserror::Error;

use core_kernel::{ArgumentError, TemporalError};

/// Errors that can occur in the policy domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Required argument was not supplied
    #[error("Argument '{field}' can not be null")]
    NullArgument { field: &'static str },

    /// Argument was supplied but is empty, blank, or not in the catalog
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    /// Numeric or temporal argument violates its bound
    #[error("Argument '{field}' value '{value}' is out of range: {bound}")]
    OutOfRange {
        field: &'static str,
        value: String,
        bound: String,
    },

    /// No policy matches the insured object (and effective date, if given)
    #[error("{}", not_found_message(.insured_object, .effective_date))]
    PolicyNotFound {
        insured_object: String,
        effective_date: Option<DateTime<Utc>>,
    },

    /// The requested coverage period overlaps an existing policy
    #[error("Policy for '{insured_object}' already exists in period [{valid_from}, {valid_till}]")]
    PolicyExistsInPeriod {
        insured_object: String,
        valid_from: DateTime<Utc>,
        valid_till: DateTime<Utc>,
    },

    /// Date arithmetic left the representable range
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    /// Book configuration could not be loaded or applied
    #[error("Configuration error: {0}")]
    Configuration(String),
}

fn not_found_message(insured_object: &str, effective_date: &Option<DateTime<Utc>>) -> String {
    match effective_date {
        Some(date) => format!(
            "Can not find active policy with name '{}' and the effective date '{}'",
            insured_object, date
        ),
        None => format!("Can not find active policy with name '{}'", insured_object),
    }
}

/// Class of a [`PolicyError`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyErrorKind {
    NullArgument,
    InvalidArgument,
    OutOfRange,
    PolicyNotFound,
    PolicyExistsInPeriod,
    Temporal,
    Configuration,
}

impl PolicyError {
    /// Creates a policy-not-found error for an object with no policies at all
    pub fn not_found(insured_object: impl Into<String>) -> Self {
        PolicyError::PolicyNotFound {
            insured_object: insured_object.into(),
            effective_date: None,
        }
    }

    /// Creates a policy-not-found error for an effective-date lookup miss
    pub fn not_found_at(insured_object: impl Into<String>, effective_date: DateTime<Utc>) -> Self {
        PolicyError::PolicyNotFound {
            insured_object: insured_object.into(),
            effective_date: Some(effective_date),
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        PolicyError::Configuration(message.into())
    }

    /// Returns the class of this error
    pub fn kind(&self) -> PolicyErrorKind {
        match self {
            PolicyError::NullArgument { .. } => PolicyErrorKind::NullArgument,
            PolicyError::InvalidArgument { .. } => PolicyErrorKind::InvalidArgument,
            PolicyError::OutOfRange { .. } => PolicyErrorKind::OutOfRange,
            PolicyError::PolicyNotFound { .. } => PolicyErrorKind::PolicyNotFound,
            PolicyError::PolicyExistsInPeriod { .. } => PolicyErrorKind::PolicyExistsInPeriod,
            PolicyError::Temporal(_) => PolicyErrorKind::Temporal,
            PolicyError::Configuration(_) => PolicyErrorKind::Configuration,
        }
    }

    /// Returns true for any of the three argument classes
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self.kind(),
            PolicyErrorKind::NullArgument
                | PolicyErrorKind::InvalidArgument
                | PolicyErrorKind::OutOfRange
        )
    }
}

impl From<ArgumentError> for PolicyError {
    fn from(error: ArgumentError) -> Self {
        match error {
            ArgumentError::Null { field } => PolicyError::NullArgument { field },
            ArgumentError::Invalid { field, reason } => {
                PolicyError::InvalidArgument { field, reason }
            }
            ArgumentError::OutOfRange { field, value, bound } => {
                PolicyError::OutOfRange { field, value, bound }
            }
        }
    }
}

impl From<config::ConfigError> for PolicyError {
    fn from(error: config::ConfigError) -> Self {
        PolicyError::Configuration(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_argument_errors_keep_their_class() {
        let null: PolicyError = ArgumentError::Null { field: "name" }.into();
        assert_eq!(null.kind(), PolicyErrorKind::NullArgument);
        assert!(null.is_argument_error());

        let range: PolicyError = ArgumentError::OutOfRange {
            field: "valid_months",
            value: "0".to_string(),
            bound: "must be greater than '0'".to_string(),
        }
        .into();
        assert_eq!(range.kind(), PolicyErrorKind::OutOfRange);
    }

    #[test]
    fn test_not_found_message_mentions_date_when_known() {
        let date = Utc.with_ymd_and_hms(2026, 8, 14, 0, 0, 0).unwrap();

        assert_eq!(
            PolicyError::not_found("Policy 1").to_string(),
            "Can not find active policy with name 'Policy 1'"
        );
        assert!(PolicyError::not_found_at("Policy 1", date)
            .to_string()
            .contains("2026-08-14"));
        assert!(!PolicyError::not_found("Policy 1").is_argument_error());
    }
}
