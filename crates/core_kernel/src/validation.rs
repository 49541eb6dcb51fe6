//! Precondition checks
//!
//! Stateless guards that every public domain operation runs before touching
//! state. Each check either hands back the validated value or fails with a
//! classified [`ArgumentError`]; none of them has a side effect.
//!
//! Absent values are modelled as `Option::None`, so the "null" class of
//! failure stays expressible without resorting to sentinel values.

use std::fmt::Display;

use thiserror::Error;

/// Classified precondition failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArgumentError {
    /// A required value was not supplied
    #[error("'{field}' can not be null")]
    Null { field: &'static str },

    /// A value was supplied but is semantically empty or unusable
    #[error("'{field}' is invalid: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },

    /// A numeric or temporal value violates its bound
    #[error("'{field}' value '{value}' is out of range: {bound}")]
    OutOfRange {
        field: &'static str,
        value: String,
        bound: String,
    },
}

impl ArgumentError {
    /// Returns the name of the argument that failed the check
    pub fn field(&self) -> &'static str {
        match self {
            ArgumentError::Null { field }
            | ArgumentError::Invalid { field, .. }
            | ArgumentError::OutOfRange { field, .. } => field,
        }
    }
}

/// Requires a string to be present and to contain a non-whitespace character
///
/// # Errors
///
/// * [`ArgumentError::Null`] if `value` is `None`
/// * [`ArgumentError::Invalid`] if `value` is empty or all whitespace
pub fn require_non_blank<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ArgumentError> {
    let value = require_present(value, field)?;
    if value.trim().is_empty() {
        return Err(ArgumentError::Invalid {
            field,
            reason: "can not be empty or whitespace".to_string(),
        });
    }
    Ok(value)
}

/// Requires a value to be present
pub fn require_present<T>(value: Option<T>, field: &'static str) -> Result<T, ArgumentError> {
    value.ok_or(ArgumentError::Null { field })
}

/// Requires `value` to be strictly greater than `lower_bound`
///
/// Works for any ordered type, including `Decimal`, integer counts and
/// timestamps.
pub fn require_greater_than<T>(
    value: T,
    lower_bound: T,
    field: &'static str,
) -> Result<T, ArgumentError>
where
    T: PartialOrd + Display,
{
    if value <= lower_bound {
        return Err(ArgumentError::OutOfRange {
            field,
            value: value.to_string(),
            bound: format!("must be greater than '{}'", lower_bound),
        });
    }
    Ok(value)
}

/// Requires a collection to be present and to hold at least one element
pub fn require_non_empty<'a, T>(
    items: Option<&'a [T]>,
    field: &'static str,
) -> Result<&'a [T], ArgumentError> {
    match items {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(ArgumentError::Invalid {
            field,
            reason: "can not be empty or null".to_string(),
        }),
    }
}

/// Requires `start` not to be after `end`
///
/// The value reported on failure is `end`, the argument the caller usually
/// controls (e.g. a requested start date checked against "today").
pub fn require_not_after<T>(start: T, end: T, field: &'static str) -> Result<(), ArgumentError>
where
    T: PartialOrd + Display,
{
    if start > end {
        return Err(ArgumentError::OutOfRange {
            field,
            value: end.to_string(),
            bound: format!("must not be before '{}'", start),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_non_blank_accepts_text() {
        assert_eq!(require_non_blank(Some("Policy 1"), "name"), Ok("Policy 1"));
    }

    #[test]
    fn test_non_blank_classifies_failures() {
        assert_eq!(
            require_non_blank(None, "name"),
            Err(ArgumentError::Null { field: "name" })
        );
        assert!(matches!(
            require_non_blank(Some(""), "name"),
            Err(ArgumentError::Invalid { .. })
        ));
        assert!(matches!(
            require_non_blank(Some(" \t\n"), "name"),
            Err(ArgumentError::Invalid { .. })
        ));
    }

    #[test]
    fn test_greater_than_is_strict() {
        assert!(require_greater_than(dec!(0.01), Decimal::ZERO, "price").is_ok());
        assert!(matches!(
            require_greater_than(Decimal::ZERO, Decimal::ZERO, "price"),
            Err(ArgumentError::OutOfRange { field: "price", .. })
        ));
        assert!(require_greater_than(-3i16, 0, "months").is_err());
    }

    #[test]
    fn test_non_empty_rejects_none_and_empty() {
        let empty: [u8; 0] = [];
        assert!(require_non_empty::<u8>(None, "risks").is_err());
        assert!(require_non_empty(Some(&empty[..]), "risks").is_err());
        assert_eq!(require_non_empty(Some(&[1, 2][..]), "risks").map(|s| s.len()), Ok(2));
    }

    #[test]
    fn test_not_after_allows_equal() {
        assert!(require_not_after(5, 5, "valid_from").is_ok());
        assert!(require_not_after(4, 5, "valid_from").is_ok());

        let err = require_not_after(6, 5, "valid_from").unwrap_err();
        assert_eq!(err.field(), "valid_from");
        assert!(err.to_string().contains("'5'"));
    }
}
