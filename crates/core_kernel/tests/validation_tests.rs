//! Tests for the precondition checks

use chrono::{Duration, TimeZone, Utc};
use core_kernel::validation::{
    require_greater_than, require_non_blank, require_non_empty, require_not_after,
    require_present,
};
use core_kernel::ArgumentError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod strings {
    use super::*;

    #[test]
    fn test_null_string_is_null_argument() {
        let error = require_non_blank(None, "name").unwrap_err();

        assert_eq!(error, ArgumentError::Null { field: "name" });
        assert_eq!(error.to_string(), "'name' can not be null");
    }

    #[test]
    fn test_empty_string_is_invalid_argument() {
        let error = require_non_blank(Some(""), "name").unwrap_err();

        match error {
            ArgumentError::Invalid { field, reason } => {
                assert_eq!(field, "name");
                assert!(reason.contains("empty"));
            }
            other => panic!("Expected Invalid error, got {:?}", other),
        }
    }

    #[test]
    fn test_padded_text_is_returned_untrimmed() {
        assert_eq!(require_non_blank(Some("  Car  "), "name"), Ok("  Car  "));
    }
}

mod presence {
    use super::*;

    #[test]
    fn test_present_value_is_returned() {
        assert_eq!(require_present(Some(42), "risk"), Ok(42));
    }

    #[test]
    fn test_absent_value_is_null_argument() {
        assert_eq!(
            require_present::<&str>(None, "risk"),
            Err(ArgumentError::Null { field: "risk" })
        );
    }
}

mod bounds {
    use super::*;

    #[test]
    fn test_decimal_lower_bound() {
        assert_eq!(require_greater_than(dec!(100), Decimal::ZERO, "yearly_price"), Ok(dec!(100)));

        let error = require_greater_than(dec!(-1), Decimal::ZERO, "yearly_price").unwrap_err();
        assert!(matches!(error, ArgumentError::OutOfRange { field: "yearly_price", .. }));
        assert!(error.to_string().contains("'-1'"));
    }

    #[test]
    fn test_integer_lower_bound() {
        assert!(require_greater_than(1i16, 0, "valid_months").is_ok());
        assert!(require_greater_than(0i16, 0, "valid_months").is_err());
    }

    #[test]
    fn test_timestamp_lower_bound() {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();

        assert!(require_greater_than(now + Duration::seconds(1), now, "valid_till").is_ok());
        assert!(require_greater_than(now, now, "valid_till").is_err());
    }

    #[test]
    fn test_date_ordering() {
        let today = Utc.with_ymd_and_hms(2026, 10, 14, 0, 0, 0).unwrap();

        assert!(require_not_after(today, today, "valid_from").is_ok());
        assert!(require_not_after(today, today + Duration::hours(5), "valid_from").is_ok());

        let error = require_not_after(today, today - Duration::days(1), "valid_from").unwrap_err();
        assert!(matches!(error, ArgumentError::OutOfRange { field: "valid_from", .. }));
    }
}

mod collections {
    use super::*;

    #[test]
    fn test_empty_collection_is_invalid_argument() {
        let empty: Vec<u32> = Vec::new();

        assert!(matches!(
            require_non_empty(Some(empty.as_slice()), "selected_risks"),
            Err(ArgumentError::Invalid { field: "selected_risks", .. })
        ));
    }

    #[test]
    fn test_missing_collection_is_invalid_argument() {
        assert!(matches!(
            require_non_empty::<u32>(None, "selected_risks"),
            Err(ArgumentError::Invalid { .. })
        ));
    }
}
