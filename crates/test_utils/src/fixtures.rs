//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the policy book. All instants are
//! relative to one fixed "now" so tests never depend on the wall clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{add_months, FixedClock, Timezone};
use domain_policy::{Risk, RiskCatalog};
use rust_decimal_macros::dec;

/// Fixture for risk test data
pub struct RiskFixtures;

impl RiskFixtures {
    pub fn risk_1() -> Risk {
        Risk::new("Risk 1", dec!(100))
    }

    pub fn risk_2() -> Risk {
        Risk::new("Risk 2", dec!(200))
    }

    pub fn risk_3() -> Risk {
        Risk::new("Risk 3", dec!(300))
    }

    pub fn risk_4() -> Risk {
        Risk::new("Risk 4", dec!(400))
    }

    /// The four standard risks, priced 100 to 400
    pub fn standard() -> Vec<Risk> {
        vec![Self::risk_1(), Self::risk_2(), Self::risk_3(), Self::risk_4()]
    }

    /// A catalog holding the four standard risks
    pub fn catalog() -> RiskCatalog {
        RiskCatalog::new(Self::standard())
    }

    /// A risk no standard catalog offers
    pub fn unavailable() -> Risk {
        Risk::new("Risk 9", dec!(900))
    }

    /// A standard risk name with a price the catalog does not list
    pub fn mispriced() -> Risk {
        Risk::new("Risk 1", dec!(101))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The fixed current instant (Oct 14, 2026 10:30 UTC)
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 10, 30, 0).unwrap()
    }

    /// Midnight UTC of the fixed current day
    pub fn today_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 0, 0, 0).unwrap()
    }

    /// Midnight UTC of the day before the fixed current day
    pub fn yesterday() -> DateTime<Utc> {
        Self::today_start() - Duration::days(1)
    }

    /// The fixed current instant shifted by whole days
    pub fn days_from_now(days: i64) -> DateTime<Utc> {
        Self::now() + Duration::days(days)
    }

    /// The fixed current instant shifted by calendar months
    pub fn months_from_now(months: i32) -> DateTime<Utc> {
        add_months(Self::now(), months).unwrap()
    }

    /// A clock frozen at the fixed current instant, in UTC
    pub fn clock() -> FixedClock {
        FixedClock::new(Self::now())
    }

    /// A clock frozen at the fixed current instant, in the given timezone
    pub fn clock_in(timezone: &str) -> FixedClock {
        let timezone: Timezone = timezone.parse().unwrap();
        FixedClock::new(Self::now()).with_timezone(timezone)
    }
}

/// Fixture for common string values
pub struct StringFixtures;

impl StringFixtures {
    pub fn company_name() -> &'static str {
        "Insurance Company 1"
    }

    pub fn insured_object() -> &'static str {
        "Policy 1"
    }

    pub fn other_insured_object() -> &'static str {
        "Policy 2"
    }
}
