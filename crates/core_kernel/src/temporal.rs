//! Coverage periods and calendar arithmetic
//!
//! This module provides the temporal vocabulary of the policy book:
//! - `CoveragePeriod`: a bounded interval, inclusive on both ends
//! - `add_months`: calendar-month addition with day-of-month clipping
//! - `Timezone`: the jurisdiction used to decide where "today" starts

use chrono::{DateTime, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Adding {months} months to {start} leaves the supported date range")]
    MonthOverflow {
        start: String,
        months: i32,
    },

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Adds a number of calendar months to an instant
///
/// The time of day is preserved. When the target month is shorter than the
/// source day-of-month, the day is clipped to the last day of the target
/// month (Jan 31 + 1 month is Feb 28, or Feb 29 in a leap year). Negative
/// counts move backwards with the same clipping.
///
/// # Errors
///
/// Returns `TemporalError::MonthOverflow` if the result is not representable.
pub fn add_months(start: DateTime<Utc>, months: i32) -> Result<DateTime<Utc>, TemporalError> {
    let span = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        start.checked_add_months(span)
    } else {
        start.checked_sub_months(span)
    };
    shifted.ok_or_else(|| TemporalError::MonthOverflow {
        start: start.to_string(),
        months,
    })
}

/// A bounded coverage interval
///
/// Both ends are inclusive: a policy valid from Jan 1 till Oct 1 covers
/// exactly midnight of Oct 1 as well. `valid_till` is always strictly after
/// `valid_from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct CoveragePeriod {
    valid_from: DateTime<Utc>,
    valid_till: DateTime<Utc>,
}

/// Unchecked wire form of a [`CoveragePeriod`]
#[derive(Deserialize)]
struct RawPeriod {
    valid_from: DateTime<Utc>,
    valid_till: DateTime<Utc>,
}

impl TryFrom<RawPeriod> for CoveragePeriod {
    type Error = TemporalError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.valid_from, raw.valid_till)
    }
}

impl CoveragePeriod {
    /// Creates a period, rejecting empty or inverted intervals
    pub fn new(
        valid_from: DateTime<Utc>,
        valid_till: DateTime<Utc>,
    ) -> Result<Self, TemporalError> {
        if valid_till <= valid_from {
            return Err(TemporalError::InvalidPeriod {
                start: valid_from.to_string(),
                end: valid_till.to_string(),
            });
        }
        Ok(Self { valid_from, valid_till })
    }

    /// Creates the period starting at `valid_from` and lasting `months` calendar months
    ///
    /// # Errors
    ///
    /// Fails if `months` is not positive or the end date overflows.
    pub fn months_from(valid_from: DateTime<Utc>, months: u32) -> Result<Self, TemporalError> {
        let months = i32::try_from(months).map_err(|_| TemporalError::MonthOverflow {
            start: valid_from.to_string(),
            months: i32::MAX,
        })?;
        let valid_till = add_months(valid_from, months)?;
        Self::new(valid_from, valid_till)
    }

    pub fn valid_from(&self) -> DateTime<Utc> {
        self.valid_from
    }

    pub fn valid_till(&self) -> DateTime<Utc> {
        self.valid_till
    }

    /// Returns true if the instant lies within the period, ends included
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.valid_from <= instant && instant <= self.valid_till
    }

    /// Returns true if the two periods share at least one instant
    ///
    /// Periods that merely touch (one ends at the exact instant the other
    /// starts) overlap, since both ends are inclusive.
    pub fn overlaps(&self, other: &CoveragePeriod) -> bool {
        self.valid_from <= other.valid_till && self.valid_till >= other.valid_from
    }

    /// Returns true if the two periods share no instant
    pub fn is_disjoint(&self, other: &CoveragePeriod) -> bool {
        self.valid_from > other.valid_till || self.valid_till < other.valid_from
    }
}

impl fmt::Display for CoveragePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.valid_from, self.valid_till)
    }
}

/// Timezone wrapper for the book's jurisdiction
///
/// Wraps chrono_tz::Tz with serialization by IANA name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(s.to_string()))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the IANA name
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Returns the local calendar date of a UTC instant
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }

    /// Gets the start of day (00:00:00) in this timezone as UTC
    ///
    /// When a DST transition skips midnight, the day starts at the first
    /// local minute that exists (e.g. 01:00 on the spring-forward day in
    /// America/Santiago).
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        (0..24 * 60)
            .filter_map(|minute| NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0))
            .find_map(|time| date.and_time(time).and_local_timezone(self.0).earliest())
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_period_rejects_inverted_and_empty() {
        assert!(CoveragePeriod::new(at(2026, 1, 1), at(2026, 1, 1)).is_err());
        assert!(matches!(
            CoveragePeriod::new(at(2026, 2, 1), at(2026, 1, 1)),
            Err(TemporalError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_period_contains_both_ends() {
        let period = CoveragePeriod::new(at(2026, 1, 1), at(2026, 10, 1)).unwrap();
        assert!(period.contains(at(2026, 1, 1)));
        assert!(period.contains(at(2026, 10, 1)));
        assert!(!period.contains(at(2026, 10, 2)));
    }

    #[test]
    fn test_touching_periods_overlap() {
        let first = CoveragePeriod::new(at(2026, 1, 1), at(2026, 6, 1)).unwrap();
        let second = CoveragePeriod::new(at(2026, 6, 1), at(2026, 12, 1)).unwrap();
        assert!(first.overlaps(&second));
        assert!(!first.is_disjoint(&second));
    }

    #[test]
    fn test_month_end_is_clipped() {
        let next = add_months(Utc.with_ymd_and_hms(2027, 1, 31, 9, 15, 0).unwrap(), 1).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2027, 2, 28, 9, 15, 0).unwrap());

        let leap = add_months(at(2028, 1, 31), 1).unwrap();
        assert_eq!(leap, at(2028, 2, 29));
    }

    #[test]
    fn test_timezone_round_trips_by_name() {
        let tz = Timezone::new(chrono_tz::Europe::Riga);
        assert_eq!("Europe/Riga".parse::<Timezone>(), Ok(tz));
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(json, "\"Europe/Riga\"");
        assert!("Mars/Olympus".parse::<Timezone>().is_err());
    }
}
