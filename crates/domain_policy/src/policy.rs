//! The Policy record
//!
//! A policy is one insured object's single coverage interval together with
//! the risks insured during it. The premium is not stored; it is derived
//! from the current risk list on every read.
//!
//! # Invariants
//!
//! - `valid_till` is strictly after `valid_from`
//! - The risk list is owned by the policy; it starts as a copy of the matched
//!   catalog entries and may later shrink to empty through removals

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::CoveragePeriod;
use crate::risk::Risk;

/// A time-bounded bundle of risks for one insured object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Name of the insured object
    insured_object_name: String,
    /// Coverage interval, inclusive on both ends
    period: CoveragePeriod,
    /// Risks currently insured, in insertion order
    insured_risks: Vec<Risk>,
}

impl Policy {
    pub(crate) fn new(
        insured_object_name: impl Into<String>,
        period: CoveragePeriod,
        insured_risks: Vec<Risk>,
    ) -> Self {
        Self {
            insured_object_name: insured_object_name.into(),
            period,
            insured_risks,
        }
    }

    /// Returns the name of the insured object
    pub fn insured_object_name(&self) -> &str {
        &self.insured_object_name
    }

    /// Returns the instant the policy becomes active
    pub fn valid_from(&self) -> DateTime<Utc> {
        self.period.valid_from()
    }

    /// Returns the instant the policy becomes inactive
    pub fn valid_till(&self) -> DateTime<Utc> {
        self.period.valid_till()
    }

    /// Returns the coverage period
    pub fn period(&self) -> &CoveragePeriod {
        &self.period
    }

    /// Returns the insured risks
    pub fn insured_risks(&self) -> &[Risk] {
        &self.insured_risks
    }

    /// Total price of the policy: the sum of the yearly prices of its risks
    ///
    /// Prices are given for a full year and are summed as-is, whatever the
    /// length of the policy period.
    pub fn premium(&self) -> Decimal {
        self.insured_risks.iter().map(|risk| risk.yearly_price).sum()
    }

    /// Returns true if the policy is active at the given instant
    pub fn covers(&self, effective_date: DateTime<Utc>) -> bool {
        self.period.contains(effective_date)
    }

    pub(crate) fn add_risk(&mut self, risk: Risk) {
        self.insured_risks.push(risk);
    }

    /// Removes the first risk equal to `risk`, returning it if present
    pub(crate) fn remove_risk(&mut self, risk: &Risk) -> Option<Risk> {
        let index = self.insured_risks.iter().position(|r| r == risk)?;
        Some(self.insured_risks.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn create_test_policy() -> Policy {
        let from = Utc.with_ymd_and_hms(2026, 10, 14, 0, 0, 0).unwrap();
        Policy::new(
            "Car",
            CoveragePeriod::months_from(from, 9).unwrap(),
            vec![Risk::new("Theft", dec!(100)), Risk::new("Fire", dec!(200))],
        )
    }

    #[test]
    fn test_premium_follows_risk_list() {
        let mut policy = create_test_policy();
        assert_eq!(policy.premium(), dec!(300));

        policy.add_risk(Risk::new("Hail", dec!(50.25)));
        assert_eq!(policy.premium(), dec!(350.25));
    }

    #[test]
    fn test_remove_takes_first_match_only() {
        let mut policy = create_test_policy();
        policy.add_risk(Risk::new("Theft", dec!(100)));

        let removed = policy.remove_risk(&Risk::new("Theft", dec!(100)));

        assert_eq!(removed, Some(Risk::new("Theft", dec!(100))));
        assert_eq!(
            policy.insured_risks(),
            &[Risk::new("Fire", dec!(200)), Risk::new("Theft", dec!(100))]
        );
    }

    #[test]
    fn test_remove_unknown_risk_is_noop() {
        let mut policy = create_test_policy();

        assert_eq!(policy.remove_risk(&Risk::new("Theft", dec!(99))), None);
        assert_eq!(policy.insured_risks().len(), 2);
    }

    #[test]
    fn test_deserializing_checks_period() {
        let policy = create_test_policy();
        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(serde_json::from_str::<Policy>(&json).unwrap(), policy);

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["period"]["valid_till"] = value["period"]["valid_from"].clone();
        assert!(serde_json::from_value::<Policy>(value).is_err());
    }

    #[test]
    fn test_empty_risk_list_has_zero_premium() {
        let mut policy = create_test_policy();
        policy.remove_risk(&Risk::new("Theft", dec!(100)));
        policy.remove_risk(&Risk::new("Fire", dec!(200)));

        assert!(policy.insured_risks().is_empty());
        assert_eq!(policy.premium(), Decimal::ZERO);
        assert!(policy.covers(policy.valid_till()));
    }
}
