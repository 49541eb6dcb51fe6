//! Test Data Builders
//!
//! Provides a builder for constructing companies with sensible defaults.
//! Tests specify only the catalog, clock, or pre-sold policies they care
//! about.

use chrono::{DateTime, Utc};
use core_kernel::FixedClock;
use domain_policy::{InsuranceCompany, Risk};

use crate::fixtures::{RiskFixtures, StringFixtures, TemporalFixtures};

struct PlannedSale {
    insured_object: String,
    valid_from: DateTime<Utc>,
    valid_months: i16,
    risks: Vec<Risk>,
}

/// Builder for constructing a test company
pub struct TestCompanyBuilder {
    name: String,
    catalog: Vec<Risk>,
    clock: FixedClock,
    sales: Vec<PlannedSale>,
}

impl Default for TestCompanyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCompanyBuilder {
    /// Creates a new builder with the standard catalog and fixed clock
    pub fn new() -> Self {
        Self {
            name: StringFixtures::company_name().to_string(),
            catalog: RiskFixtures::standard(),
            clock: TemporalFixtures::clock(),
            sales: Vec::new(),
        }
    }

    /// Sets the company name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the risk catalog
    pub fn catalog(mut self, risks: Vec<Risk>) -> Self {
        self.catalog = risks;
        self
    }

    /// Sets the clock
    pub fn clock(mut self, clock: FixedClock) -> Self {
        self.clock = clock;
        self
    }

    /// Sells a policy as part of building
    pub fn with_policy(
        mut self,
        insured_object: impl Into<String>,
        valid_from: DateTime<Utc>,
        valid_months: i16,
        risks: Vec<Risk>,
    ) -> Self {
        self.sales.push(PlannedSale {
            insured_object: insured_object.into(),
            valid_from,
            valid_months,
            risks,
        });
        self
    }

    /// Builds the company
    ///
    /// Events from the pre-sold policies are drained so the returned
    /// company starts with an empty event log.
    ///
    /// # Panics
    ///
    /// Panics if any planned sale is rejected
    pub fn build(self) -> InsuranceCompany<FixedClock> {
        let mut company = InsuranceCompany::with_clock(self.name.as_str(), self.clock)
            .expect("test company name must be valid");
        company.set_available_risks(self.catalog);

        for sale in &self.sales {
            company
                .sell_policy(
                    sale.insured_object.as_str(),
                    sale.valid_from,
                    sale.valid_months,
                    sale.risks.as_slice(),
                )
                .expect("planned sale must be accepted");
        }

        company.take_events();
        company
    }
}
