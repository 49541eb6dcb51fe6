//! The insurance company engine
//!
//! `InsuranceCompany` owns the policy book: for each insured object, the
//! ordered list of policies sold for it. It sells policies against the risk
//! catalog, rejects sales whose period overlaps an existing policy of the
//! same object, answers "which policy is active at this instant" queries,
//! and adds or removes risks on the active policy.
//!
//! # Invariants
//!
//! - No two policies of one insured object have overlapping periods
//! - Policies are never removed from the book
//! - A failed operation leaves the book and the event log untouched
//!
//! # Example
//!
//! ```rust,ignore
//! let mut company = InsuranceCompany::new("Insurance Company 1")?;
//! company.available_risks().replace(vec![Risk::new("Theft", dec!(100))]);
//!
//! let policy = company.sell_policy("Car", Utc::now(), 9, &risks[..])?;
//! assert_eq!(policy.premium(), dec!(100));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use core_kernel::validation::{
    require_greater_than, require_non_blank, require_non_empty, require_not_after,
    require_present,
};
use core_kernel::{Clock, CoveragePeriod, SystemClock};

use crate::error::PolicyError;
use crate::events::PolicyEvent;
use crate::policy::Policy;
use crate::risk::{Risk, RiskCatalog};

/// An insurance company and its in-memory policy book
#[derive(Debug)]
pub struct InsuranceCompany<C: Clock = SystemClock> {
    /// Name of the company, set once
    name: String,
    /// Risks that can currently be sold
    available_risks: RiskCatalog,
    /// Policies per insured object, in the order they were sold
    policies_by_object: HashMap<String, Vec<Policy>>,
    /// Source of "now" and "today"
    clock: C,
    /// Domain events to be published
    events: Vec<PolicyEvent>,
}

impl InsuranceCompany<SystemClock> {
    /// Creates a company driven by the wall clock, with an empty catalog
    ///
    /// # Errors
    ///
    /// * `NullArgument` if `name` is `None`
    /// * `InvalidArgument` if `name` is empty or whitespace
    pub fn new<'a>(name: impl Into<Option<&'a str>>) -> Result<Self, PolicyError> {
        Self::with_clock(name, SystemClock::default())
    }
}

impl<C: Clock> InsuranceCompany<C> {
    /// Creates a company reading the current time from `clock`
    pub fn with_clock<'a>(name: impl Into<Option<&'a str>>, clock: C) -> Result<Self, PolicyError> {
        let name = require_non_blank(name.into(), "name")?;

        Ok(Self {
            name: name.to_string(),
            available_risks: RiskCatalog::empty(),
            policies_by_object: HashMap::new(),
            clock,
            events: Vec::new(),
        })
    }

    /// Returns the company name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the catalog handle
    ///
    /// The handle shares storage with the company: replacing its contents
    /// changes what subsequent sales can offer.
    pub fn available_risks(&self) -> &RiskCatalog {
        &self.available_risks
    }

    /// Swaps in another catalog handle
    pub fn set_available_risks(&mut self, catalog: impl Into<RiskCatalog>) {
        self.available_risks = catalog.into();
    }

    /// Returns the clock the company reads
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns every policy of an insured object, in the order sold
    pub fn policies(&self, insured_object_name: &str) -> &[Policy] {
        self.policies_by_object
            .get(insured_object_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the names of all insured objects in the book
    pub fn insured_objects(&self) -> impl Iterator<Item = &str> {
        self.policies_by_object.keys().map(String::as_str)
    }

    /// Returns the total number of policies in the book
    pub fn policy_count(&self) -> usize {
        self.policies_by_object.values().map(Vec::len).sum()
    }

    /// Returns accumulated domain events and clears them
    pub fn take_events(&mut self) -> Vec<PolicyEvent> {
        std::mem::take(&mut self.events)
    }

    /// Sells a policy
    ///
    /// Only the selected risks that the catalog offers (matched by name and
    /// yearly price) are insured. The policy runs for `valid_months`
    /// calendar months from `valid_from`.
    ///
    /// # Arguments
    ///
    /// * `insured_object_name` - Name of the insured object
    /// * `valid_from` - When the policy starts; can not be before today
    /// * `valid_months` - Policy period in months
    /// * `selected_risks` - Risks that must be included in the policy
    ///
    /// # Errors
    ///
    /// * `NullArgument` / `InvalidArgument` for a missing or blank name
    /// * `OutOfRange` if `valid_from` is before today or `valid_months <= 0`
    /// * `InvalidArgument` if no risk is selected or none is in the catalog
    /// * `PolicyExistsInPeriod` if an existing policy of the object overlaps
    #[instrument(level = "debug", skip_all, fields(company = %self.name))]
    pub fn sell_policy<'a>(
        &mut self,
        insured_object_name: impl Into<Option<&'a str>>,
        valid_from: DateTime<Utc>,
        valid_months: i16,
        selected_risks: impl Into<Option<&'a [Risk]>>,
    ) -> Result<Policy, PolicyError> {
        let insured_object_name =
            require_non_blank(insured_object_name.into(), "insured_object_name")?;
        require_not_after(self.clock.today_start(), valid_from, "valid_from")?;
        let valid_months = require_greater_than(valid_months, 0, "valid_months")?;
        let selected_risks = require_non_empty(selected_risks.into(), "selected_risks")?;

        let inserting_risks = self.available_risks.offered(selected_risks);
        if inserting_risks.is_empty() {
            return Err(PolicyError::InvalidArgument {
                field: "selected_risks",
                reason: "none of the selected risks is available".to_string(),
            });
        }

        let period =
            CoveragePeriod::months_from(valid_from, u32::from(valid_months.unsigned_abs()))?;

        if let Some(existing) = self
            .policies(insured_object_name)
            .iter()
            .find(|policy| policy.period().overlaps(&period))
        {
            warn!(
                insured_object = insured_object_name,
                requested = %period,
                existing = %existing.period(),
                "Policy period overlaps an existing policy"
            );
            return Err(PolicyError::PolicyExistsInPeriod {
                insured_object: insured_object_name.to_string(),
                valid_from: existing.valid_from(),
                valid_till: existing.valid_till(),
            });
        }

        let policy = Policy::new(insured_object_name, period, inserting_risks);

        info!(
            insured_object = insured_object_name,
            valid_from = %policy.valid_from(),
            valid_till = %policy.valid_till(),
            premium = %policy.premium(),
            "Policy sold"
        );

        self.events.push(PolicyEvent::PolicySold {
            insured_object: insured_object_name.to_string(),
            valid_from: policy.valid_from(),
            valid_till: policy.valid_till(),
            risks: policy.insured_risks().to_vec(),
            premium: policy.premium(),
            timestamp: self.clock.now(),
        });
        self.policies_by_object
            .entry(insured_object_name.to_string())
            .or_default()
            .push(policy.clone());

        Ok(policy)
    }

    /// Gets the policy of an insured object that is active at the given instant
    ///
    /// If several policies were ever active at that instant the first one
    /// sold wins; the overlap check makes that impossible for books built
    /// through `sell_policy`.
    ///
    /// # Errors
    ///
    /// * `NullArgument` / `InvalidArgument` for a missing or blank name
    /// * `PolicyNotFound` if the object has no policy, or none covers the date
    #[instrument(level = "debug", skip_all, fields(company = %self.name))]
    pub fn get_policy<'a>(
        &self,
        insured_object_name: impl Into<Option<&'a str>>,
        effective_date: DateTime<Utc>,
    ) -> Result<&Policy, PolicyError> {
        let insured_object_name =
            require_non_blank(insured_object_name.into(), "insured_object_name")?;

        let policies = self
            .policies_by_object
            .get(insured_object_name)
            .ok_or_else(|| PolicyError::not_found(insured_object_name))?;

        policies
            .iter()
            .find(|policy| policy.covers(effective_date))
            .ok_or_else(|| {
                warn!(
                    insured_object = insured_object_name,
                    effective_date = %effective_date,
                    "No policy active at effective date"
                );
                PolicyError::not_found_at(insured_object_name, effective_date)
            })
    }

    /// Adds a risk to the policy of an insured object active at `effective_date`
    ///
    /// The risk does not have to be in the catalog, and a risk already on the
    /// policy can be added again.
    ///
    /// # Arguments
    ///
    /// * `insured_object_name` - Name of insured object
    /// * `risk` - Risk that must be added
    /// * `valid_from` - When the risk becomes active; can not be before today
    /// * `effective_date` - Instant at which the policy must be active
    ///
    /// # Errors
    ///
    /// * Argument errors for the name, the risk, its price, or `valid_from`
    /// * `PolicyNotFound` if no policy of the object covers `effective_date`
    #[instrument(level = "debug", skip_all, fields(company = %self.name))]
    pub fn add_risk<'a>(
        &mut self,
        insured_object_name: impl Into<Option<&'a str>>,
        risk: impl Into<Option<&'a Risk>>,
        valid_from: DateTime<Utc>,
        effective_date: DateTime<Utc>,
    ) -> Result<(), PolicyError> {
        let insured_object_name =
            require_non_blank(insured_object_name.into(), "insured_object_name")?;
        let risk = require_present(risk.into(), "risk")?;
        risk.validate()?;
        require_not_after(self.clock.today_start(), valid_from, "valid_from")?;

        let now = self.clock.now();
        let policy = self
            .policies_by_object
            .get_mut(insured_object_name)
            .ok_or_else(|| PolicyError::not_found(insured_object_name))?
            .iter_mut()
            .find(|policy| {
                policy.insured_object_name() == insured_object_name && policy.covers(effective_date)
            })
            .ok_or_else(|| PolicyError::not_found_at(insured_object_name, effective_date))?;

        policy.add_risk(risk.clone());

        debug!(
            insured_object = insured_object_name,
            risk = %risk,
            premium = %policy.premium(),
            "Risk added"
        );

        self.events.push(PolicyEvent::RiskAdded {
            insured_object: insured_object_name.to_string(),
            policy_valid_from: policy.valid_from(),
            risk: risk.clone(),
            risk_valid_from: valid_from,
            premium: policy.premium(),
            timestamp: now,
        });

        Ok(())
    }

    /// Removes a risk from the policy of an insured object active at `effective_date`
    ///
    /// The first risk on the policy matching by name and yearly price is
    /// removed. If the policy does not carry the risk, nothing changes. The
    /// policy may be left with no risks at all.
    ///
    /// # Arguments
    ///
    /// * `insured_object_name` - Name of insured object
    /// * `risk` - Risk that must be removed
    /// * `valid_till` - When the risk becomes inactive; must be after now
    /// * `effective_date` - Instant at which the policy must be active
    ///
    /// # Errors
    ///
    /// * Argument errors for the name, the risk, its price, or `valid_till`
    /// * `PolicyNotFound` if no policy of the object covers `effective_date`
    #[instrument(level = "debug", skip_all, fields(company = %self.name))]
    pub fn remove_risk<'a>(
        &mut self,
        insured_object_name: impl Into<Option<&'a str>>,
        risk: impl Into<Option<&'a Risk>>,
        valid_till: DateTime<Utc>,
        effective_date: DateTime<Utc>,
    ) -> Result<(), PolicyError> {
        let insured_object_name =
            require_non_blank(insured_object_name.into(), "insured_object_name")?;
        let risk = require_present(risk.into(), "risk")?;
        risk.validate()?;

        let now = self.clock.now();
        require_greater_than(valid_till, now, "valid_till")?;

        let policy = self
            .policies_by_object
            .get_mut(insured_object_name)
            .ok_or_else(|| PolicyError::not_found(insured_object_name))?
            .iter_mut()
            .find(|policy| policy.covers(effective_date))
            .ok_or_else(|| PolicyError::not_found_at(insured_object_name, effective_date))?;

        let Some(removed) = policy.remove_risk(risk) else {
            debug!(
                insured_object = insured_object_name,
                risk = %risk,
                "Risk not on policy, nothing removed"
            );
            return Ok(());
        };

        debug!(
            insured_object = insured_object_name,
            risk = %removed,
            premium = %policy.premium(),
            "Risk removed"
        );

        self.events.push(PolicyEvent::RiskRemoved {
            insured_object: insured_object_name.to_string(),
            policy_valid_from: policy.valid_from(),
            risk: removed,
            risk_valid_till: valid_till,
            premium: policy.premium(),
            timestamp: now,
        });

        Ok(())
    }
}
