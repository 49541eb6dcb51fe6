//! Risks and the risk catalog
//!
//! A `Risk` is an insurable peril with an annual price. The `RiskCatalog`
//! is the list of risks the company is currently willing to sell; it is a
//! shared handle so the owner of the catalog can replace it at any time
//! while the company reads it at call time.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::validation::{require_greater_than, require_non_blank};
use crate::error::PolicyError;

/// An insurable peril with a yearly price
///
/// Two risks are the same risk when both their name and their yearly price
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Risk {
    /// Name of the risk, unique together with the price
    pub name: String,
    /// Price for one full year of cover
    pub yearly_price: Decimal,
}

impl Risk {
    /// Creates a risk without checking it
    ///
    /// Engine operations validate the risks they receive, so a malformed
    /// value is rejected where it is used.
    pub fn new(name: impl Into<String>, yearly_price: Decimal) -> Self {
        Self {
            name: name.into(),
            yearly_price,
        }
    }

    /// Creates a risk, requiring a non-blank name and a positive price
    pub fn validated(name: impl Into<String>, yearly_price: Decimal) -> Result<Self, PolicyError> {
        let risk = Self::new(name, yearly_price);
        risk.validate()?;
        Ok(risk)
    }

    /// Checks the name is non-blank and the price is positive
    pub fn validate(&self) -> Result<(), PolicyError> {
        require_non_blank(Some(self.name.as_str()), "risk.name")?;
        require_greater_than(self.yearly_price, Decimal::ZERO, "risk.yearly_price")?;
        Ok(())
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.yearly_price)
    }
}

/// Shared, externally replaceable list of sellable risks
///
/// Clones share the same storage: replacing the risks through one handle is
/// visible through every other.
#[derive(Debug, Clone, Default)]
pub struct RiskCatalog {
    risks: Arc<RwLock<Vec<Risk>>>,
}

impl RiskCatalog {
    pub fn new(risks: Vec<Risk>) -> Self {
        Self {
            risks: Arc::new(RwLock::new(risks)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Replaces the whole catalog
    pub fn replace(&self, risks: Vec<Risk>) {
        *self.write() = risks;
    }

    /// Appends a risk to the catalog
    pub fn push(&self, risk: Risk) {
        self.write().push(risk);
    }

    /// Returns a copy of the current risks
    pub fn snapshot(&self) -> Vec<Risk> {
        self.read().clone()
    }

    /// Returns true if the catalog offers this exact risk
    pub fn contains(&self, risk: &Risk) -> bool {
        self.read().contains(risk)
    }

    /// Keeps the offered risks out of `selected`, in selection order
    ///
    /// Duplicates in the selection are preserved; each kept risk is a copy.
    pub fn offered(&self, selected: &[Risk]) -> Vec<Risk> {
        let available = self.read();
        selected
            .iter()
            .filter(|risk| available.contains(risk))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns true if both handles point at the same storage
    pub fn shares_storage_with(&self, other: &RiskCatalog) -> bool {
        Arc::ptr_eq(&self.risks, &other.risks)
    }

    // The list holds no cross-entry invariant, so a writer that panicked
    // cannot leave it inconsistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Risk>> {
        self.risks.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Risk>> {
        self.risks.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Vec<Risk>> for RiskCatalog {
    fn from(risks: Vec<Risk>) -> Self {
        Self::new(risks)
    }
}
