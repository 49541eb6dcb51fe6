//! Policy book configuration
//!
//! The company name, the timezone used to decide where "today" starts, and
//! the initial risk catalog can be supplied from a file, from inline TOML,
//! or from `POLICY_BOOK_*` environment variables.
//!
//! # Environment Variables
//!
//! * `POLICY_BOOK_COMPANY_NAME` - Name of the company (required)
//! * `POLICY_BOOK_TIMEZONE` - IANA timezone name (default: UTC)
//!
//! # Example
//!
//! ```toml
//! company_name = "Insurance Company 1"
//! timezone = "Europe/Riga"
//!
//! [[risks]]
//! name = "Theft"
//! yearly_price = "100"
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::{SystemClock, Timezone};
use crate::company::InsuranceCompany;
use crate::error::PolicyError;
use crate::risk::{Risk, RiskCatalog};

const ENV_PREFIX: &str = "POLICY_BOOK";

/// A catalog entry as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RiskConfig {
    pub name: String,
    pub yearly_price: Decimal,
}

/// Policy book configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookConfig {
    /// Name of the insurance company
    pub company_name: String,
    /// IANA timezone in which calendar days are reckoned
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Initial risk catalog
    #[serde(default)]
    pub risks: Vec<RiskConfig>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl BookConfig {
    /// Loads configuration from environment
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, PolicyError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Loads configuration from a file, with environment overrides on top
    ///
    /// The format is picked from the file extension (TOML, JSON, YAML, ...).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Parses configuration from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, PolicyError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Parses the configured timezone
    pub fn timezone(&self) -> Result<Timezone, PolicyError> {
        self.timezone
            .parse()
            .map_err(|e: core_kernel::TemporalError| PolicyError::configuration(e.to_string()))
    }

    /// Validates the configured catalog and returns it as risks
    pub fn catalog(&self) -> Result<Vec<Risk>, PolicyError> {
        self.risks
            .iter()
            .map(|entry| Risk::validated(entry.name.clone(), entry.yearly_price))
            .collect()
    }

    /// Builds a company driven by the wall clock in the configured timezone
    pub fn build_company(&self) -> Result<InsuranceCompany<SystemClock>, PolicyError> {
        let clock = SystemClock::new(self.timezone()?);
        let mut company = InsuranceCompany::with_clock(self.company_name.as_str(), clock)?;
        company.set_available_risks(RiskCatalog::new(self.catalog()?));
        Ok(company)
    }
}
