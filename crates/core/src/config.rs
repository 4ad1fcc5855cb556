//! Hospital configuration.
//!
//! The hospital's identity (name, tax id, address) is resolved once at process startup and
//! passed into [`Hospital::from_config`](crate::Hospital::from_config). Resolution takes a
//! lookup function instead of reading the process environment directly, so tests can
//! supply values without mutating global state.

use crate::constants::{
    DEFAULT_CITY, DEFAULT_HOSPITAL_NAME, DEFAULT_HOSPITAL_TAX_ID, DEFAULT_NEIGHBORHOOD,
    DEFAULT_NUMBER, DEFAULT_POSTAL_CODE, DEFAULT_STREET, HOSPITAL_CITY_VAR, HOSPITAL_NAME_VAR,
    HOSPITAL_NEIGHBORHOOD_VAR, HOSPITAL_NUMBER_VAR, HOSPITAL_POSTAL_CODE_VAR,
    HOSPITAL_STREET_VAR, HOSPITAL_TAX_ID_VAR,
};
use crate::RegistryResult;
use hospital_types::{Address, NonEmptyText};

/// Hospital identity resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HospitalConfig {
    name: NonEmptyText,
    tax_id: NonEmptyText,
    address: Address,
}

impl HospitalConfig {
    /// Create a new `HospitalConfig`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Text` if `name` or `tax_id` is blank.
    pub fn new(name: &str, tax_id: &str, address: Address) -> RegistryResult<Self> {
        Ok(Self {
            name: NonEmptyText::new(name)?,
            tax_id: NonEmptyText::new(tax_id)?,
            address,
        })
    }

    /// Resolve configuration from a key lookup such as `|k| std::env::var(k).ok()`.
    ///
    /// Missing or blank values fall back to the defaults in [`crate::constants`].
    pub fn from_env_values<F>(lookup: F) -> RegistryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| value_or_default(lookup(key), default);

        let address = Address::new(
            value(HOSPITAL_STREET_VAR, DEFAULT_STREET),
            value(HOSPITAL_NUMBER_VAR, DEFAULT_NUMBER),
            value(HOSPITAL_NEIGHBORHOOD_VAR, DEFAULT_NEIGHBORHOOD),
            value(HOSPITAL_CITY_VAR, DEFAULT_CITY),
            value(HOSPITAL_POSTAL_CODE_VAR, DEFAULT_POSTAL_CODE),
        );

        Self::new(
            &value(HOSPITAL_NAME_VAR, DEFAULT_HOSPITAL_NAME),
            &value(HOSPITAL_TAX_ID_VAR, DEFAULT_HOSPITAL_TAX_ID),
            address,
        )
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn tax_id(&self) -> &NonEmptyText {
        &self.tax_id
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

fn value_or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
