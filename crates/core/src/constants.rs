//! Constants used throughout the hospital core crate.
//!
//! Configuration variable names and the defaults applied when a value is not supplied.

pub const HOSPITAL_NAME_VAR: &str = "HOSPITAL_NAME";
pub const HOSPITAL_TAX_ID_VAR: &str = "HOSPITAL_TAX_ID";
pub const HOSPITAL_STREET_VAR: &str = "HOSPITAL_STREET";
pub const HOSPITAL_NUMBER_VAR: &str = "HOSPITAL_NUMBER";
pub const HOSPITAL_NEIGHBORHOOD_VAR: &str = "HOSPITAL_NEIGHBORHOOD";
pub const HOSPITAL_CITY_VAR: &str = "HOSPITAL_CITY";
pub const HOSPITAL_POSTAL_CODE_VAR: &str = "HOSPITAL_POSTAL_CODE";

/// Hospital name used when `HOSPITAL_NAME` is unset.
pub const DEFAULT_HOSPITAL_NAME: &str = "Hospital Universitario San Rafael";

/// Tax identifier used when `HOSPITAL_TAX_ID` is unset.
pub const DEFAULT_HOSPITAL_TAX_ID: &str = "900123456-7";

pub const DEFAULT_STREET: &str = "Calle 45";
pub const DEFAULT_NUMBER: &str = "23-10";
pub const DEFAULT_NEIGHBORHOOD: &str = "Centro";
pub const DEFAULT_CITY: &str = "Bogotá";
pub const DEFAULT_POSTAL_CODE: &str = "110111";

/// Percentage scale used by the gender distribution query.
pub const PERCENT: f64 = 100.0;

/// Roster bundled with the crate, used by the CLI demo and tests.
pub const DEMO_ROSTER_YAML: &str = include_str!("../fixtures/demo_roster.yaml");
