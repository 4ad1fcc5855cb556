//! # Hospital Core
//!
//! In-memory hospital registry:
//! - physician and patient registration with registry-wide uniqueness of identifications
//!   and physician licenses
//! - cascading maintenance of physicians' assignment lists when patients change
//! - aggregate salary, specialty, and gender statistics
//! - YAML rosters for seeding a registry
//!
//! **No I/O**: everything lives in process memory for the lifetime of a [`Hospital`].
//! Rendering and demo flows belong in `hospital-cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod registry;
pub mod report;
pub mod roster;
mod stats;

pub use config::HospitalConfig;
pub use error::{EntityKind, RegistryError, RegistryResult};
pub use registry::Hospital;
pub use report::{HospitalSummary, OldestPhysician, RegistryReport};
pub use roster::{AssignedPatient, Assignment, Roster};

// Re-export the domain types so callers need only one dependency.
pub use hospital_types::{
    Address, NonEmptyText, Patient, Person, PersonDetails, Physician, TextError,
};
