//! # Hospital Types
//!
//! Plain domain values shared by the registry and its callers:
//! - [`Address`] street locations
//! - the person shape ([`PersonDetails`] and the [`Person`] accessor trait)
//! - [`Patient`] and [`Physician`] records
//! - [`NonEmptyText`] for configuration values that must not be blank
//!
//! These types hold no registry logic. Uniqueness and assignment consistency are
//! enforced by `hospital-core`.

mod address;
mod person;
mod text;

pub use address::Address;
pub use person::{Patient, Person, PersonDetails, Physician};
pub use text::{NonEmptyText, TextError};
