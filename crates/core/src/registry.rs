//! The hospital registry.
//!
//! [`Hospital`] owns every physician and patient and keeps two uniqueness indexes beside
//! the collections:
//!
//! - `identifications`: one namespace shared by patients and physicians
//! - `licenses`: physicians only
//!
//! Every mutating operation validates against the indexes first and only then touches the
//! collections, so a rejected call leaves the registry exactly as it was.
//!
//! ## Assignment consistency
//!
//! Physicians carry copies of their assigned patients. Updating or removing a patient
//! cascades into every physician's list (replace in place, or drop). Removing a physician
//! does not cascade anywhere; its list is dropped with it. Assignment itself performs no
//! existence check on the patient.

use crate::config::HospitalConfig;
use crate::error::{RegistryError, RegistryResult};
use hospital_types::{Address, Patient, Person, Physician};
use std::collections::HashSet;

/// Aggregate root owning physicians, patients, and their uniqueness indexes.
#[derive(Clone, Debug)]
pub struct Hospital {
    name: String,
    tax_id: String,
    address: Address,
    physicians: Vec<Physician>,
    patients: Vec<Patient>,
    identifications: HashSet<String>,
    licenses: HashSet<String>,
}

impl Hospital {
    /// Creates an empty registry.
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            address,
            physicians: Vec::new(),
            patients: Vec::new(),
            identifications: HashSet::new(),
            licenses: HashSet::new(),
        }
    }

    /// Creates an empty registry from startup configuration.
    pub fn from_config(cfg: &HospitalConfig) -> Self {
        Self::new(
            cfg.name().as_str(),
            cfg.tax_id().as_str(),
            cfg.address().clone(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Physicians in insertion order.
    pub fn physicians(&self) -> &[Physician] {
        &self.physicians
    }

    /// Patients in insertion order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn physician_count(&self) -> usize {
        self.physicians.len()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    fn physician_position(&self, identification: &str) -> Option<usize> {
        self.physicians
            .iter()
            .position(|p| p.identification() == identification)
    }

    fn patient_position(&self, identification: &str) -> Option<usize> {
        self.patients
            .iter()
            .position(|p| p.identification() == identification)
    }

    // ========================================================================
    // PHYSICIANS
    // ========================================================================

    /// Registers a physician.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateLicense`] if the license is already registered
    /// - [`RegistryError::DuplicateIdentification`] if any patient or physician already
    ///   uses the identification
    pub fn add_physician(&mut self, physician: Physician) -> RegistryResult<()> {
        if self.licenses.contains(physician.license()) {
            tracing::warn!("rejected physician: license {} in use", physician.license());
            return Err(RegistryError::DuplicateLicense(
                physician.license().to_string(),
            ));
        }
        if self.identifications.contains(physician.identification()) {
            tracing::warn!(
                "rejected physician: identification {} in use",
                physician.identification()
            );
            return Err(RegistryError::DuplicateIdentification(
                physician.identification().to_string(),
            ));
        }

        self.licenses.insert(physician.license().to_string());
        self.identifications
            .insert(physician.identification().to_string());
        tracing::debug!("added physician {}", physician.identification());
        self.physicians.push(physician);

        Ok(())
    }

    /// Removes a physician and frees its identification and license.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if no physician has this identification
    /// - [`RegistryError::LastPhysician`] if it is the only physician left
    pub fn remove_physician(&mut self, identification: &str) -> RegistryResult<()> {
        let pos = self
            .physician_position(identification)
            .ok_or_else(|| RegistryError::physician_not_found(identification))?;

        if self.physicians.len() == 1 {
            tracing::warn!("refused to remove last physician {}", identification);
            return Err(RegistryError::LastPhysician(identification.to_string()));
        }

        let removed = self.physicians.remove(pos);
        assert!(
            self.identifications.remove(removed.identification()),
            "physician {} missing from identification index",
            removed.identification()
        );
        assert!(
            self.licenses.remove(removed.license()),
            "license {} missing from license index",
            removed.license()
        );
        tracing::debug!(
            "removed physician {} ({} assigned patients dropped)",
            identification,
            removed.assigned_patients().len()
        );

        Ok(())
    }

    pub fn get_physician(&self, identification: &str) -> Option<&Physician> {
        self.physicians
            .iter()
            .find(|p| p.identification() == identification)
    }

    /// Replaces the physician registered under `old_identification`, keeping its position.
    ///
    /// A changed license or identification must not collide with another entry. Only the
    /// indexes whose key actually changed are updated.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if `old_identification` is not a physician
    /// - [`RegistryError::DuplicateLicense`] / [`RegistryError::DuplicateIdentification`]
    ///   on collision with another entry
    pub fn update_physician(
        &mut self,
        old_identification: &str,
        physician: Physician,
    ) -> RegistryResult<()> {
        let pos = self
            .physician_position(old_identification)
            .ok_or_else(|| RegistryError::physician_not_found(old_identification))?;

        let old_license = self.physicians[pos].license().to_string();
        let license_changed = old_license != physician.license();
        let identification_changed = old_identification != physician.identification();

        if license_changed && self.licenses.contains(physician.license()) {
            tracing::warn!(
                "rejected physician update: license {} in use",
                physician.license()
            );
            return Err(RegistryError::DuplicateLicense(
                physician.license().to_string(),
            ));
        }
        if identification_changed && self.identifications.contains(physician.identification()) {
            tracing::warn!(
                "rejected physician update: identification {} in use",
                physician.identification()
            );
            return Err(RegistryError::DuplicateIdentification(
                physician.identification().to_string(),
            ));
        }

        if license_changed {
            assert!(
                self.licenses.remove(&old_license),
                "license {} missing from license index",
                old_license
            );
            self.licenses.insert(physician.license().to_string());
        }
        if identification_changed {
            self.reindex_identification(old_identification, physician.identification());
        }

        tracing::debug!(
            "updated physician {} -> {}",
            old_identification,
            physician.identification()
        );
        self.physicians[pos] = physician;

        Ok(())
    }

    /// Appends `patient` to the assignment list of a registered physician.
    ///
    /// The patient is not required to be registered.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if no physician has `physician_identification`.
    pub fn assign_patient(
        &mut self,
        physician_identification: &str,
        patient: Patient,
    ) -> RegistryResult<()> {
        let pos = self
            .physician_position(physician_identification)
            .ok_or_else(|| RegistryError::physician_not_found(physician_identification))?;

        tracing::debug!(
            "assigned patient {} to physician {}",
            patient.identification(),
            physician_identification
        );
        self.physicians[pos].assign_patient(patient);

        Ok(())
    }

    // ========================================================================
    // PATIENTS
    // ========================================================================

    /// Registers a patient.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateIdentification`] if any patient or physician already uses
    /// the identification.
    pub fn add_patient(&mut self, patient: Patient) -> RegistryResult<()> {
        if self.identifications.contains(patient.identification()) {
            tracing::warn!(
                "rejected patient: identification {} in use",
                patient.identification()
            );
            return Err(RegistryError::DuplicateIdentification(
                patient.identification().to_string(),
            ));
        }

        self.identifications
            .insert(patient.identification().to_string());
        tracing::debug!("added patient {}", patient.identification());
        self.patients.push(patient);

        Ok(())
    }

    /// Removes a patient and drops it from every physician's assignment list.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if no patient has this identification.
    pub fn remove_patient(&mut self, identification: &str) -> RegistryResult<()> {
        let pos = self
            .patient_position(identification)
            .ok_or_else(|| RegistryError::patient_not_found(identification))?;

        self.patients.remove(pos);
        assert!(
            self.identifications.remove(identification),
            "patient {} missing from identification index",
            identification
        );

        let unassigned: usize = self
            .physicians
            .iter_mut()
            .map(|physician| physician.unassign_patient(identification))
            .sum();
        tracing::debug!(
            "removed patient {} ({} assignment entries cleared)",
            identification,
            unassigned
        );

        Ok(())
    }

    pub fn get_patient(&self, identification: &str) -> Option<&Patient> {
        self.patients
            .iter()
            .find(|p| p.identification() == identification)
    }

    /// Replaces the patient registered under `old_identification`, keeping its position,
    /// and rewrites every assignment entry for that patient in place.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if `old_identification` is not a patient
    /// - [`RegistryError::DuplicateIdentification`] if a changed identification collides
    ///   with another entry
    pub fn update_patient(
        &mut self,
        old_identification: &str,
        patient: Patient,
    ) -> RegistryResult<()> {
        let pos = self
            .patient_position(old_identification)
            .ok_or_else(|| RegistryError::patient_not_found(old_identification))?;

        let identification_changed = old_identification != patient.identification();
        if identification_changed && self.identifications.contains(patient.identification()) {
            tracing::warn!(
                "rejected patient update: identification {} in use",
                patient.identification()
            );
            return Err(RegistryError::DuplicateIdentification(
                patient.identification().to_string(),
            ));
        }

        if identification_changed {
            self.reindex_identification(old_identification, patient.identification());
        }

        let replaced: usize = self
            .physicians
            .iter_mut()
            .map(|physician| physician.replace_assigned_patient(old_identification, &patient))
            .sum();
        tracing::debug!(
            "updated patient {} -> {} ({} assignment entries rewritten)",
            old_identification,
            patient.identification(),
            replaced
        );
        self.patients[pos] = patient;

        Ok(())
    }

    fn reindex_identification(&mut self, old: &str, new: &str) {
        assert!(
            self.identifications.remove(old),
            "identification {} missing from identification index",
            old
        );
        self.identifications.insert(new.to_string());
    }
}
