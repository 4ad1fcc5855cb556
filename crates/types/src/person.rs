//! Person records.
//!
//! Patients and physicians share an identity shape ([`PersonDetails`]) that each record
//! embeds by value. The [`Person`] trait exposes that shape uniformly so callers can treat
//! either record as "someone with an identification".
//!
//! Identity fields are private. Once a record is handed to the registry it can only be
//! read through accessors, so the registry's uniqueness indexes cannot drift from the
//! records they describe.

use crate::Address;

/// Identity fields common to every person known to the hospital.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersonDetails {
    full_name: String,
    identification: String,
    gender: String,
    email: String,
}

impl PersonDetails {
    pub fn new(
        full_name: impl Into<String>,
        identification: impl Into<String>,
        gender: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            identification: identification.into(),
            gender: gender.into(),
            email: email.into(),
        }
    }
}

/// Read access to the shared person shape.
pub trait Person {
    /// The embedded identity fields.
    fn details(&self) -> &PersonDetails;

    fn full_name(&self) -> &str {
        &self.details().full_name
    }

    /// Registry-wide unique key, shared by patients and physicians.
    fn identification(&self) -> &str {
        &self.details().identification
    }

    fn gender(&self) -> &str {
        &self.details().gender
    }

    fn email(&self) -> &str {
        &self.details().email
    }
}

impl Person for PersonDetails {
    fn details(&self) -> &PersonDetails {
        self
    }
}

// ============================================================================
// PATIENT
// ============================================================================

/// A patient registered with the hospital.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    person: PersonDetails,
    phone: String,
    address: Address,
}

impl Patient {
    pub fn new(person: PersonDetails, phone: impl Into<String>, address: Address) -> Self {
        Self {
            person,
            phone: phone.into(),
            address,
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl Person for Patient {
    fn details(&self) -> &PersonDetails {
        &self.person
    }
}

// ============================================================================
// PHYSICIAN
// ============================================================================

/// A physician on the hospital staff.
///
/// Each physician owns an ordered list of assigned patients. The list holds copies of
/// the patient records; the registry keeps those copies in step with its own patient
/// collection when a patient is updated or removed. Order is insertion order and is
/// preserved by every registry cascade.
#[derive(Clone, Debug, PartialEq)]
pub struct Physician {
    person: PersonDetails,
    license: String,
    specialty: String,
    hire_year: i32,
    salary: f64,
    assigned_patients: Vec<Patient>,
}

impl Physician {
    /// Creates a physician with no assigned patients.
    pub fn new(
        person: PersonDetails,
        license: impl Into<String>,
        specialty: impl Into<String>,
        hire_year: i32,
        salary: f64,
    ) -> Self {
        Self {
            person,
            license: license.into(),
            specialty: specialty.into(),
            hire_year,
            salary,
            assigned_patients: Vec::new(),
        }
    }

    /// Professional license number, unique across physicians.
    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn hire_year(&self) -> i32 {
        self.hire_year
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn assigned_patients(&self) -> &[Patient] {
        &self.assigned_patients
    }

    /// Appends a patient to the end of the assignment list.
    ///
    /// No existence or duplicate checks are made here.
    pub fn assign_patient(&mut self, patient: Patient) {
        self.assigned_patients.push(patient);
    }

    /// Drops every assigned entry whose identification matches `identification`.
    ///
    /// Returns the number of entries removed.
    pub fn unassign_patient(&mut self, identification: &str) -> usize {
        let before = self.assigned_patients.len();
        self.assigned_patients.retain(|p| p.identification() != identification);
        before - self.assigned_patients.len()
    }

    /// Overwrites, in place, every assigned entry whose identification matches
    /// `identification` with a copy of `replacement`.
    ///
    /// Returns the number of entries replaced.
    pub fn replace_assigned_patient(
        &mut self,
        identification: &str,
        replacement: &Patient,
    ) -> usize {
        let mut replaced = 0;
        for slot in self
            .assigned_patients
            .iter_mut()
            .filter(|p| p.identification() == identification)
        {
            *slot = replacement.clone();
            replaced += 1;
        }
        replaced
    }
}

impl Person for Physician {
    fn details(&self) -> &PersonDetails {
        &self.person
    }
}
