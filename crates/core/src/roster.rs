//! YAML roster wire model.
//!
//! A roster describes physicians, patients, and assignments in one document. An assigned
//! patient is written as a bare identification when it names a registered patient, or as
//! a full patient record when the physician holds a patient the registry does not (an
//! unregistered patient, or a copy that differs from the registered one):
//!
//! ```yaml
//! physicians:
//!   - { full_name: ..., identification: "1001", license: MED-001, ... }
//! patients:
//!   - { full_name: ..., identification: P2001, address: { ... }, ... }
//! assignments:
//!   - physician: "1001"
//!     patients:
//!       - P2001
//!       - { full_name: ..., identification: P9000, address: { ... }, ... }
//! ```
//!
//! The wire structs are strict (`deny_unknown_fields`) and private; callers work with
//! [`Roster`], which carries domain values.
//!
//! Loading a roster goes through the public registry operations, one entity at a time.
//! A failure part-way through leaves the earlier entities registered.

use crate::error::{RegistryError, RegistryResult};
use crate::Hospital;
use hospital_types::{Address, Patient, Person, PersonDetails, Physician};
use serde::{Deserialize, Serialize};

// ============================================================================
// Public domain-level types
// ============================================================================

/// One entry of a physician's assignment list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssignedPatient {
    /// Resolved against the hospital's patient collection on load.
    Registered(String),
    /// Assigned as written.
    Record(Patient),
}

/// Patients assigned to one physician, in list order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub physician: String,
    pub patients: Vec<AssignedPatient>,
}

/// Domain-level contents of a roster document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    pub physicians: Vec<Physician>,
    pub patients: Vec<Patient>,
    pub assignments: Vec<Assignment>,
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RosterWire {
    #[serde(default)]
    physicians: Vec<PhysicianWire>,
    #[serde(default)]
    patients: Vec<PatientWire>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    assignments: Vec<AssignmentWire>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhysicianWire {
    full_name: String,
    identification: String,
    gender: String,
    email: String,
    license: String,
    specialty: String,
    hire_year: i32,
    salary: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatientWire {
    full_name: String,
    identification: String,
    gender: String,
    email: String,
    phone: String,
    address: AddressWire,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct AddressWire {
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    postal_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct AssignmentWire {
    physician: String,
    patients: Vec<AssignedWire>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum AssignedWire {
    Identification(String),
    Record(PatientWire),
}

// ============================================================================
// Roster operations
// ============================================================================

impl Roster {
    /// Parse a roster from YAML text.
    ///
    /// Schema errors name the failing field path (for example `patients[0].address`).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidRoster`] if the YAML does not match the schema.
    pub fn parse(yaml_text: &str) -> RegistryResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, RosterWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(RegistryError::InvalidRoster(format!(
                    "schema mismatch at {path}: {source}"
                )));
            }
        };

        Ok(wire_to_domain(wire))
    }

    /// Render the roster as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidRoster`] if serialisation fails.
    pub fn render(&self) -> RegistryResult<String> {
        serde_yaml::to_string(&domain_to_wire(self))
            .map_err(|e| RegistryError::InvalidRoster(e.to_string()))
    }

    /// The roster shipped with the crate.
    pub fn demo() -> RegistryResult<Self> {
        Self::parse(crate::constants::DEMO_ROSTER_YAML)
    }

    /// Snapshot a hospital's physicians, patients, and assignment lists.
    ///
    /// Physicians are captured without their assignment lists; those are expressed as
    /// [`Assignment`]s so the roster can be loaded back through [`Roster::load_into`].
    /// An assigned entry equal to the registered patient is kept by identification; any
    /// other entry is kept as a full record.
    pub fn from_hospital(hospital: &Hospital) -> Self {
        let physicians = hospital
            .physicians()
            .iter()
            .map(|p| {
                Physician::new(
                    p.details().clone(),
                    p.license(),
                    p.specialty(),
                    p.hire_year(),
                    p.salary(),
                )
            })
            .collect();

        let assignments = hospital
            .physicians()
            .iter()
            .filter(|p| !p.assigned_patients().is_empty())
            .map(|p| Assignment {
                physician: p.identification().to_string(),
                patients: p
                    .assigned_patients()
                    .iter()
                    .map(|assigned| match hospital.get_patient(assigned.identification()) {
                        Some(registered) if registered == assigned => {
                            AssignedPatient::Registered(assigned.identification().to_string())
                        }
                        _ => AssignedPatient::Record(assigned.clone()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            physicians,
            patients: hospital.patients().to_vec(),
            assignments,
        }
    }

    /// Register every physician and patient, then apply assignments.
    ///
    /// [`AssignedPatient::Registered`] entries are resolved against the hospital's patient
    /// collection after the roster's own patients have been added.
    /// [`AssignedPatient::Record`] entries are assigned as they are.
    ///
    /// # Errors
    ///
    /// - any error from [`Hospital::add_physician`], [`Hospital::add_patient`], or
    ///   [`Hospital::assign_patient`]
    /// - [`RegistryError::InvalidRoster`] if a [`AssignedPatient::Registered`] entry names an
    ///   unknown patient
    pub fn load_into(&self, hospital: &mut Hospital) -> RegistryResult<()> {
        for physician in &self.physicians {
            hospital.add_physician(physician.clone())?;
        }
        for patient in &self.patients {
            hospital.add_patient(patient.clone())?;
        }

        for assignment in &self.assignments {
            for entry in &assignment.patients {
                let patient = match entry {
                    AssignedPatient::Registered(patient_id) => {
                        hospital.get_patient(patient_id).cloned().ok_or_else(|| {
                            RegistryError::InvalidRoster(format!(
                                "assignment for physician {} names unknown patient {}",
                                assignment.physician, patient_id
                            ))
                        })?
                    }
                    AssignedPatient::Record(record) => record.clone(),
                };
                hospital.assign_patient(&assignment.physician, patient)?;
            }
        }

        tracing::info!(
            "loaded roster: {} physicians, {} patients, {} assignment groups",
            self.physicians.len(),
            self.patients.len(),
            self.assignments.len()
        );

        Ok(())
    }
}

fn wire_to_domain(wire: RosterWire) -> Roster {
    let physicians = wire
        .physicians
        .into_iter()
        .map(|p| {
            Physician::new(
                PersonDetails::new(p.full_name, p.identification, p.gender, p.email),
                p.license,
                p.specialty,
                p.hire_year,
                p.salary,
            )
        })
        .collect();

    let patients = wire.patients.into_iter().map(patient_from_wire).collect();

    let assignments = wire
        .assignments
        .into_iter()
        .map(|a| Assignment {
            physician: a.physician,
            patients: a
                .patients
                .into_iter()
                .map(|entry| match entry {
                    AssignedWire::Identification(id) => AssignedPatient::Registered(id),
                    AssignedWire::Record(p) => AssignedPatient::Record(patient_from_wire(p)),
                })
                .collect(),
        })
        .collect();

    Roster {
        physicians,
        patients,
        assignments,
    }
}

fn domain_to_wire(roster: &Roster) -> RosterWire {
    RosterWire {
        physicians: roster
            .physicians
            .iter()
            .map(|p| PhysicianWire {
                full_name: p.full_name().to_string(),
                identification: p.identification().to_string(),
                gender: p.gender().to_string(),
                email: p.email().to_string(),
                license: p.license().to_string(),
                specialty: p.specialty().to_string(),
                hire_year: p.hire_year(),
                salary: p.salary(),
            })
            .collect(),
        patients: roster.patients.iter().map(patient_to_wire).collect(),
        assignments: roster
            .assignments
            .iter()
            .map(|a| AssignmentWire {
                physician: a.physician.clone(),
                patients: a
                    .patients
                    .iter()
                    .map(|entry| match entry {
                        AssignedPatient::Registered(id) => AssignedWire::Identification(id.clone()),
                        AssignedPatient::Record(p) => AssignedWire::Record(patient_to_wire(p)),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn patient_from_wire(p: PatientWire) -> Patient {
    let a = p.address;
    Patient::new(
        PersonDetails::new(p.full_name, p.identification, p.gender, p.email),
        p.phone,
        Address::new(a.street, a.number, a.neighborhood, a.city, a.postal_code),
    )
}

fn patient_to_wire(p: &Patient) -> PatientWire {
    let a = p.address();
    PatientWire {
        full_name: p.full_name().to_string(),
        identification: p.identification().to_string(),
        gender: p.gender().to_string(),
        email: p.email().to_string(),
        phone: p.phone().to_string(),
        address: AddressWire {
            street: a.street.clone(),
            number: a.number.clone(),
            neighborhood: a.neighborhood.clone(),
            city: a.city.clone(),
            postal_code: a.postal_code.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::{test_hospital, test_patient, test_physician};
    use std::collections::BTreeMap;

    #[test]
    fn test_demo_roster_parses() {
        let roster = Roster::demo().expect("demo roster should parse");
        assert_eq!(roster.physicians.len(), 10);
        assert_eq!(roster.patients.len(), 5);
        assert_eq!(roster.assignments.len(), 4);
        assert_eq!(roster.patients[0].address().city, "Bogotá");
    }

    #[test]
    fn test_demo_roster_specialty_counts() {
        let mut hospital = test_hospital();
        Roster::demo()
            .unwrap()
            .load_into(&mut hospital)
            .expect("demo roster should load");

        let expected: BTreeMap<String, usize> = [
            ("Medicina Interna", 3),
            ("Pediatría", 3),
            ("Cardiología", 2),
            ("Ortopedia", 2),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        assert_eq!(hospital.physician_count_by_specialty(), expected);
    }

    #[test]
    fn test_demo_roster_remove_down_to_guard() {
        let mut hospital = test_hospital();
        Roster::demo().unwrap().load_into(&mut hospital).unwrap();

        for id in ["1001", "1002", "1003", "1004", "1005", "1006", "1007", "1008"] {
            hospital.remove_physician(id).expect("removal should succeed");
        }
        assert_eq!(hospital.physician_count(), 2);

        hospital.remove_physician("1009").expect("down to one");
        let err = hospital
            .remove_physician("1010")
            .expect_err("last physician must stay");

        assert_eq!(err, RegistryError::LastPhysician("1010".into()));
        assert_eq!(hospital.physician_count(), 1);
        assert_eq!(hospital.physicians()[0].identification(), "1010");
    }

    #[test]
    fn test_load_into_applies_assignments_in_order() {
        let mut hospital = test_hospital();
        Roster::demo().unwrap().load_into(&mut hospital).unwrap();

        let ids: Vec<&str> = hospital
            .get_physician("1003")
            .unwrap()
            .assigned_patients()
            .iter()
            .map(|p| p.identification())
            .collect();
        assert_eq!(ids, vec!["P2001", "P2004"]);
    }

    #[test]
    fn test_load_into_rejects_unknown_assigned_patient() {
        let yaml = r#"
physicians:
  - full_name: A
    identification: "1"
    gender: F
    email: a@x.com
    license: L1
    specialty: Pediatría
    hire_year: 2000
    salary: 1.0
assignments:
  - physician: "1"
    patients: [P404]
"#;
        let roster = Roster::parse(yaml).expect("schema is valid");
        let mut hospital = test_hospital();

        let err = roster
            .load_into(&mut hospital)
            .expect_err("unknown patient should fail");

        assert!(matches!(err, RegistryError::InvalidRoster(msg) if msg.contains("P404")));
    }

    #[test]
    fn test_load_into_surfaces_duplicate_identification() {
        let yaml = r#"
physicians:
  - { full_name: A, identification: "1", gender: F, email: a, license: L1, specialty: X, hire_year: 2000, salary: 1.0 }
patients:
  - full_name: B
    identification: "1"
    gender: M
    email: b
    phone: "0"
    address: { street: s, number: n, neighborhood: b, city: c, postal_code: p }
"#;
        let roster = Roster::parse(yaml).unwrap();
        let mut hospital = test_hospital();

        let err = roster.load_into(&mut hospital).expect_err("duplicate id");
        assert_eq!(err, RegistryError::DuplicateIdentification("1".into()));
    }

    #[test]
    fn test_parse_reports_field_path_on_schema_mismatch() {
        let yaml = r#"
patients:
  - full_name: B
    identification: P1
    gender: M
    email: b
    phone: "0"
    address: { street: s, number: n, city: c, postal_code: p }
"#;
        let err = Roster::parse(yaml).expect_err("missing neighborhood");
        match err {
            RegistryError::InvalidRoster(msg) => {
                assert!(msg.contains("patients[0].address"), "message was {msg}");
                assert!(msg.contains("neighborhood"), "message was {msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let yaml = "physicians: []\nnurses: []\n";
        let err = Roster::parse(yaml).expect_err("unknown key");
        assert!(matches!(err, RegistryError::InvalidRoster(_)));
    }

    #[test]
    fn test_from_hospital_render_parse_reload_preserves_registry() {
        let mut hospital = test_hospital();
        Roster::demo().unwrap().load_into(&mut hospital).unwrap();

        let yaml = Roster::from_hospital(&hospital)
            .render()
            .expect("render should succeed");
        let mut reloaded = test_hospital();
        Roster::parse(&yaml)
            .expect("rendered roster should parse")
            .load_into(&mut reloaded)
            .expect("rendered roster should load");

        assert_eq!(reloaded.physicians(), hospital.physicians());
        assert_eq!(reloaded.patients(), hospital.patients());
    }

    #[test]
    fn test_round_trip_keeps_unregistered_and_diverged_assignments() {
        let mut hospital = test_hospital();
        hospital
            .add_physician(test_physician("M1", "L1", "Pediatría", 2015, 1000.0))
            .unwrap();
        hospital.add_patient(test_patient("P1", "Femenino")).unwrap();
        hospital
            .assign_patient("M1", test_patient("P1", "Femenino"))
            .unwrap();
        hospital
            .assign_patient("M1", test_patient("GHOST", "Masculino"))
            .unwrap();
        hospital
            .assign_patient("M1", test_patient("P1", "No binario"))
            .unwrap();

        let roster = Roster::from_hospital(&hospital);
        assert_eq!(
            roster.assignments[0].patients,
            vec![
                AssignedPatient::Registered("P1".into()),
                AssignedPatient::Record(test_patient("GHOST", "Masculino")),
                AssignedPatient::Record(test_patient("P1", "No binario")),
            ]
        );

        let yaml = roster.render().expect("render should succeed");
        let mut reloaded = test_hospital();
        Roster::parse(&yaml)
            .expect("rendered roster should parse")
            .load_into(&mut reloaded)
            .expect("unregistered assignment should load");

        assert_eq!(reloaded.physicians(), hospital.physicians());
        assert_eq!(reloaded.patients(), hospital.patients());
        assert!(reloaded.get_patient("GHOST").is_none());
    }

    #[test]
    fn test_parse_accepts_inline_assigned_record() {
        let yaml = r#"
physicians:
  - { full_name: A, identification: "1", gender: F, email: a, license: L1, specialty: X, hire_year: 2000, salary: 1.0 }
assignments:
  - physician: "1"
    patients:
      - full_name: B
        identification: P9
        gender: M
        email: b
        phone: "0"
        address: { street: s, number: n, neighborhood: b, city: c, postal_code: p }
"#;
        let roster = Roster::parse(yaml).expect("inline record is valid");
        let mut hospital = test_hospital();
        roster.load_into(&mut hospital).expect("should load");

        let assigned = hospital.get_physician("1").unwrap().assigned_patients();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].identification(), "P9");
        assert_eq!(assigned[0].address().city, "c");
        assert_eq!(hospital.patient_count(), 0);
    }
}
