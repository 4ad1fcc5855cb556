//! Registry report.
//!
//! [`RegistryReport`] gathers every aggregate query into one serialisable snapshot. The
//! CLI renders it as text (via `Display`), JSON, or YAML.

use crate::Hospital;
use chrono::{DateTime, Datelike, Utc};
use hospital_types::{Address, Person, Physician};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HospitalSummary {
    pub name: String,
    pub tax_id: String,
    pub address: Address,
}

/// The physician with the earliest hire year, with seniority at report time.
///
/// A hire year later than the report date counts as zero years of service.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OldestPhysician {
    pub full_name: String,
    pub identification: String,
    pub specialty: String,
    pub hire_year: i32,
    pub years_of_service: i32,
}

impl OldestPhysician {
    fn new(physician: &Physician, now: DateTime<Utc>) -> Self {
        Self {
            full_name: physician.full_name().to_string(),
            identification: physician.identification().to_string(),
            specialty: physician.specialty().to_string(),
            hire_year: physician.hire_year(),
            years_of_service: (now.year() - physician.hire_year()).max(0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegistryReport {
    pub hospital: HospitalSummary,
    pub generated_at: DateTime<Utc>,
    pub physician_count: usize,
    pub patient_count: usize,
    pub total_salaries: f64,
    pub total_salaries_by_specialty: BTreeMap<String, f64>,
    pub physician_count_by_specialty: BTreeMap<String, usize>,
    pub patient_gender_percentage: BTreeMap<String, f64>,
    pub oldest_physician: Option<OldestPhysician>,
}

impl Hospital {
    /// Snapshot every aggregate query as of now.
    pub fn report(&self) -> RegistryReport {
        self.report_at(Utc::now())
    }

    /// Snapshot every aggregate query, stamping the report with `now`.
    pub fn report_at(&self, now: DateTime<Utc>) -> RegistryReport {
        RegistryReport {
            hospital: HospitalSummary {
                name: self.name().to_string(),
                tax_id: self.tax_id().to_string(),
                address: self.address().clone(),
            },
            generated_at: now,
            physician_count: self.physician_count(),
            patient_count: self.patient_count(),
            total_salaries: self.total_salaries(),
            total_salaries_by_specialty: self.total_salaries_by_specialty(),
            physician_count_by_specialty: self.physician_count_by_specialty(),
            patient_gender_percentage: self.patient_gender_percentage(),
            oldest_physician: self
                .oldest_physician()
                .map(|p| OldestPhysician::new(p, now)),
        }
    }
}

impl fmt::Display for RegistryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (NIT {})", self.hospital.name, self.hospital.tax_id)?;
        writeln!(f, "{}", self.hospital.address)?;
        writeln!(
            f,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(
            f,
            "Physicians: {}  Patients: {}",
            self.physician_count, self.patient_count
        )?;

        writeln!(f)?;
        writeln!(f, "Total salaries: {:.2}", self.total_salaries)?;
        for (specialty, total) in &self.total_salaries_by_specialty {
            writeln!(f, "  {specialty}: {total:.2}")?;
        }

        writeln!(f)?;
        writeln!(f, "Physicians by specialty:")?;
        for (specialty, count) in &self.physician_count_by_specialty {
            writeln!(f, "  {specialty}: {count}")?;
        }

        writeln!(f)?;
        writeln!(f, "Patients by gender:")?;
        if self.patient_gender_percentage.is_empty() {
            writeln!(f, "  (no patients)")?;
        }
        for (gender, pct) in &self.patient_gender_percentage {
            writeln!(f, "  {gender}: {pct:.2}%")?;
        }

        writeln!(f)?;
        match &self.oldest_physician {
            Some(p) => write!(
                f,
                "Longest-serving physician: {} ({}, {}), hired {} ({} years)",
                p.full_name, p.identification, p.specialty, p.hire_year, p.years_of_service
            ),
            None => write!(f, "Longest-serving physician: none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::{test_hospital, test_patient, test_physician};
    use crate::Roster;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_report_on_demo_roster() {
        let mut hospital = test_hospital();
        Roster::demo().unwrap().load_into(&mut hospital).unwrap();

        let report = hospital.report_at(fixed_now());

        assert_eq!(report.physician_count, 10);
        assert_eq!(report.patient_count, 5);
        assert_eq!(report.total_salaries, 117_800_000.0);
        assert_eq!(report.total_salaries_by_specialty["Cardiología"], 29_500_000.0);
        assert_eq!(report.physician_count_by_specialty["Pediatría"], 3);
        assert_eq!(report.patient_gender_percentage["Femenino"], 60.0);
        assert_eq!(report.patient_gender_percentage["Masculino"], 40.0);

        let oldest = report.oldest_physician.expect("registry has physicians");
        assert_eq!(oldest.identification, "1003");
        assert_eq!(oldest.hire_year, 1998);
        assert_eq!(oldest.years_of_service, 27);
    }

    #[test]
    fn test_report_on_empty_registry() {
        let report = test_hospital().report_at(fixed_now());

        assert_eq!(report.physician_count, 0);
        assert!(report.oldest_physician.is_none());
        assert!(report.patient_gender_percentage.is_empty());

        let text = report.to_string();
        assert!(text.contains("(no patients)"));
        assert!(text.ends_with("Longest-serving physician: none"));
    }

    #[test]
    fn test_report_text_lists_groups() {
        let mut hospital = test_hospital();
        hospital
            .add_physician(test_physician("M1", "L1", "Ortopedia", 2001, 1234.5))
            .unwrap();
        hospital.add_patient(test_patient("P1", "Femenino")).unwrap();

        let text = hospital.report_at(fixed_now()).to_string();

        assert!(text.starts_with("Hospital Central (NIT 900123456-7)"));
        assert!(text.contains("Total salaries: 1234.50"));
        assert!(text.contains("  Ortopedia: 1"));
        assert!(text.contains("  Femenino: 100.00%"));
        assert!(text.contains("hired 2001 (24 years)"));
    }

    #[test]
    fn test_years_of_service_never_negative() {
        let mut hospital = test_hospital();
        hospital
            .add_physician(test_physician("M1", "L1", "Ortopedia", 2030, 10.0))
            .unwrap();

        let oldest = hospital
            .report_at(fixed_now())
            .oldest_physician
            .expect("registry has physicians");

        assert_eq!(oldest.hire_year, 2030);
        assert_eq!(oldest.years_of_service, 0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut hospital = test_hospital();
        hospital
            .add_physician(test_physician("M1", "L1", "Ortopedia", 2001, 10.0))
            .unwrap();

        let value = serde_json::to_value(hospital.report_at(fixed_now()))
            .expect("report should serialize");

        assert_eq!(value["hospital"]["name"], "Hospital Central");
        assert_eq!(value["physician_count_by_specialty"]["Ortopedia"], 1);
        assert_eq!(value["oldest_physician"]["identification"], "M1");
        assert_eq!(value["generated_at"], "2025-03-01T12:00:00Z");
    }
}
