//! Aggregate queries over the registry.
//!
//! Every query is a read-only fold over the current collections. Grouping keys are the
//! raw field values; `"Pediatría"` and `"pediatría"` are different groups. Maps are
//! ordered by key so output is reproducible.

use crate::constants::PERCENT;
use crate::Hospital;
use hospital_types::{Person, Physician};
use std::collections::BTreeMap;

impl Hospital {
    /// Sum of every physician's salary.
    pub fn total_salaries(&self) -> f64 {
        self.physicians().iter().map(Physician::salary).sum()
    }

    /// Salary totals grouped by specialty.
    pub fn total_salaries_by_specialty(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for physician in self.physicians() {
            *totals
                .entry(physician.specialty().to_string())
                .or_insert(0.0) += physician.salary();
        }
        totals
    }

    /// Share of patients per gender, as percentages of the patient population.
    ///
    /// Empty when there are no patients.
    pub fn patient_gender_percentage(&self) -> BTreeMap<String, f64> {
        let total = self.patient_count();
        if total == 0 {
            return BTreeMap::new();
        }

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for patient in self.patients() {
            *counts.entry(patient.gender().to_string()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(gender, count)| (gender, count as f64 / total as f64 * PERCENT))
            .collect()
    }

    /// Number of physicians per specialty.
    pub fn physician_count_by_specialty(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for physician in self.physicians() {
            *counts.entry(physician.specialty().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// The physician with the earliest hire year.
    ///
    /// On a tie the physician registered first wins.
    pub fn oldest_physician(&self) -> Option<&Physician> {
        self.physicians().iter().min_by_key(|p| p.hire_year())
    }
}
