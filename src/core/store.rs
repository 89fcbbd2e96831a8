use crate::core::normalize::normalize;
use crate::domain::model::{Patient, Registration, Statistics};
use crate::utils::error::Result;

/// Insertion-ordered, create-only collection of patients owned by one session.
#[derive(Debug, Default, Clone)]
pub struct PatientStore {
    patients: Vec<Patient>,
}

impl PatientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// First record with the same normalized name and the same trimmed phone.
    pub fn find_duplicate(&self, name: &str, phone: &str) -> Option<&Patient> {
        let key = normalize(name);
        let phone = phone.trim();
        self.patients
            .iter()
            .find(|p| p.phone.trim() == phone && normalize(&p.name) == key)
    }

    /// Appends `patient`. When it duplicates an existing record,
    /// `confirm_duplicate` decides; a `false` leaves the store untouched.
    pub fn register<F>(&mut self, patient: Patient, confirm_duplicate: F) -> Result<Registration>
    where
        F: FnOnce(&Patient) -> Result<bool>,
    {
        let outcome = match self.find_duplicate(&patient.name, &patient.phone) {
            None => Registration::Added,
            Some(existing) => {
                tracing::warn!("Possible duplicate registration detected");
                if confirm_duplicate(existing)? {
                    Registration::AddedDuplicate
                } else {
                    Registration::Declined
                }
            }
        };

        if outcome.is_stored() {
            self.patients.push(patient);
        }
        tracing::debug!("Registration outcome {:?}, store size {}", outcome, self.len());
        Ok(outcome)
    }

    /// `None` on an empty store. Ties on youngest/oldest resolve to the
    /// earliest record in insertion order.
    pub fn statistics(&self) -> Option<Statistics<'_>> {
        let (first, rest) = self.patients.split_first()?;

        let mut youngest = first;
        let mut oldest = first;
        let mut age_sum = u64::from(first.age);
        for patient in rest {
            if patient.age < youngest.age {
                youngest = patient;
            }
            if patient.age > oldest.age {
                oldest = patient;
            }
            age_sum += u64::from(patient.age);
        }

        let count = self.patients.len();
        Some(Statistics {
            count,
            mean_age: age_sum as f64 / count as f64,
            youngest,
            oldest,
        })
    }

    /// Records whose normalized name contains the normalized `term`, in store order.
    pub fn search(&self, term: &str) -> Vec<&Patient> {
        let needle = normalize(term);
        let hits: Vec<&Patient> = self
            .patients
            .iter()
            .filter(|p| normalize(&p.name).contains(&needle))
            .collect();
        tracing::debug!("Search matched {} of {} patients", hits.len(), self.len());
        hits
    }
}
