use crate::config::Limits;
use crate::utils::error::Result;
use crate::utils::validation::{validate_max_length, validate_non_empty_string, validate_range};

/// A registered patient. Name and phone are stored trimmed, original casing kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub age: u8,
    pub phone: String,
}

impl Patient {
    pub fn new(name: impl Into<String>, age: u8, phone: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            age,
            phone: phone.into().trim().to_string(),
        }
    }

    /// Checks the record invariants (non-empty fields, length caps, age bounds).
    pub fn check_against(&self, limits: &Limits) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_max_length("name", &self.name, limits.name_max_len)?;
        validate_range("age", i64::from(self.age), limits.age_min, limits.age_max)?;
        validate_non_empty_string("phone", &self.phone)?;
        validate_max_length("phone", &self.phone, limits.phone_max_len)?;
        Ok(())
    }
}

/// Aggregates over a non-empty store. `youngest`/`oldest` borrow from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<'a> {
    pub count: usize,
    pub mean_age: f64,
    pub youngest: &'a Patient,
    pub oldest: &'a Patient,
}

/// What `PatientStore::register` did with the candidate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Added,
    /// Matched an existing record and the operator confirmed anyway.
    AddedDuplicate,
    /// Matched an existing record and the operator declined; store untouched.
    Declined,
}

impl Registration {
    pub fn is_stored(self) -> bool {
        !matches!(self, Registration::Declined)
    }
}
