use chrono::NaiveDate;

/// Average length of a year in days, used for the age shown in display labels
const DAYS_PER_YEAR: f64 = 365.2425;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub parent: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    /// Derived from the store on read; ignored on write
    pub has_children: bool,
}

impl Person {
    /// "First Last", trimmed so a missing part leaves no stray space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Human readable label, including the age when a date of birth is known.
    pub fn display_label(&self, today: NaiveDate) -> String {
        match self.date_of_birth {
            Some(dob) => {
                let days = (today - dob).num_days() as f64;
                let years = (days / DAYS_PER_YEAR).round() as i64;
                format!("{} is {} years old.", self.full_name(), years)
            }
            None => self.full_name(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PersonValidationError {
    #[error("First name cannot be empty")]
    EmptyFirstName,
    #[error("Last name cannot be empty")]
    EmptyLastName,
    #[error("Date of birth cannot be in the future")]
    DateOfBirthInFuture,
}

/// Field rules for a person record. All rules are checked and every failure is reported.
pub fn validate_person(person: &Person, today: NaiveDate) -> Vec<PersonValidationError> {
    let mut errors = Vec::new();

    if person.first_name.trim().is_empty() {
        errors.push(PersonValidationError::EmptyFirstName);
    }
    if person.last_name.trim().is_empty() {
        errors.push(PersonValidationError::EmptyLastName);
    }
    if let Some(dob) = person.date_of_birth {
        if dob > today {
            errors.push(PersonValidationError::DateOfBirthInFuture);
        }
    }

    errors
}
