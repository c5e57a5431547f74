//! Booking request form: field validation and the session date constraint.

use std::sync::LazyLock;
use chrono::{NaiveDate, Utc};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const MIN_NAME_LEN: usize = 2;

pub const SUCCESS_TITLE: &str = "Request Received";
pub const SUCCESS_BODY: &str = "Thank you. I will be in touch shortly.";

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Invalid email address.")]
    InvalidEmail,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Field {
    Name,
    Email,
}

/// Whether a field is drawn with the error highlight.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldStatus {
    Valid,
    Invalid,
}

/// The submitted values. A field the form does not have is `None`.
#[derive(Debug, Default, Clone)]
pub struct BookingForm {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub fields: Vec<(Field, FieldStatus)>,
    pub errors: Vec<FieldError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn status(&self, field: Field) -> Option<FieldStatus> {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, status)| *status)
    }

    /// The message listing every problem, or `None` when the form is valid.
    pub fn summary(&self) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        let lines: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        Some(format!("Please check the form:\n- {}", lines.join("\n- ")))
    }

    fn record(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.fields.push((field, FieldStatus::Invalid));
                self.errors.push(error);
            }
            None => self.fields.push((field, FieldStatus::Valid)),
        }
    }
}

/// Length is counted in UTF-16 code units, as the browser form does.
pub fn check_name(name: &str) -> Result<(), FieldError> {
    if name.trim().encode_utf16().count() < MIN_NAME_LEN {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

pub fn check_email(email: &str) -> Result<(), FieldError> {
    if !EMAIL.is_match(email.trim()) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate(form: &BookingForm) -> Validation {
    let mut validation = Validation::default();
    if let Some(name) = &form.name {
        validation.record(Field::Name, check_name(name).err());
    }
    if let Some(email) = &form.email {
        validation.record(Field::Email, check_email(email).err());
    }
    debug!(errors = validation.errors.len(), "Validated booking form");
    validation
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateError {
    #[error("Please select a future date for your session.")]
    InPast(NaiveDate),
    #[error("'{0}' is not a date in YYYY-MM-DD form")]
    Invalid(String),
}

/// Earliest date a session can be booked for.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DateConstraint {
    min: NaiveDate,
}

impl DateConstraint {
    pub fn new(min: NaiveDate) -> Self {
        Self { min }
    }

    /// Today, as a UTC calendar date.
    pub fn today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    pub fn min(&self) -> NaiveDate {
        self.min
    }

    /// Check a date input value. An empty value means nothing is selected.
    pub fn check(&self, value: &str) -> Result<Option<NaiveDate>, DateError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| DateError::Invalid(value.to_string()))?;
        if date < self.min {
            return Err(DateError::InPast(date));
        }
        Ok(Some(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, email: Option<&str>) -> BookingForm {
        BookingForm {
            name: name.map(String::from),
            email: email.map(String::from),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        let validation = validate(&form(Some("Ada"), Some(" ada@example.com ")));
        assert!(validation.is_valid());
        assert_eq!(validation.summary(), None);
        assert_eq!(validation.status(Field::Name), Some(FieldStatus::Valid));
        assert_eq!(validation.status(Field::Email), Some(FieldStatus::Valid));
    }

    #[test]
    fn name_is_trimmed_before_counting() {
        assert_eq!(check_name("  A  "), Err(FieldError::NameTooShort));
        assert_eq!(check_name("Al"), Ok(()));
    }

    #[test]
    fn name_length_counts_utf16_units() {
        assert_eq!(check_name("😀"), Ok(()));
        assert_eq!(check_name("é"), Err(FieldError::NameTooShort));
    }

    #[test]
    fn email_shapes() {
        assert!(check_email("a@b.co").is_ok());
        assert!(check_email("a@b").is_err());
        assert!(check_email("a b@c.de").is_err());
        assert!(check_email("a@@b.de").is_err());
        assert!(check_email("").is_err());
    }

    #[test]
    fn summary_lists_every_error() {
        let validation = validate(&form(Some("x"), Some("nope")));
        assert_eq!(validation.status(Field::Name), Some(FieldStatus::Invalid));
        assert_eq!(
            validation.summary().unwrap(),
            "Please check the form:\n- Name must be at least 2 characters.\n- Invalid email address."
        );
    }

    #[test]
    fn absent_fields_are_not_checked() {
        let validation = validate(&form(None, Some("bad")));
        assert_eq!(validation.status(Field::Name), None);
        assert_eq!(validation.errors, vec![FieldError::InvalidEmail]);
    }

    #[test]
    fn dates_before_the_minimum_are_rejected() {
        let min = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let constraint = DateConstraint::new(min);
        assert_eq!(constraint.check("2026-10-19"), Ok(Some(min)));
        assert!(matches!(constraint.check("2026-10-18"), Err(DateError::InPast(_))));
        assert!(matches!(constraint.check("19/10/2026"), Err(DateError::Invalid(_))));
        assert_eq!(constraint.check(""), Ok(None));
    }

    #[test]
    fn in_past_message_matches_the_page() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(
            DateError::InPast(date).to_string(),
            "Please select a future date for your session."
        );
    }
}
