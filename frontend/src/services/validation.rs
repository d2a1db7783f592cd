//! Client-side field validation for the registration forms.
//!
//! Presence and format checks only; uniqueness and referential rules are
//! enforced server-side and surfaced through notifications.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Contact numbers must be numeric with at least 10 digits.
static CONTACT_NO_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10,}$").unwrap_or_else(|_| unreachable!()));

/// Lightweight email shape check: something@something.something.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|_| unreachable!()));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Contact No should be numeric and contain at least 10 digits")]
    ContactNo,
    #[error("Invalid Email Address")]
    Email,
    #[error("Invalid Date of Birth")]
    DateFormat,
    #[error("Date of Birth cannot be in the future")]
    FutureBirthDate,
}

pub fn require(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required(field))
    } else {
        Ok(())
    }
}

pub fn validate_contact_no(value: &str) -> Result<(), FieldError> {
    require("Contact No", value)?;
    if CONTACT_NO_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::ContactNo)
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    require("Email Address", value)?;
    if EMAIL_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::Email)
    }
}

/// A date of birth must parse as `YYYY-MM-DD` and lie strictly in the past.
pub fn validate_date_of_birth(value: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    require("Date of Birth", value)?;
    let dob = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FieldError::DateFormat)?;
    if dob >= today {
        return Err(FieldError::FutureBirthDate);
    }
    Ok(dob)
}

/// Whole years between `dob` and `today`, discounting a birthday that has
/// not yet been reached this year.
pub fn age_in_years(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Raw field values of the teacher registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherForm {
    pub first_name: String,
    pub last_name: String,
    pub contact_no: String,
    pub email_address: String,
}

/// Per-field error messages; `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherFormErrors {
    pub first_name: Option<String>,
    pub contact_no: Option<String>,
    pub email_address: Option<String>,
}

impl TeacherFormErrors {
    pub fn is_clean(&self) -> bool {
        self.first_name.is_none() && self.contact_no.is_none() && self.email_address.is_none()
    }
}

pub fn validate_teacher_form(form: &TeacherForm) -> TeacherFormErrors {
    TeacherFormErrors {
        first_name: require("First Name", &form.first_name)
            .err()
            .map(|e| e.to_string()),
        contact_no: validate_contact_no(&form.contact_no)
            .err()
            .map(|e| e.to_string()),
        email_address: validate_email(&form.email_address)
            .err()
            .map(|e| e.to_string()),
    }
}

/// Raw field values of the student registration form. `classroom` holds
/// the select value and stays a string until submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub contact_person: String,
    pub contact_no: String,
    pub email_address: String,
    pub date_of_birth: String,
    pub classroom: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFormErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub contact_person: Option<String>,
    pub contact_no: Option<String>,
    pub email_address: Option<String>,
    pub date_of_birth: Option<String>,
    pub classroom: Option<String>,
}

impl StudentFormErrors {
    pub fn is_clean(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.contact_person.is_none()
            && self.contact_no.is_none()
            && self.email_address.is_none()
            && self.date_of_birth.is_none()
            && self.classroom.is_none()
    }
}

pub fn validate_student_form(form: &StudentForm, today: NaiveDate) -> StudentFormErrors {
    StudentFormErrors {
        first_name: require("First Name", &form.first_name)
            .err()
            .map(|e| e.to_string()),
        last_name: require("Last Name", &form.last_name)
            .err()
            .map(|e| e.to_string()),
        contact_person: require("Contact Person", &form.contact_person)
            .err()
            .map(|e| e.to_string()),
        contact_no: validate_contact_no(&form.contact_no)
            .err()
            .map(|e| e.to_string()),
        email_address: validate_email(&form.email_address)
            .err()
            .map(|e| e.to_string()),
        date_of_birth: validate_date_of_birth(&form.date_of_birth, today)
            .err()
            .map(|e| e.to_string()),
        classroom: require("Classroom", &form.classroom)
            .err()
            .map(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn contact_no_needs_ten_numeric_digits() {
        assert!(validate_contact_no("0712345678").is_ok());
        assert!(validate_contact_no("07123456789012").is_ok());
        assert_eq!(validate_contact_no("071234567"), Err(FieldError::ContactNo));
        assert_eq!(validate_contact_no("07x1234567"), Err(FieldError::ContactNo));
        assert_eq!(
            validate_contact_no("  "),
            Err(FieldError::Required("Contact No"))
        );
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(validate_email("amal@school.lk").is_ok());
        assert_eq!(validate_email("amal@school"), Err(FieldError::Email));
        assert_eq!(validate_email("amal school@x.lk"), Err(FieldError::Email));
        assert_eq!(validate_email(""), Err(FieldError::Required("Email Address")));
    }

    #[test]
    fn date_of_birth_must_be_strictly_past() {
        let today = date(2024, 3, 15);
        assert_eq!(
            validate_date_of_birth("2010-06-01", today),
            Ok(date(2010, 6, 1))
        );
        assert_eq!(
            validate_date_of_birth("2024-03-15", today),
            Err(FieldError::FutureBirthDate)
        );
        assert_eq!(
            validate_date_of_birth("2025-01-01", today),
            Err(FieldError::FutureBirthDate)
        );
        assert_eq!(
            validate_date_of_birth("01/06/2010", today),
            Err(FieldError::DateFormat)
        );
    }

    #[test]
    fn age_is_floored_until_the_birthday_passes() {
        let dob = date(2010, 6, 15);
        assert_eq!(age_in_years(dob, date(2024, 6, 14)), 13);
        assert_eq!(age_in_years(dob, date(2024, 6, 15)), 14);
        assert_eq!(age_in_years(dob, date(2024, 6, 16)), 14);
        assert_eq!(age_in_years(dob, date(2024, 1, 1)), 13);
        assert_eq!(age_in_years(dob, date(2024, 12, 31)), 14);
    }

    #[test]
    fn teacher_form_reports_each_failing_field() {
        let errors = validate_teacher_form(&TeacherForm {
            first_name: "".into(),
            last_name: "Silva".into(),
            contact_no: "123".into(),
            email_address: "not-an-email".into(),
        });
        assert_eq!(errors.first_name.as_deref(), Some("First Name is required"));
        assert_eq!(
            errors.contact_no.as_deref(),
            Some("Contact No should be numeric and contain at least 10 digits")
        );
        assert_eq!(errors.email_address.as_deref(), Some("Invalid Email Address"));
        assert!(!errors.is_clean());
    }

    #[test]
    fn complete_student_form_is_clean() {
        let form = StudentForm {
            first_name: "Nimal".into(),
            last_name: "Perera".into(),
            contact_person: "Sunil Perera".into(),
            contact_no: "0771234567".into(),
            email_address: "nimal@school.lk".into(),
            date_of_birth: "2012-04-02".into(),
            classroom: "3".into(),
        };
        assert!(validate_student_form(&form, date(2024, 3, 15)).is_clean());
    }
}
