//! Form validation.
//!
//! Validation runs before anything is sent: a form that fails here never
//! reaches the network, and each failure is reported against its field so
//! the page can render it inline.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::StudentFeatures;

/// Minimum accepted length of a new password.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validation errors that can occur during form validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field is required but empty.
    #[error("This field is required")]
    Required,
    /// Value is not a number.
    #[error("Must be a number")]
    NotANumber,
    /// Value is a number but not a whole one.
    #[error("Must be a whole number")]
    NotAnInteger,
    /// Number outside the accepted interval.
    #[error("Must be between {min} and {max}")]
    OutOfRange {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Value is not one of the offered options.
    #[error("Select one of the available options")]
    InvalidChoice,
    /// Email address is malformed.
    #[error("Enter a valid email address")]
    InvalidEmail,
    /// Password shorter than [`MIN_PASSWORD_LEN`].
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    /// Password confirmation doesn't match password.
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
    /// Reset link did not carry a token.
    #[error("Missing token")]
    MissingToken,
}

/// Per-field failures of one form submission, in field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(Vec<(&'static str, ValidationError)>);

impl FieldErrors {
    fn check(&mut self, field: &'static str, result: Result<(), ValidationError>) {
        if let Err(err) = result {
            self.0.push((field, err));
        }
    }

    fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Gather the failures among `(field, result)` pairs, for forms
    /// outside the fixed schemas below.
    ///
    /// # Errors
    /// Returns the failures when any check failed.
    pub fn collect<I>(checks: I) -> Result<(), Self>
    where
        I: IntoIterator<Item = (&'static str, Result<(), ValidationError>)>,
    {
        let mut errors = Self::default();
        for (field, result) in checks {
            errors.check(field, result);
        }
        errors.into_result()
    }

    /// Error reported for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, err)| err)
    }

    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First failure, used for a summary notification.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.0.first().map(|(_, err)| err)
    }

    /// Iterate `(field, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ValidationError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }
}

/// Validates that a value is present.
///
/// # Errors
/// [`ValidationError::Required`] when `value` is empty or whitespace.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(())
    }
}

/// Validates an email address.
///
/// # Errors
/// [`ValidationError::Required`] when empty, [`ValidationError::InvalidEmail`]
/// when it does not look like `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    validate_required(email)?;
    if EMAIL_PATTERN.is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a new password.
///
/// # Errors
/// [`ValidationError::Required`] when empty,
/// [`ValidationError::PasswordTooShort`] below [`MIN_PASSWORD_LEN`] characters.
pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    validate_required(password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    Ok(())
}

/// Validates that the password confirmation matches the password.
///
/// # Errors
/// [`ValidationError::Required`] when empty,
/// [`ValidationError::PasswordsDoNotMatch`] when it differs.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    validate_required(confirm_password)?;
    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

fn parse_number(value: &str, min: f64, max: f64) -> Result<f64, ValidationError> {
    validate_required(value)?;
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;
    if !number.is_finite() {
        return Err(ValidationError::NotANumber);
    }
    if number < min || number > max {
        return Err(ValidationError::OutOfRange { min, max });
    }
    Ok(number)
}

fn parse_integer(value: &str, min: u32, max: u32) -> Result<u32, ValidationError> {
    let number = parse_number(value, f64::from(min), f64::from(max))?;
    if number.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger);
    }
    // Range-checked and whole, so the cast is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = number as u32;
    Ok(whole)
}

fn parse_flag(value: &str) -> Result<u8, ValidationError> {
    match value.trim() {
        "0" => Ok(0),
        "1" => Ok(1),
        "" => Err(ValidationError::Required),
        _ => Err(ValidationError::InvalidChoice),
    }
}

/// Raw input of the prediction form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictForm {
    /// Age in years.
    pub age: String,
    /// Attendance percentage.
    pub attendance: String,
    /// Grade average.
    pub grades: String,
    /// `"1"` when the student has parental support, `"0"` otherwise.
    pub parent_support: String,
}

impl Default for PredictForm {
    fn default() -> Self {
        Self {
            age: String::new(),
            attendance: String::new(),
            grades: String::new(),
            parent_support: "1".to_string(),
        }
    }
}

impl PredictForm {
    /// Field name of the age input.
    pub const AGE: &'static str = "age";
    /// Field name of the attendance input.
    pub const ATTENDANCE: &'static str = "attendance";
    /// Field name of the grades input.
    pub const GRADES: &'static str = "grades";
    /// Field name of the parental support select.
    pub const PARENT_SUPPORT: &'static str = "parent_support";

    /// Validate every field and build the request payload.
    ///
    /// # Errors
    /// Returns all failing fields at once.
    pub fn validate(&self) -> Result<StudentFeatures, FieldErrors> {
        let age = parse_integer(&self.age, 1, 120);
        let attendance = parse_number(&self.attendance, 0.0, 100.0);
        let grades = parse_number(&self.grades, 0.0, 100.0);
        let parent_support = parse_flag(&self.parent_support);

        match (age, attendance, grades, parent_support) {
            (Ok(age), Ok(attendance), Ok(grades), Ok(parent_support)) => Ok(StudentFeatures {
                age,
                attendance,
                grades,
                parent_support,
            }),
            (age, attendance, grades, parent_support) => {
                let mut errors = FieldErrors::default();
                errors.check(Self::AGE, age.map(|_| ()));
                errors.check(Self::ATTENDANCE, attendance.map(|_| ()));
                errors.check(Self::GRADES, grades.map(|_| ()));
                errors.check(Self::PARENT_SUPPORT, parent_support.map(|_| ()));
                Err(errors)
            }
        }
    }
}

/// Validate the login form: both fields present.
///
/// # Errors
/// Returns every missing field.
pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("email", validate_required(email));
    errors.check("password", validate_required(password));
    errors.into_result()
}

/// Validate the signup form.
///
/// # Errors
/// Returns every failing field.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("name", validate_required(name));
    errors.check("email", validate_email(email));
    errors.check("password", validate_required(password));
    errors.check(
        "confirm_password",
        validate_confirm_password(confirm_password, password),
    );
    errors.into_result()
}

/// Validate the forgot-password form.
///
/// # Errors
/// Returns the email failure.
pub fn validate_forgot_password(email: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("email", validate_required(email));
    errors.into_result()
}

/// Validate the reset-password form.
///
/// # Errors
/// Returns every failing field; a missing token is reported against `token`.
pub fn validate_reset_password(
    token: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if token.trim().is_empty() {
        errors.check("token", Err(ValidationError::MissingToken));
    }
    errors.check("password", validate_new_password(password));
    errors.check(
        "confirm_password",
        validate_confirm_password(confirm_password, password),
    );
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn collect_keeps_only_failures_in_order() {
        let errors = FieldErrors::collect([
            ("name", validate_required("")),
            ("email", validate_email("ada@example.com")),
            ("subject", validate_required(" ")),
        ])
        .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["name", "subject"]);
        assert!(FieldErrors::collect([("name", validate_required("Ada"))]).is_ok());
    }

    fn form(age: &str, attendance: &str, grades: &str, parent_support: &str) -> PredictForm {
        PredictForm {
            age: age.into(),
            attendance: attendance.into(),
            grades: grades.into(),
            parent_support: parent_support.into(),
        }
    }

    #[test]
    fn predict_form_valid() {
        let features = form("19", "82.5", "71", "0").validate().unwrap();
        assert_eq!(
            features,
            StudentFeatures {
                age: 19,
                attendance: 82.5,
                grades: 71.0,
                parent_support: 0,
            }
        );
    }

    #[test]
    fn predict_form_accepts_bounds() {
        assert!(form("1", "0", "0", "1").validate().is_ok());
        assert!(form("120", "100", "100", "1").validate().is_ok());
        assert_eq!(form(" 20 ", "50", "50", "1").validate().unwrap().age, 20);
    }

    #[test]
    fn predict_form_default_is_incomplete() {
        let errors = PredictForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(PredictForm::AGE), Some(&ValidationError::Required));
        assert_eq!(errors.get(PredictForm::PARENT_SUPPORT), None);
    }

    #[test]
    fn predict_form_reports_each_field() {
        let errors = form("0", "101", "abc", "2").validate().unwrap_err();
        assert_eq!(
            errors.get("age"),
            Some(&ValidationError::OutOfRange {
                min: 1.0,
                max: 120.0
            })
        );
        assert_eq!(
            errors.get("attendance"),
            Some(&ValidationError::OutOfRange {
                min: 0.0,
                max: 100.0
            })
        );
        assert_eq!(errors.get("grades"), Some(&ValidationError::NotANumber));
        assert_eq!(errors.get("parent_support"), Some(&ValidationError::InvalidChoice));
        assert_eq!(errors.first(), Some(&ValidationError::OutOfRange { min: 1.0, max: 120.0 }));
    }

    #[test_case("18.5" => Some(ValidationError::NotAnInteger) ; "fractional age")]
    #[test_case("NaN" => Some(ValidationError::NotANumber) ; "nan age")]
    #[test_case("inf" => Some(ValidationError::NotANumber) ; "infinite age")]
    #[test_case("-3" => Some(ValidationError::OutOfRange { min: 1.0, max: 120.0 }) ; "negative age")]
    #[test_case("30.0" => None ; "whole float age")]
    fn age_rules(age: &str) -> Option<ValidationError> {
        form(age, "50", "50", "1")
            .validate()
            .err()
            .and_then(|errors| errors.get("age").cloned())
    }

    #[test]
    fn validation_messages() {
        assert_eq!(ValidationError::Required.to_string(), "This field is required");
        assert_eq!(
            ValidationError::OutOfRange { min: 0.0, max: 100.0 }.to_string(),
            "Must be between 0 and 100"
        );
        assert_eq!(
            ValidationError::PasswordTooShort(6).to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_login("student@example.com", "student123").is_ok());
        let errors = validate_login(" ", "").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some(&ValidationError::Required));
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("user.name+tag@example.com").is_ok());
        assert_eq!(validate_email("user@localhost"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(""), Err(ValidationError::Required));
    }

    #[test]
    fn signup_rules() {
        assert!(validate_signup("Ada", "ada@example.com", "pw", "pw").is_ok());
        let errors = validate_signup("", "ada", "pw", "wp").unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["name", "email", "confirm_password"]);
        assert_eq!(
            errors.get("confirm_password"),
            Some(&ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn forgot_password_requires_email() {
        assert!(validate_forgot_password("a@b.co").is_ok());
        assert!(validate_forgot_password("").is_err());
    }

    #[test]
    fn reset_password_rules() {
        assert!(validate_reset_password("tok", "secret", "secret").is_ok());

        let errors = validate_reset_password("", "short", "short").unwrap_err();
        assert_eq!(errors.get("token"), Some(&ValidationError::MissingToken));
        assert_eq!(errors.get("password"), Some(&ValidationError::PasswordTooShort(6)));

        let errors = validate_reset_password("tok", "secret1", "secret2").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.first(),
            Some(&ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(validate_new_password("pässw").is_err());
        assert!(validate_new_password("pässwö").is_ok());
    }
}
