//! Field constraints for `UserRequest`.
//!
//! Fields are checked in declaration order (name, email, password);
//! within a field the rules run as: surrounding whitespace, not-blank,
//! then shape/length. Every rule is evaluated against the raw value so
//! a single field can report several violations at once.

use super::error::FieldError;
use crate::models::UserRequest;
use std::sync::LazyLock;

/// RFC 5322 style email pattern.
///
/// Local part: alphanumeric plus common specials, dot-separated.
/// Domain: dot-separated labels, no leading/trailing hyphen.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    )
    .expect("EMAIL_REGEX is a valid regex pattern")
});

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 20;

const BLANK_MESSAGE: &str = "must not be null or empty";
const SURROUNDING_WHITESPACE_MESSAGE: &str =
    "field cannot have blank spaces at the beginning or at end";
const NAME_SIZE_MESSAGE: &str = "must be between 3 and 50 characters";
const PASSWORD_SIZE_MESSAGE: &str = "must be between 8 and 20 characters";
const EMAIL_MESSAGE: &str = "invalid e-mail";

/// Validate a create payload. Every field is required; a missing field
/// fails the not-blank rule.
pub fn validate_create(request: &UserRequest) -> Result<(), Vec<FieldError>> {
    validate(request, true)
}

/// Validate a partial-update payload. Absent fields are skipped; a
/// field that is present must still satisfy all of its constraints.
pub fn validate_update(request: &UserRequest) -> Result<(), Vec<FieldError>> {
    validate(request, false)
}

fn validate(request: &UserRequest, required: bool) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_name(request.name.as_deref(), required, &mut errors);
    check_email(request.email.as_deref(), required, &mut errors);
    check_password(request.password.as_deref(), required, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_name(value: Option<&str>, required: bool, errors: &mut Vec<FieldError>) {
    let Some(value) = value else {
        if required {
            errors.push(FieldError::new("name", BLANK_MESSAGE));
        }
        return;
    };
    check_surrounding_whitespace("name", value, errors);
    check_blank("name", value, errors);
    check_size("name", value, NAME_MIN, NAME_MAX, NAME_SIZE_MESSAGE, errors);
}

fn check_email(value: Option<&str>, required: bool, errors: &mut Vec<FieldError>) {
    let Some(value) = value else {
        if required {
            errors.push(FieldError::new("email", BLANK_MESSAGE));
        }
        return;
    };
    check_surrounding_whitespace("email", value, errors);
    check_blank("email", value, errors);
    // A blank email already fails not-blank; the shape rule only fires
    // on non-blank values.
    if !value.trim().is_empty() && !EMAIL_REGEX.is_match(value) {
        errors.push(FieldError::new("email", EMAIL_MESSAGE));
    }
}

fn check_password(value: Option<&str>, required: bool, errors: &mut Vec<FieldError>) {
    let Some(value) = value else {
        if required {
            errors.push(FieldError::new("password", BLANK_MESSAGE));
        }
        return;
    };
    check_surrounding_whitespace("password", value, errors);
    check_blank("password", value, errors);
    check_size(
        "password",
        value,
        PASSWORD_MIN,
        PASSWORD_MAX,
        PASSWORD_SIZE_MESSAGE,
        errors,
    );
}

fn check_surrounding_whitespace(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if value != value.trim() {
        errors.push(FieldError::new(field, SURROUNDING_WHITESPACE_MESSAGE));
    }
}

fn check_blank(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, BLANK_MESSAGE));
    }
}

fn check_size(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
    message: &str,
    errors: &mut Vec<FieldError>,
) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(FieldError::new(field, message));
    }
}
