//! Identifier and field rules applied at the API boundary and again by the
//! repository before any write.

use crate::services::PersonError;
use mongodb::bson::oid::ObjectId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

pub const NAME_MIN_LENGTH: usize = 3;
pub const NUMBER_MIN_LENGTH: usize = 8;

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2,3}-[0-9]+$").expect("phone number pattern is valid"));

/// An ObjectId is exactly 24 hexadecimal characters.
pub fn is_valid_object_id(id: &str) -> bool {
    id.len() == 24 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn parse_person_id(id: &str) -> Result<ObjectId, PersonError> {
    if !is_valid_object_id(id) {
        return Err(PersonError::InvalidId);
    }
    Ok(ObjectId::parse_str(id)?)
}

fn failure(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(failure("required", "Name is required"));
    }
    if name.chars().count() < NAME_MIN_LENGTH {
        return Err(failure("length", "Name must be at least 3 characters long"));
    }
    Ok(())
}

/// Accepts `09-1234556` or `040-22334455`: two or three digits, a dash, more
/// digits, eight characters or longer overall.
pub fn validate_phone_number(number: &str) -> Result<(), ValidationError> {
    if number.is_empty() {
        return Err(failure("required", "Phone number is required"));
    }
    if !PHONE_NUMBER_RE.is_match(number) || number.chars().count() < NUMBER_MIN_LENGTH {
        return Err(failure(
            "phone_number",
            format!(
                "{} is not a valid phone number! Must be in the format XX-XXXXXXX or XXX-XXXXXXXX.",
                number
            ),
        ));
    }
    Ok(())
}

fn into_person_error(err: ValidationError) -> PersonError {
    let message = err
        .message
        .map(|m| m.into_owned())
        .unwrap_or_else(|| err.code.into_owned());
    PersonError::ValidationFailed(message)
}

pub fn validate_number(number: &str) -> Result<(), PersonError> {
    validate_phone_number(number).map_err(into_person_error)
}

pub fn validate_person(name: &str, number: &str) -> Result<(), PersonError> {
    validate_name(name).map_err(into_person_error)?;
    validate_number(number)
}
