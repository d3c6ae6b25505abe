use crate::models::Person;
use crate::utils::validation::{validate_name, validate_phone_number};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public JSON shape of a Person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonResponse {
    pub id: String,
    pub name: String,
    pub number: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.to_hex(),
            name: person.name,
            number: person.number,
        }
    }
}

// Absent fields deserialize to "" so they fail validation with a field message
// instead of a serde error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePersonRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_phone_number"))]
    pub number: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePersonRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_phone_number"))]
    pub number: String,
}
