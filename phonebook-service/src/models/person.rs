use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const PERSONS_COLLECTION: &str = "persons";

/// Storage record for the `persons` collection.
///
/// Never serialized to clients; see `dtos::PersonResponse`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub number: String,
}

impl Person {
    pub fn new(name: String, number: String) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            number,
        }
    }
}
