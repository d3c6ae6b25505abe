use crate::models::Person;
use crate::services::PersonError;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

/// Raw document operations on the Person collection.
///
/// No validation or uniqueness rules live here; `PersonRepository` applies
/// those before calling in.
#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Person>, PersonError>;
    async fn get(&self, id: ObjectId) -> Result<Option<Person>, PersonError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, PersonError>;
    async fn insert(&self, person: Person) -> Result<Person, PersonError>;
    /// Returns the updated record, or `None` when no record has `id`.
    async fn set_number(&self, id: ObjectId, number: &str) -> Result<Option<Person>, PersonError>;
    /// Returns the removed record, or `None` when no record has `id`.
    async fn delete(&self, id: ObjectId) -> Result<Option<Person>, PersonError>;
    async fn count(&self) -> Result<u64, PersonError>;
    async fn ping(&self) -> Result<(), PersonError>;
}
