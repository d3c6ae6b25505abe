use crate::models::Person;
use crate::services::{PersonError, PersonStore};
use crate::utils::validation::{parse_person_id, validate_number, validate_person};
use metrics::counter;
use std::sync::Arc;

/// Validated Person operations over a `PersonStore`.
///
/// Identifiers are shape-checked before the store is touched. Name uniqueness
/// is a find-then-insert check, so two concurrent creates with the same name
/// can both succeed.
#[derive(Clone)]
pub struct PersonRepository {
    store: Arc<dyn PersonStore>,
}

impl PersonRepository {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Person>, PersonError> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Person, PersonError> {
        let id = parse_person_id(id)?;
        self.store.get(id).await?.ok_or(PersonError::NotFound)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Person>, PersonError> {
        self.store.find_by_name(name).await
    }

    pub async fn create(&self, name: &str, number: &str) -> Result<Person, PersonError> {
        validate_person(name, number)?;

        if self.find_by_name(name).await?.is_some() {
            return Err(PersonError::Conflict {
                name: name.to_string(),
            });
        }

        let person = self
            .store
            .insert(Person::new(name.to_string(), number.to_string()))
            .await?;

        counter!("persons_created_total").increment(1);
        tracing::info!(person_id = %person.id, "Created person");
        Ok(person)
    }

    pub async fn update_number(&self, id: &str, number: &str) -> Result<Person, PersonError> {
        let id = parse_person_id(id)?;
        validate_number(number)?;

        let person = self
            .store
            .set_number(id, number)
            .await?
            .ok_or(PersonError::NotFound)?;

        tracing::info!(person_id = %person.id, "Updated person number");
        Ok(person)
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), PersonError> {
        let id = parse_person_id(id)?;
        self.store.delete(id).await?.ok_or(PersonError::NotFound)?;

        counter!("persons_deleted_total").increment(1);
        tracing::info!(person_id = %id, "Deleted person");
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, PersonError> {
        self.store.count().await
    }

    pub async fn ping(&self) -> Result<(), PersonError> {
        self.store.ping().await
    }
}
