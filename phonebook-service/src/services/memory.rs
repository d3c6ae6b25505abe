use crate::models::Person;
use crate::services::{PersonError, PersonStore};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

/// Process-local store keeping records in insertion order. Used by tests and
/// local experiments; nothing is persisted.
#[derive(Default)]
pub struct InMemoryPersonStore {
    persons: RwLock<Vec<Person>>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons: RwLock::new(persons),
        }
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn list(&self) -> Result<Vec<Person>, PersonError> {
        Ok(self.persons.read().await.clone())
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Person>, PersonError> {
        let persons = self.persons.read().await;
        Ok(persons.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, PersonError> {
        let persons = self.persons.read().await;
        Ok(persons.iter().find(|p| p.name == name).cloned())
    }

    async fn insert(&self, person: Person) -> Result<Person, PersonError> {
        self.persons.write().await.push(person.clone());
        Ok(person)
    }

    async fn set_number(&self, id: ObjectId, number: &str) -> Result<Option<Person>, PersonError> {
        let mut persons = self.persons.write().await;
        Ok(persons.iter_mut().find(|p| p.id == id).map(|person| {
            person.number = number.to_string();
            person.clone()
        }))
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<Person>, PersonError> {
        let mut persons = self.persons.write().await;
        let position = persons.iter().position(|p| p.id == id);
        Ok(position.map(|index| persons.remove(index)))
    }

    async fn count(&self) -> Result<u64, PersonError> {
        Ok(self.persons.read().await.len() as u64)
    }

    async fn ping(&self) -> Result<(), PersonError> {
        Ok(())
    }
}
