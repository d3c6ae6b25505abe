use crate::models::{Person, PERSONS_COLLECTION};
use crate::services::error::{server_error_code, NAMESPACE_EXISTS};
use crate::services::{PersonError, PersonStore};
use crate::utils::validation::{NAME_MIN_LENGTH, NUMBER_MIN_LENGTH};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{
        Acknowledgment, ClientOptions, CreateCollectionOptions, FindOneAndUpdateOptions,
        IndexOptions, ReturnDocument, WriteConcern,
    },
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;
use std::time::Duration;

const APP_NAME: &str = "phonebook-service";
const WRITE_CONCERN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Connect and ping once, so an unreachable server fails startup within
    /// `timeout` instead of on the first request.
    pub async fn connect(uri: &str, database: &str, timeout: Duration) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB connection string: {}", e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;
        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);
        options.write_concern = Some(
            WriteConcern::builder()
                .w(Acknowledgment::Majority)
                .w_timeout(WRITE_CONCERN_TIMEOUT)
                .build(),
        );

        let client = MongoClient::with_options(options)?;
        let db = client.database(database);
        let mongo = Self { client, db };

        mongo.health_check().await?;
        tracing::info!(database = %database, "Successfully connected to MongoDB database");

        Ok(mongo)
    }

    /// Create the `persons` collection with its schema validator (first run
    /// only) and the `name` lookup index.
    pub async fn initialize_collection(&self) -> Result<(), AppError> {
        let existing = self.db.list_collection_names(None).await?;
        if !existing.iter().any(|name| name == PERSONS_COLLECTION) {
            let options = CreateCollectionOptions::builder()
                .validator(person_schema())
                .build();
            match self.db.create_collection(PERSONS_COLLECTION, options).await {
                Ok(()) => tracing::info!("Created persons collection with schema validator"),
                // Another instance won the race.
                Err(e) if server_error_code(&e) == Some(NAMESPACE_EXISTS) => {}
                Err(e) => {
                    tracing::error!("Failed to create persons collection: {}", e);
                    return Err(AppError::from(e));
                }
            }
        }

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .name("name_lookup".to_string())
                    .build(),
            )
            .build();

        self.persons()
            .create_index(name_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create name index on persons collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on persons.name");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn persons(&self) -> Collection<Person> {
        self.db.collection(PERSONS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// Server-side mirror of the API rules. The unique-name rule cannot be
/// expressed here.
fn person_schema() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["name", "number"],
            "properties": {
                "name": {
                    "bsonType": "string",
                    "minLength": NAME_MIN_LENGTH as i32,
                },
                "number": {
                    "bsonType": "string",
                    "minLength": NUMBER_MIN_LENGTH as i32,
                    "pattern": "^[0-9]{2,3}-[0-9]+$",
                },
            },
        }
    }
}

/// `PersonStore` backed by the `persons` collection.
#[derive(Clone)]
pub struct MongoPersonStore {
    db: MongoDb,
    persons: Collection<Person>,
}

impl MongoPersonStore {
    pub fn new(db: MongoDb) -> Self {
        let persons = db.persons();
        Self { db, persons }
    }
}

#[async_trait]
impl PersonStore for MongoPersonStore {
    async fn list(&self) -> Result<Vec<Person>, PersonError> {
        let cursor = self.persons.find(None, None).await?;
        let persons: Vec<Person> = cursor.try_collect().await?;
        Ok(persons)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Person>, PersonError> {
        Ok(self.persons.find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, PersonError> {
        Ok(self.persons.find_one(doc! { "name": name }, None).await?)
    }

    async fn insert(&self, person: Person) -> Result<Person, PersonError> {
        self.persons.insert_one(&person, None).await?;
        Ok(person)
    }

    async fn set_number(&self, id: ObjectId, number: &str) -> Result<Option<Person>, PersonError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        Ok(self
            .persons
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": { "number": number } },
                options,
            )
            .await?)
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<Person>, PersonError> {
        Ok(self
            .persons
            .find_one_and_delete(doc! { "_id": id }, None)
            .await?)
    }

    async fn count(&self) -> Result<u64, PersonError> {
        Ok(self.persons.count_documents(None, None).await?)
    }

    async fn ping(&self) -> Result<(), PersonError> {
        self.db
            .health_check()
            .await
            .map_err(|e| PersonError::StorageError(anyhow::Error::new(e)))
    }
}
