use mongodb::error::{ErrorKind, WriteFailure};
use service_core::error::AppError;
use thiserror::Error;

/// MongoDB server code for a write rejected by the collection's `$jsonSchema`.
pub const DOCUMENT_VALIDATION_FAILURE: i32 = 121;
/// MongoDB server code for creating a collection that already exists.
pub const NAMESPACE_EXISTS: i32 = 48;

/// Every way a Person operation can fail.
#[derive(Debug, Error)]
pub enum PersonError {
    #[error("Malformatted ID")]
    InvalidId,

    #[error("{0}")]
    ValidationFailed(String),

    #[error("Person not found")]
    NotFound,

    #[error("Name must be unique")]
    Conflict { name: String },

    #[error("Storage error: {0}")]
    StorageError(anyhow::Error),
}

impl From<mongodb::error::Error> for PersonError {
    fn from(err: mongodb::error::Error) -> Self {
        match server_error_code(&err) {
            Some(DOCUMENT_VALIDATION_FAILURE) => {
                PersonError::ValidationFailed("Person failed document validation".to_string())
            }
            _ => PersonError::StorageError(anyhow::Error::new(err)),
        }
    }
}

impl From<mongodb::bson::oid::Error> for PersonError {
    fn from(_: mongodb::bson::oid::Error) -> Self {
        PersonError::InvalidId
    }
}

impl From<PersonError> for AppError {
    fn from(err: PersonError) -> Self {
        match err {
            PersonError::InvalidId => AppError::BadRequest(anyhow::anyhow!("Malformatted ID")),
            PersonError::ValidationFailed(message) => AppError::BadRequest(anyhow::anyhow!(message)),
            PersonError::NotFound => AppError::NotFound(anyhow::anyhow!("Person not found")),
            PersonError::Conflict { name } => {
                tracing::info!(name = %name, "Rejected duplicate person name");
                AppError::BadRequest(anyhow::anyhow!("Name must be unique"))
            }
            PersonError::StorageError(err) => AppError::DatabaseError(err),
        }
    }
}

/// Numeric server error code carried by a driver error, if any.
pub fn server_error_code(err: &mongodb::error::Error) -> Option<i32> {
    match err.kind.as_ref() {
        ErrorKind::Command(command) => Some(command.code),
        ErrorKind::Write(WriteFailure::WriteError(write)) => Some(write.code),
        ErrorKind::Write(WriteFailure::WriteConcernError(concern)) => Some(concern.code),
        _ => None,
    }
}
