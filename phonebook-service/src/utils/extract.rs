use crate::services::PersonError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON body extractor that also runs the payload's `validator` rules.
///
/// Unparseable bodies and rule violations are both client errors (400).
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                AppError::BadRequest(anyhow::anyhow!(rejection.body_text()))
            })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// The `:id` path segment. A segment axum cannot decode is a malformed id.
pub struct PersonIdPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for PersonIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected path parameter");
                AppError::from(PersonError::InvalidId)
            })?;

        Ok(PersonIdPath(id))
    }
}
