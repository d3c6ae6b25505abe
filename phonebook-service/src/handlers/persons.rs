use crate::dtos::{CreatePersonRequest, PersonResponse, UpdatePersonRequest};
use crate::startup::AppState;
use crate::utils::{PersonIdPath, ValidatedJson};
use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;

pub async fn list_persons(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, AppError> {
    let persons = state.repository.list_all().await?;
    Ok(Json(persons.into_iter().map(PersonResponse::from).collect()))
}

pub async fn get_person(
    State(state): State<AppState>,
    PersonIdPath(id): PersonIdPath,
) -> Result<Json<PersonResponse>, AppError> {
    let person = state.repository.get_by_id(&id).await?;
    Ok(Json(PersonResponse::from(person)))
}

pub async fn create_person(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePersonRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), AppError> {
    let person = state
        .repository
        .create(&payload.name, &payload.number)
        .await?;

    Ok((StatusCode::CREATED, Json(PersonResponse::from(person))))
}

/// Replaces the number only; any `name` in the body is ignored.
pub async fn update_person(
    State(state): State<AppState>,
    PersonIdPath(id): PersonIdPath,
    ValidatedJson(payload): ValidatedJson<UpdatePersonRequest>,
) -> Result<Json<PersonResponse>, AppError> {
    let person = state
        .repository
        .update_number(&id, &payload.number)
        .await?;

    Ok(Json(PersonResponse::from(person)))
}

pub async fn delete_person(
    State(state): State<AppState>,
    PersonIdPath(id): PersonIdPath,
) -> Result<StatusCode, AppError> {
    state.repository.delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
