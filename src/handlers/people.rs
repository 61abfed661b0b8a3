use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};
use crate::handlers::common::{delete_or_404, find_or_404, list_all};
use crate::schemas::{AppState, ErrorResponse, MessageResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use model::entities::people;
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a new character
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreatePeopleRequest {
    #[validate(length(min = 1, max = 50))]
    pub firstname: String,
    #[validate(length(min = 1, max = 50))]
    pub lastname: String,
    #[validate(length(min = 1, max = 50))]
    pub specie: String,
    /// Creation timestamp; defaults to the current time in RFC 3339
    #[validate(length(max = 100))]
    pub created: Option<String>,
}

/// Create a new character
#[utoipa::path(
    post,
    path = "/people",
    tag = "people",
    request_body = CreatePeopleRequest,
    responses(
        (status = 201, description = "People created successfully", body = People),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_people(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreatePeopleRequest>,
) -> Result<(StatusCode, Json<people::Model>), ApiError> {
    trace!("Entering create_people function");

    let new_people = people::ActiveModel {
        firstname: Set(request.firstname),
        lastname: Set(request.lastname),
        specie: Set(request.specie),
        created: Set(request.created.unwrap_or_else(|| Utc::now().to_rfc3339())),
        ..Default::default()
    };

    let people_model = new_people.insert(&state.db).await.map_err(|db_error| {
        error!("Failed to create people: {}", db_error);
        ApiError::from(db_error)
    })?;

    info!("People created successfully with ID: {}", people_model.id);
    Ok((StatusCode::CREATED, Json(people_model)))
}

/// Get all characters
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses(
        (status = 200, description = "People retrieved successfully", body = Vec<People>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_people(State(state): State<AppState>) -> Result<Json<Vec<people::Model>>, ApiError> {
    trace!("Entering get_people function");
    let people = list_all::<people::Entity, _>(&state.db, "People").await?;
    info!("Successfully retrieved {} people", people.len());
    Ok(Json(people))
}

/// Get a specific character by ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = "people",
    params(
        ("people_id" = i32, Path, description = "People ID"),
    ),
    responses(
        (status = 200, description = "People retrieved successfully", body = People),
        (status = 404, description = "People not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_people_by_id(
    AppPath(people_id): AppPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<people::Model>, ApiError> {
    let people_model = find_or_404::<people::Entity, _>(&state.db, people_id, "People").await?;
    Ok(Json(people_model))
}

/// Delete a character, removing it from favorites and film casts
#[utoipa::path(
    delete,
    path = "/people/{people_id}",
    tag = "people",
    params(
        ("people_id" = i32, Path, description = "People ID"),
    ),
    responses(
        (status = 200, description = "People deleted successfully", body = MessageResponse),
        (status = 404, description = "People not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_people(
    AppPath(people_id): AppPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_or_404::<people::Entity>(&state.db, people_id, "People").await?;
    Ok(Json(MessageResponse::new("People deleted")))
}
