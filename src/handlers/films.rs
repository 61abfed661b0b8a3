use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};
use crate::handlers::common::{delete_or_404, find_or_404, list_all};
use crate::schemas::{AppState, ErrorResponse, MessageResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{NaiveDate, Utc};
use model::entities::film;
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a new film
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateFilmRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub director: String,
    /// Release date (YYYY-MM-DD)
    pub release_date: NaiveDate,
    #[validate(length(max = 100))]
    pub created: Option<String>,
    /// Defaults to today
    pub edited: Option<NaiveDate>,
}

/// Create a new film
#[utoipa::path(
    post,
    path = "/film",
    tag = "films",
    request_body = CreateFilmRequest,
    responses(
        (status = 201, description = "Film created successfully", body = Film),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state), fields(name = %request.name))]
pub async fn create_film(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateFilmRequest>,
) -> Result<(StatusCode, Json<film::Model>), ApiError> {
    trace!("Entering create_film function");
    let now = Utc::now();

    let new_film = film::ActiveModel {
        name: Set(request.name),
        director: Set(request.director),
        created: Set(request.created.unwrap_or_else(|| now.to_rfc3339())),
        edited: Set(request.edited.unwrap_or_else(|| now.date_naive())),
        release_date: Set(request.release_date),
        ..Default::default()
    };

    debug!("Inserting film into database");
    let film_model = new_film.insert(&state.db).await.map_err(|db_error| {
        error!("Failed to create film: {}", db_error);
        ApiError::from(db_error)
    })?;

    info!(
        "Film created successfully with ID: {}, name: {}",
        film_model.id, film_model.name
    );
    Ok((StatusCode::CREATED, Json(film_model)))
}

/// Get all films
#[utoipa::path(
    get,
    path = "/film",
    tag = "films",
    responses(
        (status = 200, description = "Films retrieved successfully", body = Vec<Film>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_films(State(state): State<AppState>) -> Result<Json<Vec<film::Model>>, ApiError> {
    trace!("Entering get_films function");
    let films = list_all::<film::Entity, _>(&state.db, "Film").await?;
    info!("Successfully retrieved {} films", films.len());
    Ok(Json(films))
}

/// Get a specific film by ID
#[utoipa::path(
    get,
    path = "/film/{film_id}",
    tag = "films",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
    ),
    responses(
        (status = 200, description = "Film retrieved successfully", body = Film),
        (status = 404, description = "Film not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_film(
    AppPath(film_id): AppPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<film::Model>, ApiError> {
    let film_model = find_or_404::<film::Entity, _>(&state.db, film_id, "Film").await?;
    debug!("Found film: {}", film_model.name);
    Ok(Json(film_model))
}

/// Delete a film together with its favorites, cast, planets and vehicles links
#[utoipa::path(
    delete,
    path = "/film/{film_id}",
    tag = "films",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
    ),
    responses(
        (status = 200, description = "Film deleted successfully", body = MessageResponse),
        (status = 404, description = "Film not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_film(
    AppPath(film_id): AppPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_or_404::<film::Entity>(&state.db, film_id, "Film").await?;
    Ok(Json(MessageResponse::new("Film deleted")))
}
