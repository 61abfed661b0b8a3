use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};
use crate::handlers::common::{delete_or_404, find_or_404, list_all};
use crate::schemas::{AppState, ErrorResponse, MessageResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{NaiveDate, Utc};
use model::entities::planet;
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a new planet. Physical attributes are free text
/// ("unknown" is a common value).
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreatePlanetRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub diameter: String,
    #[validate(length(min = 1, max = 50))]
    pub climate: String,
    #[validate(length(min = 1, max = 50))]
    pub terrain: String,
    #[validate(length(min = 1, max = 50))]
    pub surface_water: String,
    #[validate(length(max = 100))]
    pub created: Option<String>,
    pub edited: Option<NaiveDate>,
}

/// Create a new planet
#[utoipa::path(
    post,
    path = "/planet",
    tag = "planets",
    request_body = CreatePlanetRequest,
    responses(
        (status = 201, description = "Planet created successfully", body = Planet),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state), fields(name = %request.name))]
pub async fn create_planet(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<planet::Model>), ApiError> {
    trace!("Entering create_planet function");
    let now = Utc::now();

    let new_planet = planet::ActiveModel {
        name: Set(request.name),
        diameter: Set(request.diameter),
        climate: Set(request.climate),
        terrain: Set(request.terrain),
        surface_water: Set(request.surface_water),
        created: Set(request.created.unwrap_or_else(|| now.to_rfc3339())),
        edited: Set(request.edited.unwrap_or_else(|| now.date_naive())),
        ..Default::default()
    };

    match new_planet.insert(&state.db).await {
        Ok(planet_model) => {
            info!("Planet created successfully with ID: {}", planet_model.id);
            Ok((StatusCode::CREATED, Json(planet_model)))
        }
        Err(db_error) => {
            error!("Failed to create planet: {}", db_error);
            Err(db_error.into())
        }
    }
}

/// Get all planets
#[utoipa::path(
    get,
    path = "/planet",
    tag = "planets",
    responses(
        (status = 200, description = "Planets retrieved successfully", body = Vec<Planet>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_planets(State(state): State<AppState>) -> Result<Json<Vec<planet::Model>>, ApiError> {
    let planets = list_all::<planet::Entity, _>(&state.db, "Planet").await?;
    info!("Successfully retrieved {} planets", planets.len());
    Ok(Json(planets))
}

/// Get a specific planet by ID
#[utoipa::path(
    get,
    path = "/planet/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet retrieved successfully", body = Planet),
        (status = 404, description = "Planet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_planet(
    AppPath(planet_id): AppPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<planet::Model>, ApiError> {
    let planet_model = find_or_404::<planet::Entity, _>(&state.db, planet_id, "Planet").await?;
    Ok(Json(planet_model))
}

/// Delete a planet
#[utoipa::path(
    delete,
    path = "/planet/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet deleted successfully", body = MessageResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_planet(
    AppPath(planet_id): AppPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_or_404::<planet::Entity>(&state.db, planet_id, "Planet").await?;
    Ok(Json(MessageResponse::new("Planet deleted")))
}
