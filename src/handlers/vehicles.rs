use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};
use crate::handlers::common::{delete_or_404, find_or_404, list_all};
use crate::schemas::{AppState, ErrorResponse, MessageResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{NaiveDate, Utc};
use model::entities::vehicle;
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub model: String,
    #[validate(length(min = 1, max = 50))]
    pub vehicles_class: String,
    #[validate(length(max = 100))]
    pub created: Option<String>,
    pub edited: Option<NaiveDate>,
}

/// Create a new vehicle
#[utoipa::path(
    post,
    path = "/vehicle",
    tag = "vehicles",
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Vehicle created successfully", body = Vehicle),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state), fields(name = %request.name))]
pub async fn create_vehicle(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<vehicle::Model>), ApiError> {
    trace!("Entering create_vehicle function");
    let now = Utc::now();

    let new_vehicle = vehicle::ActiveModel {
        name: Set(request.name),
        model: Set(request.model),
        vehicles_class: Set(request.vehicles_class),
        created: Set(request.created.unwrap_or_else(|| now.to_rfc3339())),
        edited: Set(request.edited.unwrap_or_else(|| now.date_naive())),
        ..Default::default()
    };

    let vehicle_model = new_vehicle.insert(&state.db).await.map_err(|db_error| {
        error!("Failed to create vehicle: {}", db_error);
        ApiError::from(db_error)
    })?;

    info!("Vehicle created successfully with ID: {}", vehicle_model.id);
    Ok((StatusCode::CREATED, Json(vehicle_model)))
}

/// Get all vehicles
#[utoipa::path(
    get,
    path = "/vehicle",
    tag = "vehicles",
    responses(
        (status = 200, description = "Vehicles retrieved successfully", body = Vec<Vehicle>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<Json<Vec<vehicle::Model>>, ApiError> {
    trace!("Entering get_vehicles function");
    let vehicles = list_all::<vehicle::Entity, _>(&state.db, "Vehicle").await?;
    info!("Successfully retrieved {} vehicles", vehicles.len());
    Ok(Json(vehicles))
}

/// Get a specific vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicle/{vehicle_id}",
    tag = "vehicles",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 200, description = "Vehicle retrieved successfully", body = Vehicle),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_vehicle(
    AppPath(vehicle_id): AppPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<vehicle::Model>, ApiError> {
    let vehicle_model = find_or_404::<vehicle::Entity, _>(&state.db, vehicle_id, "Vehicle").await?;
    Ok(Json(vehicle_model))
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/vehicle/{vehicle_id}",
    tag = "vehicles",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 200, description = "Vehicle deleted successfully", body = MessageResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_vehicle(
    AppPath(vehicle_id): AppPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_or_404::<vehicle::Entity>(&state.db, vehicle_id, "Vehicle").await?;
    Ok(Json(MessageResponse::new("Vehicle deleted")))
}
