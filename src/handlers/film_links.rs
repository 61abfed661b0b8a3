//! Cast, planets and vehicles appearing in a film.

use crate::error::{ApiError, MsgError};
use crate::extractors::AppPath;
use crate::handlers::common::{add_link, list_links, remove_link, LinkLabels};
use crate::schemas::{AppState, MessageResponse, MsgErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::{film_planet, film_vehicle, people, people_film, planet, vehicle};
use tracing::{info, instrument};

const FILM_PEOPLE: LinkLabels = LinkLabels {
    left: "Film",
    right: "People",
    added: "People added to film",
    duplicate: "People already in film",
    removed: "People removed from film",
};

const FILM_PLANET: LinkLabels = LinkLabels {
    left: "Film",
    right: "Planet",
    added: "Planet added to film",
    duplicate: "Planet already in film",
    removed: "Planet removed from film",
};

const FILM_VEHICLE: LinkLabels = LinkLabels {
    left: "Film",
    right: "Vehicle",
    added: "Vehicle added to film",
    duplicate: "Vehicle already in film",
    removed: "Vehicle removed from film",
};

/// List the characters appearing in a film
#[utoipa::path(
    get,
    path = "/film/{film_id}/people",
    tag = "film links",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
    ),
    responses(
        (status = 200, description = "Cast retrieved successfully", body = Vec<People>),
        (status = 404, description = "Film not found", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn get_film_people(
    path: Result<AppPath<i32>, ApiError>,
    State(state): State<AppState>,
) -> Result<Json<Vec<people::Model>>, MsgError> {
    let AppPath(film_id) = path?;
    let cast = list_links::<people_film::Entity>(&state.db, film_id, "Film").await?;
    info!("Film {} has {} people", film_id, cast.len());
    Ok(Json(cast))
}

/// List the planets shown in a film
#[utoipa::path(
    get,
    path = "/film/{film_id}/planet",
    tag = "film links",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
    ),
    responses(
        (status = 200, description = "Planets retrieved successfully", body = Vec<Planet>),
        (status = 404, description = "Film not found", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn get_film_planets(
    path: Result<AppPath<i32>, ApiError>,
    State(state): State<AppState>,
) -> Result<Json<Vec<planet::Model>>, MsgError> {
    let AppPath(film_id) = path?;
    let planets = list_links::<film_planet::Entity>(&state.db, film_id, "Film").await?;
    info!("Film {} has {} planets", film_id, planets.len());
    Ok(Json(planets))
}

/// List the vehicles used in a film
#[utoipa::path(
    get,
    path = "/film/{film_id}/vehicle",
    tag = "film links",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
    ),
    responses(
        (status = 200, description = "Vehicles retrieved successfully", body = Vec<Vehicle>),
        (status = 404, description = "Film not found", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn get_film_vehicles(
    path: Result<AppPath<i32>, ApiError>,
    State(state): State<AppState>,
) -> Result<Json<Vec<vehicle::Model>>, MsgError> {
    let AppPath(film_id) = path?;
    let vehicles = list_links::<film_vehicle::Entity>(&state.db, film_id, "Film").await?;
    info!("Film {} has {} vehicles", film_id, vehicles.len());
    Ok(Json(vehicles))
}

/// Add a character to a film's cast
#[utoipa::path(
    post,
    path = "/film/{film_id}/people/{people_id}",
    tag = "film links",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
        ("people_id" = i32, Path, description = "People ID"),
    ),
    responses(
        (status = 201, description = "People added to film", body = MessageResponse),
        (status = 404, description = "Film or people not found", body = MsgErrorResponse),
        (status = 409, description = "People already in film", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn add_film_people(
    path: Result<AppPath<(i32, i32)>, ApiError>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MessageResponse>), MsgError> {
    let AppPath((film_id, people_id)) = path?;
    add_link::<people_film::Entity>(&state.db, film_id, people_id, FILM_PEOPLE).await
}

/// Add a planet to a film
#[utoipa::path(
    post,
    path = "/film/{film_id}/planet/{planet_id}",
    tag = "film links",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 201, description = "Planet added to film", body = MessageResponse),
        (status = 404, description = "Film or planet not found", body = MsgErrorResponse),
        (status = 409, description = "Planet already in film", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn add_film_planet(
    path: Result<AppPath<(i32, i32)>, ApiError>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MessageResponse>), MsgError> {
    let AppPath((film_id, planet_id)) = path?;
    add_link::<film_planet::Entity>(&state.db, film_id, planet_id, FILM_PLANET).await
}

/// Add a vehicle to a film
#[utoipa::path(
    post,
    path = "/film/{film_id}/vehicle/{vehicle_id}",
    tag = "film links",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 201, description = "Vehicle added to film", body = MessageResponse),
        (status = 404, description = "Film or vehicle not found", body = MsgErrorResponse),
        (status = 409, description = "Vehicle already in film", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn add_film_vehicle(
    path: Result<AppPath<(i32, i32)>, ApiError>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MessageResponse>), MsgError> {
    let AppPath((film_id, vehicle_id)) = path?;
    add_link::<film_vehicle::Entity>(&state.db, film_id, vehicle_id, FILM_VEHICLE).await
}

/// Remove a character from a film's cast
#[utoipa::path(
    delete,
    path = "/film/{film_id}/people/{people_id}",
    tag = "film links",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
        ("people_id" = i32, Path, description = "People ID"),
    ),
    responses(
        (status = 200, description = "People removed from film", body = MessageResponse),
        (status = 404, description = "Film not found", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn remove_film_people(
    path: Result<AppPath<(i32, i32)>, ApiError>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, MsgError> {
    let AppPath((film_id, people_id)) = path?;
    remove_link::<people_film::Entity>(&state.db, film_id, people_id, FILM_PEOPLE).await
}

/// Remove a planet from a film
#[utoipa::path(
    delete,
    path = "/film/{film_id}/planet/{planet_id}",
    tag = "film links",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet removed from film", body = MessageResponse),
        (status = 404, description = "Film not found", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn remove_film_planet(
    path: Result<AppPath<(i32, i32)>, ApiError>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, MsgError> {
    let AppPath((film_id, planet_id)) = path?;
    remove_link::<film_planet::Entity>(&state.db, film_id, planet_id, FILM_PLANET).await
}

/// Remove a vehicle from a film
#[utoipa::path(
    delete,
    path = "/film/{film_id}/vehicle/{vehicle_id}",
    tag = "film links",
    params(
        ("film_id" = i32, Path, description = "Film ID"),
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 200, description = "Vehicle removed from film", body = MessageResponse),
        (status = 404, description = "Film not found", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn remove_film_vehicle(
    path: Result<AppPath<(i32, i32)>, ApiError>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, MsgError> {
    let AppPath((film_id, vehicle_id)) = path?;
    remove_link::<film_vehicle::Entity>(&state.db, film_id, vehicle_id, FILM_VEHICLE).await
}
