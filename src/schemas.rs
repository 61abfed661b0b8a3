use model::entities::{film, people, planet, user, vehicle};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

/// Error response of the catalog routes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub message: String,
    /// HTTP status code
    pub status: u16,
}

/// Error response of the favorite and film association routes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MsgErrorResponse {
    /// Error message
    pub msg: String,
    /// HTTP status code
    pub status: u16,
}

/// Plain confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
        }
    }
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// One routed endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
}

/// Every endpoint served by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct SitemapResponse {
    pub endpoints: Vec<EndpointInfo>,
}

/// Favorites of one user, grouped by kind
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteLists {
    #[schema(value_type = Vec<People>)]
    pub people: Vec<people::Model>,
    #[schema(value_type = Vec<Film>)]
    pub film: Vec<film::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoritesResponse {
    pub user_id: i32,
    pub favorite: FavoriteLists,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::sitemap::sitemap,
        crate::handlers::health::health_check,
        crate::handlers::users::create_user,
        crate::handlers::users::get_users,
        crate::handlers::users::get_user,
        crate::handlers::users::delete_user,
        crate::handlers::people::create_people,
        crate::handlers::people::get_people,
        crate::handlers::people::get_people_by_id,
        crate::handlers::people::delete_people,
        crate::handlers::films::create_film,
        crate::handlers::films::get_films,
        crate::handlers::films::get_film,
        crate::handlers::films::delete_film,
        crate::handlers::planets::create_planet,
        crate::handlers::planets::get_planets,
        crate::handlers::planets::get_planet,
        crate::handlers::planets::delete_planet,
        crate::handlers::vehicles::create_vehicle,
        crate::handlers::vehicles::get_vehicles,
        crate::handlers::vehicles::get_vehicle,
        crate::handlers::vehicles::delete_vehicle,
        crate::handlers::favorites::missing_user_id,
        crate::handlers::favorites::get_user_favorites,
        crate::handlers::favorites::add_favorite_people,
        crate::handlers::favorites::add_favorite_film,
        crate::handlers::favorites::remove_favorite_people,
        crate::handlers::favorites::remove_favorite_film,
        crate::handlers::film_links::get_film_people,
        crate::handlers::film_links::get_film_planets,
        crate::handlers::film_links::get_film_vehicles,
        crate::handlers::film_links::add_film_people,
        crate::handlers::film_links::add_film_planet,
        crate::handlers::film_links::add_film_vehicle,
        crate::handlers::film_links::remove_film_people,
        crate::handlers::film_links::remove_film_planet,
        crate::handlers::film_links::remove_film_vehicle,
    ),
    components(
        schemas(
            user::Model,
            people::Model,
            film::Model,
            planet::Model,
            vehicle::Model,
            crate::handlers::users::CreateUserRequest,
            crate::handlers::people::CreatePeopleRequest,
            crate::handlers::films::CreateFilmRequest,
            crate::handlers::planets::CreatePlanetRequest,
            crate::handlers::vehicles::CreateVehicleRequest,
            ErrorResponse,
            MsgErrorResponse,
            MessageResponse,
            HealthResponse,
            EndpointInfo,
            SitemapResponse,
            FavoriteLists,
            FavoritesResponse,
        )
    ),
    tags(
        (name = "sitemap", description = "Endpoint listing"),
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "people", description = "Character catalog endpoints"),
        (name = "films", description = "Film catalog endpoints"),
        (name = "planets", description = "Planet catalog endpoints"),
        (name = "vehicles", description = "Vehicle catalog endpoints"),
        (name = "favorites", description = "User favorite people and films"),
        (name = "film links", description = "People, planets and vehicles linked to films"),
    ),
    info(
        title = "Holocron API",
        description = "Catalog of Star Wars characters, films, planets and vehicles with user favorites",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
