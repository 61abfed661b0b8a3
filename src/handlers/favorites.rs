//! A user's favorite characters and films.
//!
//! These routes answer with `{"msg": ...}` bodies, including their errors.

use crate::error::{ApiError, MsgError};
use crate::extractors::AppPath;
use crate::handlers::common::{add_link, list_links, remove_link, LinkLabels};
use crate::schemas::{AppState, FavoriteLists, FavoritesResponse, MessageResponse, MsgErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::{favorite_film, people_favorite};
use tracing::{info, instrument, trace, warn};

const FAVORITE_PEOPLE: LinkLabels = LinkLabels {
    left: "User",
    right: "People",
    added: "People added",
    duplicate: "People already in favorites",
    removed: "Favorite removed",
};

const FAVORITE_FILM: LinkLabels = LinkLabels {
    left: "User",
    right: "Film",
    added: "Film added",
    duplicate: "Film already in favorites",
    removed: "Favorite removed",
};

/// Favorites without a user id
///
/// There is no current-user notion, so the caller has to name the user.
#[utoipa::path(
    get,
    path = "/user/favorite",
    tag = "favorites",
    responses(
        (status = 400, description = "A user id is required", body = MsgErrorResponse)
    )
)]
#[instrument]
pub async fn missing_user_id() -> MsgError {
    warn!("Favorites requested without a user id");
    ApiError::Validation("A user id is required: use /user/{user_id}/favorite".to_string()).into()
}

/// Get the favorite characters and films of a user
#[utoipa::path(
    get,
    path = "/user/{user_id}/favorite",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Favorites retrieved successfully", body = FavoritesResponse),
        (status = 404, description = "User not found", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn get_user_favorites(
    path: Result<AppPath<i32>, ApiError>,
    State(state): State<AppState>,
) -> Result<Json<FavoritesResponse>, MsgError> {
    let AppPath(user_id) = path?;
    trace!("Fetching favorites for user {}", user_id);

    let people = list_links::<people_favorite::Entity>(&state.db, user_id, "User").await?;
    let film = list_links::<favorite_film::Entity>(&state.db, user_id, "User").await?;

    info!(
        "User {} has {} favorite people and {} favorite films",
        user_id,
        people.len(),
        film.len()
    );
    Ok(Json(FavoritesResponse {
        user_id,
        favorite: FavoriteLists { people, film },
    }))
}

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorite/people/{people_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("people_id" = i32, Path, description = "People ID"),
    ),
    responses(
        (status = 201, description = "People added", body = MessageResponse),
        (status = 404, description = "User or people not found", body = MsgErrorResponse),
        (status = 409, description = "People already in favorites", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn add_favorite_people(
    path: Result<AppPath<(i32, i32)>, ApiError>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MessageResponse>), MsgError> {
    let AppPath((user_id, people_id)) = path?;
    add_link::<people_favorite::Entity>(&state.db, user_id, people_id, FAVORITE_PEOPLE).await
}

/// Add a film to a user's favorites
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorite/film/{film_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("film_id" = i32, Path, description = "Film ID"),
    ),
    responses(
        (status = 201, description = "Film added", body = MessageResponse),
        (status = 404, description = "User or film not found", body = MsgErrorResponse),
        (status = 409, description = "Film already in favorites", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn add_favorite_film(
    path: Result<AppPath<(i32, i32)>, ApiError>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MessageResponse>), MsgError> {
    let AppPath((user_id, film_id)) = path?;
    add_link::<favorite_film::Entity>(&state.db, user_id, film_id, FAVORITE_FILM).await
}

/// Remove a character from a user's favorites
///
/// Removing a character that is not a favorite succeeds as well.
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorite/people/{people_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("people_id" = i32, Path, description = "People ID"),
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 404, description = "User not found", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn remove_favorite_people(
    path: Result<AppPath<(i32, i32)>, ApiError>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, MsgError> {
    let AppPath((user_id, people_id)) = path?;
    remove_link::<people_favorite::Entity>(&state.db, user_id, people_id, FAVORITE_PEOPLE).await
}

/// Remove a film from a user's favorites
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorite/film/{film_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("film_id" = i32, Path, description = "Film ID"),
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 404, description = "User not found", body = MsgErrorResponse),
        (status = 500, description = "Internal server error", body = MsgErrorResponse)
    )
)]
#[instrument(skip(state, path))]
pub async fn remove_favorite_film(
    path: Result<AppPath<(i32, i32)>, ApiError>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, MsgError> {
    let AppPath((user_id, film_id)) = path?;
    remove_link::<favorite_film::Entity>(&state.db, user_id, film_id, FAVORITE_FILM).await
}
