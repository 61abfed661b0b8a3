use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};
use crate::handlers::common::{delete_or_404, find_or_404, list_all};
use crate::helpers::password::hash_password;
use crate::schemas::{AppState, ErrorResponse, MessageResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::user;
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a new user
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    /// Username (must be unique)
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 50))]
    pub firstname: String,
    #[validate(length(min = 1, max = 50))]
    pub lastname: String,
    /// Email address (must be unique)
    #[validate(email, length(max = 120))]
    pub email: String,
    /// Plaintext password, stored as an Argon2 hash
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Defaults to true
    pub is_active: Option<bool>,
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Username or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<user::Model>), ApiError> {
    trace!("Entering create_user function");

    let password = hash_password(&request.password).map_err(|e| {
        error!("Failed to hash password: {}", e);
        ApiError::Internal(format!("Password hash error: {}", e))
    })?;

    let new_user = user::ActiveModel {
        username: Set(request.username.clone()),
        firstname: Set(request.firstname),
        lastname: Set(request.lastname),
        email: Set(request.email),
        password: Set(password),
        is_active: Set(request.is_active.unwrap_or(true)),
        ..Default::default()
    };

    let txn = state.db.begin().await?;
    trace!("Attempting to insert new user into database");
    let user_model = new_user.insert(&txn).await.map_err(|db_error| {
        error!("Failed to create user '{}': {}", request.username, db_error);
        ApiError::conflict_on_unique(db_error, "Username or email already exists")
    })?;
    txn.commit().await?;

    info!(
        "User created successfully with ID: {}, username: {}",
        user_model.id, user_model.username
    );
    Ok((StatusCode::CREATED, Json(user_model)))
}

/// Get all users
#[utoipa::path(
    get,
    path = "/user",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<user::Model>>, ApiError> {
    trace!("Entering get_users function");
    let users = list_all::<user::Entity, _>(&state.db, "User").await?;
    info!("Successfully retrieved {} users", users.len());
    Ok(Json(users))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/user/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    AppPath(user_id): AppPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<user::Model>, ApiError> {
    let user_model = find_or_404::<user::Entity, _>(&state.db, user_id, "User").await?;
    debug!("Found user: {}", user_model.username);
    Ok(Json(user_model))
}

/// Delete a user together with all of their favorites
#[utoipa::path(
    delete,
    path = "/user/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_user(
    AppPath(user_id): AppPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_or_404::<user::Entity>(&state.db, user_id, "User").await?;
    Ok(Json(MessageResponse::new("User deleted")))
}
