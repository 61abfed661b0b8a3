use crate::schemas::{ErrorResponse, MsgErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::error;

/// Application-level error type.
///
/// Every handler failure ends up here and is rendered as a JSON body; store
/// failures never leak their details to the client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// `NotFound` with the conventional "<Kind> not found" message.
    pub fn not_found(kind: &str) -> Self {
        ApiError::NotFound(format!("{} not found", kind))
    }

    /// Map a unique-constraint violation to `Conflict`, anything else to `Database`.
    pub fn conflict_on_unique(err: DbErr, message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::Conflict(message.to_string()),
            _ => ApiError::Database(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Database(db_error) => {
                error!("Internal error: {}", db_error);
                "Internal server error".to_string()
            }
            ApiError::Internal(detail) => {
                error!("Internal error: {}", detail);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.public_message(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

/// An [`ApiError`] rendered with the `msg` key, as used by the favorite and
/// association routes.
#[derive(Debug)]
pub struct MsgError(pub ApiError);

impl From<ApiError> for MsgError {
    fn from(err: ApiError) -> Self {
        MsgError(err)
    }
}

impl From<DbErr> for MsgError {
    fn from(err: DbErr) -> Self {
        MsgError(ApiError::Database(err))
    }
}

impl IntoResponse for MsgError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = MsgErrorResponse {
            msg: self.0.public_message(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
