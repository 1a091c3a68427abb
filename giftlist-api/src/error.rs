use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use giftlist_core::{ReserveError, StoreError};

use crate::session::AuthError;

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    ValidationError(String),
    NotFoundError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::AuthenticationError("Invalid credentials".to_string())
            }
            AuthError::InvalidOrExpiredToken => {
                AppError::AuthenticationError("Invalid or expired session".to_string())
            }
            AuthError::Encoding(err) => {
                AppError::InternalServerError(format!("Token encoding failed: {}", err))
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFoundError("Present not found".to_string()),
            StoreError::AlreadyReserved => {
                AppError::ValidationError("Present is already reserved".to_string())
            }
            StoreError::Backend(source) => {
                AppError::InternalServerError(format!("Store failure: {}", source))
            }
        }
    }
}

impl From<ReserveError> for AppError {
    fn from(err: ReserveError) -> Self {
        match err {
            ReserveError::InvalidCode => {
                AppError::ValidationError("Invalid reservation code".to_string())
            }
            ReserveError::NotFound => AppError::NotFoundError("Present not found".to_string()),
            ReserveError::AlreadyReserved => {
                AppError::ValidationError("Present is already reserved".to_string())
            }
            ReserveError::Store(err) => err.into(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalServerError(format!("Filesystem failure: {}", err))
    }
}
