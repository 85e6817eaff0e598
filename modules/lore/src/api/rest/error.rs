use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// JSON error body used by every failed request: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Terminal error response produced by guards and handlers.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Map domain errors to terminal responses
pub fn map_domain_error(e: &DomainError) -> ApiError {
    match e {
        DomainError::LoreNotFound { id } => {
            ApiError::not_found(format!("Lore with lore ID {id} does not exist."))
        }
        DomainError::UnknownAuthor { username } => {
            ApiError::not_found(format!("A user with username {username} does not exist."))
        }
        DomainError::AuthorNotFound { .. } => {
            ApiError::forbidden("You must be logged in to complete this action.")
        }
        DomainError::EmptyTitle => {
            ApiError::bad_request("Lore title must be at least one character long.")
        }
        DomainError::EmptyContent => {
            ApiError::bad_request("Lore content must be at least one character long.")
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            ApiError::internal("An internal database error occurred.")
        }
    }
}
