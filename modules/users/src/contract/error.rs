use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone)]
pub enum UsersError {
    #[error("A user with username '{username}' does not exist")]
    UnknownUsername { username: String },

    #[error("User not found: {id}")]
    NotFound { id: Uuid },

    #[error("User with username '{username}' already exists")]
    Conflict { username: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl UsersError {
    pub fn unknown_username(username: impl Into<String>) -> Self {
        Self::UnknownUsername {
            username: username.into(),
        }
    }

    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn conflict(username: impl Into<String>) -> Self {
        Self::Conflict {
            username: username.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
