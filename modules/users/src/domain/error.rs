use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: Uuid },

    #[error("A user with username '{username}' does not exist")]
    UnknownUsername { username: String },

    #[error("User with username '{username}' already exists")]
    UsernameAlreadyExists { username: String },

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn user_not_found(id: Uuid) -> Self {
        Self::UserNotFound { id }
    }

    pub fn unknown_username(username: impl Into<String>) -> Self {
        Self::UnknownUsername {
            username: username.into(),
        }
    }

    pub fn username_already_exists(username: impl Into<String>) -> Self {
        Self::UsernameAlreadyExists {
            username: username.into(),
        }
    }

    pub fn empty_username() -> Self {
        Self::EmptyUsername
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
