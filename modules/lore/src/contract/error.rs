use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone)]
pub enum LoreError {
    #[error("Lore not found: {id}")]
    NotFound { id: Uuid },

    #[error("A user with username '{username}' does not exist")]
    UnknownAuthor { username: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl LoreError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn unknown_author(username: impl Into<String>) -> Self {
        Self::UnknownAuthor {
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
