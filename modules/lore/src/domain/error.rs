use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Lore not found: {id}")]
    LoreNotFound { id: Uuid },

    #[error("A user with username '{username}' does not exist")]
    UnknownAuthor { username: String },

    #[error("Author not found: {id}")]
    AuthorNotFound { id: Uuid },

    #[error("Lore title must be at least one character long")]
    EmptyTitle,

    #[error("Lore content must be at least one character long")]
    EmptyContent,

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn lore_not_found(id: Uuid) -> Self {
        Self::LoreNotFound { id }
    }

    pub fn unknown_author(username: impl Into<String>) -> Self {
        Self::UnknownAuthor {
            username: username.into(),
        }
    }

    pub fn author_not_found(id: Uuid) -> Self {
        Self::AuthorNotFound { id }
    }

    pub fn empty_title() -> Self {
        Self::EmptyTitle
    }

    pub fn empty_content() -> Self {
        Self::EmptyContent
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
