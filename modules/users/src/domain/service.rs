use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{NewUser, User};
use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;

/// Domain service for user records.
/// Depends only on the repository port, not on infra types.
///
/// Session issuance and credential handling live outside this module;
/// this service only manages the user records the rest of the system
/// references.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "users.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        let user = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))?;
        debug!("Successfully retrieved user");
        Ok(user)
    }

    #[instrument(name = "users.service.get_users_by_ids", skip(self, ids))]
    pub async fn get_users_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError> {
        self.repo
            .find_by_ids(ids)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(name = "users.service.get_user_by_username", skip(self))]
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, DomainError> {
        self.repo
            .find_by_username(username)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::unknown_username(username))
    }

    #[instrument(
        name = "users.service.create_user",
        skip(self),
        fields(username = %new_user.username)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        let username = new_user.username.trim().to_string();
        if username.is_empty() {
            return Err(DomainError::empty_username());
        }

        if self
            .repo
            .username_exists(&username)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            return Err(DomainError::username_already_exists(username));
        }

        let user = User {
            id: Uuid::new_v4(),
            username,
            date_joined: Utc::now(),
        };

        self.repo
            .insert(user.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }
}
