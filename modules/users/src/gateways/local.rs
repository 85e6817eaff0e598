use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::UsersApi,
    error::UsersError,
    model::{NewUser, User},
};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the UsersApi trait that delegates to the domain service
pub struct UsersLocalClient {
    service: Arc<Service>,
}

impl UsersLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersApi for UsersLocalClient {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        match self.service.get_user(id).await {
            Ok(user) => Ok(Some(user)),
            Err(DomainError::UserNotFound { .. }) => Ok(None),
            Err(e) => Err(map_domain_error_to_anyhow(e)),
        }
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        match self.service.get_user_by_username(username).await {
            Ok(user) => Ok(Some(user)),
            Err(DomainError::UnknownUsername { .. }) => Ok(None),
            Err(e) => Err(map_domain_error_to_anyhow(e)),
        }
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<User>> {
        self.service
            .get_users_by_ids(ids)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn create_user(&self, new_user: NewUser) -> anyhow::Result<User> {
        self.service
            .create_user(new_user)
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::UserNotFound { id } => UsersError::not_found(id),
        DomainError::UnknownUsername { username } => UsersError::unknown_username(username),
        DomainError::UsernameAlreadyExists { username } => UsersError::conflict(username),
        DomainError::EmptyUsername => UsersError::validation("Username cannot be empty"),
        DomainError::Database { .. } => UsersError::internal(),
    };

    anyhow::Error::new(contract_error)
}
