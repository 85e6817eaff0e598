use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::LoreApi,
    error::LoreError,
    model::{NewLore, PopulatedLore},
};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the LoreApi trait that delegates to the domain service
pub struct LoreLocalClient {
    service: Arc<Service>,
}

impl LoreLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LoreApi for LoreLocalClient {
    async fn add_one(&self, new_lore: NewLore) -> anyhow::Result<PopulatedLore> {
        self.service
            .add_one(new_lore.author_id, &new_lore.title, &new_lore.content)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn find_one(&self, id: Uuid) -> anyhow::Result<Option<PopulatedLore>> {
        self.service
            .find_one(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<PopulatedLore>> {
        self.service
            .find_all()
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn find_all_by_username(&self, username: &str) -> anyhow::Result<Vec<PopulatedLore>> {
        self.service
            .find_all_by_username(username)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn find_all_by_title(&self, title: &str) -> anyhow::Result<Vec<PopulatedLore>> {
        self.service
            .find_all_by_title(title)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn update_one(&self, id: Uuid, content: &str) -> anyhow::Result<PopulatedLore> {
        self.service
            .update_one(id, content)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn delete_one(&self, id: Uuid) -> anyhow::Result<bool> {
        self.service
            .delete_one(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn delete_by_author(&self, author_id: Uuid) -> anyhow::Result<()> {
        self.service
            .delete_by_author(author_id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::LoreNotFound { id } => LoreError::not_found(id),
        DomainError::UnknownAuthor { username } => LoreError::unknown_author(username),
        DomainError::AuthorNotFound { id } => {
            LoreError::validation(format!("Author {} does not exist", id))
        }
        DomainError::EmptyTitle => {
            LoreError::validation("Lore title must be at least one character long")
        }
        DomainError::EmptyContent => {
            LoreError::validation("Lore content must be at least one character long")
        }
        DomainError::Database { .. } => LoreError::internal(),
    };

    anyhow::Error::new(contract_error)
}
