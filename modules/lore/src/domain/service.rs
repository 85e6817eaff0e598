use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use users::contract::client::UsersApi;
use users::contract::model::User;
use uuid::Uuid;

use crate::contract::model::{Lore, PopulatedLore};
use crate::domain::error::DomainError;
use crate::domain::repo::LoreRepository;

/// Domain service with the business rules for lore.
/// Depends on the repository port and the users contract, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn LoreRepository>,
    users: Arc<dyn UsersApi>,
}

impl Service {
    pub fn new(repo: Arc<dyn LoreRepository>, users: Arc<dyn UsersApi>) -> Self {
        Self { repo, users }
    }

    #[instrument(
        name = "lore.service.add_one",
        skip(self, title, content),
        fields(author_id = %author_id)
    )]
    pub async fn add_one(
        &self,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<PopulatedLore, DomainError> {
        info!("Creating new lore");

        if title.trim().is_empty() {
            return Err(DomainError::empty_title());
        }
        if content.trim().is_empty() {
            return Err(DomainError::empty_content());
        }

        let author = self
            .users
            .find_by_id(author_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::author_not_found(author_id))?;

        // Title and content are stored as given; emptiness is judged on the
        // trimmed value only.
        let now = Utc::now();
        let lore = Lore {
            id: Uuid::new_v4(),
            author_id,
            date_created: now,
            title: title.to_string(),
            content: content.to_string(),
            date_modified: now,
        };

        self.repo
            .insert(lore.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully created lore with id={}", lore.id);
        Ok(PopulatedLore { lore, author })
    }

    /// Id format validation is the caller's precondition; an unparseable id
    /// never reaches this method.
    #[instrument(name = "lore.service.find_one", skip(self), fields(lore_id = %id))]
    pub async fn find_one(&self, id: Uuid) -> Result<Option<PopulatedLore>, DomainError> {
        let found = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        match found {
            Some(lore) => {
                let mut populated = self.populate(vec![lore]).await?;
                Ok(populated.pop())
            }
            None => Ok(None),
        }
    }

    #[instrument(name = "lore.service.find_all", skip(self))]
    pub async fn find_all(&self) -> Result<Vec<PopulatedLore>, DomainError> {
        let rows = self
            .repo
            .find_all()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!("Found {} lore records", rows.len());
        self.populate(rows).await
    }

    #[instrument(name = "lore.service.find_all_by_username", skip(self))]
    pub async fn find_all_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<PopulatedLore>, DomainError> {
        let author = self
            .users
            .find_by_username(username)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::unknown_author(username))?;

        let rows = self
            .repo
            .find_by_author(author.id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|lore| PopulatedLore {
                lore,
                author: author.clone(),
            })
            .collect())
    }

    #[instrument(name = "lore.service.find_all_by_title", skip(self))]
    pub async fn find_all_by_title(&self, needle: &str) -> Result<Vec<PopulatedLore>, DomainError> {
        let rows = self
            .repo
            .find_by_title(needle)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        self.populate(rows).await
    }

    /// Existence is the caller's precondition (confirmed by the guard layer);
    /// a missing id still fails cleanly with `LoreNotFound`.
    #[instrument(
        name = "lore.service.update_one",
        skip(self, content),
        fields(lore_id = %id)
    )]
    pub async fn update_one(&self, id: Uuid, content: &str) -> Result<PopulatedLore, DomainError> {
        info!("Updating lore");

        if content.trim().is_empty() {
            return Err(DomainError::empty_content());
        }

        let mut lore = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::lore_not_found(id))?;

        // Title never changes on this path.
        lore.content = content.to_string();
        lore.date_modified = Utc::now();

        self.repo
            .update(lore.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully updated lore");
        let mut populated = self.populate(vec![lore]).await?;
        populated
            .pop()
            .ok_or_else(|| DomainError::database("updated lore vanished during populate"))
    }

    #[instrument(name = "lore.service.delete_one", skip(self), fields(lore_id = %id))]
    pub async fn delete_one(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        info!(deleted, "Deleted lore");
        Ok(deleted)
    }

    /// Cascade support: called when an author's account is removed.
    #[instrument(
        name = "lore.service.delete_by_author",
        skip(self),
        fields(author_id = %author_id)
    )]
    pub async fn delete_by_author(&self, author_id: Uuid) -> Result<(), DomainError> {
        self.repo
            .delete_by_author(author_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        info!("Deleted all lore for author");
        Ok(())
    }

    /// Resolve author references for a batch of rows in one lookup.
    async fn populate(&self, rows: Vec<Lore>) -> Result<Vec<PopulatedLore>, DomainError> {
        let mut author_ids: Vec<Uuid> = rows.iter().map(|l| l.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors = self
            .users
            .find_by_ids(&author_ids)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        let by_id: HashMap<Uuid, User> = authors.into_iter().map(|u| (u.id, u)).collect();

        rows.into_iter()
            .map(|lore| {
                let author = by_id.get(&lore.author_id).cloned().ok_or_else(|| {
                    DomainError::database(format!(
                        "author {} missing for lore {}",
                        lore.author_id, lore.id
                    ))
                })?;
                Ok(PopulatedLore { lore, author })
            })
            .collect()
    }
}
