use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::{NewLore, PopulatedLore};

/// Public API trait for the lore module that other modules can use
#[async_trait]
pub trait LoreApi: Send + Sync {
    /// Create new lore; both timestamps are stamped with the same instant.
    async fn add_one(&self, new_lore: NewLore) -> anyhow::Result<PopulatedLore>;

    /// Find lore by id, author resolved.
    async fn find_one(&self, id: Uuid) -> anyhow::Result<Option<PopulatedLore>>;

    /// All lore, most recently modified first.
    async fn find_all(&self) -> anyhow::Result<Vec<PopulatedLore>>;

    /// All lore by the author with the given username.
    async fn find_all_by_username(&self, username: &str) -> anyhow::Result<Vec<PopulatedLore>>;

    /// All lore whose title contains the given text, case-insensitively.
    async fn find_all_by_title(&self, title: &str) -> anyhow::Result<Vec<PopulatedLore>>;

    /// Overwrite the content of existing lore and advance `date_modified`.
    async fn update_one(&self, id: Uuid, content: &str) -> anyhow::Result<PopulatedLore>;

    /// Delete lore by id. Returns whether a record was actually deleted.
    async fn delete_one(&self, id: Uuid) -> anyhow::Result<bool>;

    /// Delete all lore by the given author (cascade support).
    async fn delete_by_author(&self, author_id: Uuid) -> anyhow::Result<()>;
}
