use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::Lore;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
///
/// Every listing returns rows ordered by `date_modified` descending.
#[async_trait]
pub trait LoreRepository: Send + Sync {
    /// Load lore by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Lore>>;
    /// All lore.
    async fn find_all(&self) -> anyhow::Result<Vec<Lore>>;
    /// All lore by the given author.
    async fn find_by_author(&self, author_id: Uuid) -> anyhow::Result<Vec<Lore>>;
    /// All lore whose title contains the given text, case-insensitively.
    async fn find_by_title(&self, needle: &str) -> anyhow::Result<Vec<Lore>>;
    /// Insert fully-formed domain lore.
    ///
    /// Service computes id/timestamps/validation; repo persists.
    async fn insert(&self, lore: Lore) -> anyhow::Result<()>;
    /// Update existing lore (by primary key in `lore.id`).
    async fn update(&self, lore: Lore) -> anyhow::Result<()>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    /// Delete everything the given author wrote.
    async fn delete_by_author(&self, author_id: Uuid) -> anyhow::Result<()>;
}
