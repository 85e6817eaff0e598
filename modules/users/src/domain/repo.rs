use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::User;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Load a user by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    /// Load a user by username.
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
    /// Load several users by id at once.
    async fn find_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<User>>;
    /// Check uniqueness by username.
    async fn username_exists(&self, username: &str) -> anyhow::Result<bool>;
    /// Insert a fully-formed domain user.
    ///
    /// Service computes id/timestamps/validation; repo persists.
    async fn insert(&self, u: User) -> anyhow::Result<()>;
}
