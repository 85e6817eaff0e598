use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::{NewUser, User};

/// Public API trait for the users module that other modules can use
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Look up a user by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    /// Look up a user by username.
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;

    /// Batch lookup by ids, in no particular order.
    async fn find_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<User>>;

    /// Create a new user record.
    async fn create_user(&self, new_user: NewUser) -> anyhow::Result<User>;
}
