use chrono::{DateTime, Utc};
use users::contract::model::User;
use uuid::Uuid;

/// Pure lore model for inter-module communication (no serde)
///
/// `date_modified >= date_created` always: both are stamped together on
/// creation and only `date_modified` moves afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lore {
    pub id: Uuid,
    pub author_id: Uuid,
    pub date_created: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub date_modified: DateTime<Utc>,
}

/// Data for creating new lore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLore {
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
}

/// Read-time projection: lore with its author reference resolved.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulatedLore {
    pub lore: Lore,
    pub author: User,
}
