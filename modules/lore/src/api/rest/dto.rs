use serde::{Deserialize, Serialize};

use crate::api::rest::format::format_date;
use crate::contract::model::PopulatedLore;

/// Client-facing lore representation.
///
/// Field names match the original wire contract; the internal author
/// reference is replaced by the author's username, and no storage
/// metadata leaks through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoreResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub author: String,
    pub title: String,
    #[serde(rename = "dateCreated")]
    pub date_created: String,
    pub content: String,
    #[serde(rename = "dateModified")]
    pub date_modified: String,
}

/// REST DTO for creating new lore
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoreReq {
    pub title: String,
    pub content: String,
}

/// REST DTO for updating lore content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLoreReq {
    pub content: String,
}

/// Success envelope for mutations that return the affected record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoreEnvelope {
    pub message: String,
    pub lore: LoreResponse,
}

/// Success envelope for mutations without a record payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

/// REST DTO for list query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ListLoreQuery {
    pub title: Option<String>,
}

impl From<PopulatedLore> for LoreResponse {
    fn from(populated: PopulatedLore) -> Self {
        Self {
            id: populated.lore.id.to_string(),
            author: populated.author.username,
            title: populated.lore.title,
            date_created: format_date(populated.lore.date_created),
            content: populated.lore.content.trim().to_string(),
            date_modified: format_date(populated.lore.date_modified),
        }
    }
}
