use crate::contract::model::Lore;
use crate::infra::storage::entity::Model as LoreEntity;

/// Convert a database entity to a contract model
pub fn entity_to_contract(entity: LoreEntity) -> Lore {
    Lore {
        id: entity.id,
        author_id: entity.author_id,
        date_created: entity.date_created,
        title: entity.title,
        content: entity.content,
        date_modified: entity.date_modified,
    }
}
