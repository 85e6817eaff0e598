use crate::contract::model::User;
use crate::infra::storage::entity::Model as UserEntity;

/// Convert a database entity to a contract model
pub fn entity_to_contract(entity: UserEntity) -> User {
    User {
        id: entity.id,
        username: entity.username,
        date_joined: entity.date_joined,
    }
}
