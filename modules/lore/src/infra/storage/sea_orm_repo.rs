//! SeaORM-backed repository implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait`, so it can be constructed with a
//! `DatabaseConnection` or a transactional connection.

use anyhow::Context;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::contract::model::Lore;
use crate::domain::repo::LoreRepository;
use crate::infra::storage::entity::{ActiveModel as LoreAM, Column, Entity as LoreEntity};
use crate::infra::storage::mapper::entity_to_contract;

pub struct SeaOrmLoreRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmLoreRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> LoreRepository for SeaOrmLoreRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Lore>> {
        let found = LoreEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(entity_to_contract))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Lore>> {
        let rows = LoreEntity::find()
            .order_by_desc(Column::DateModified)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        Ok(rows.into_iter().map(entity_to_contract).collect())
    }

    async fn find_by_author(&self, author_id: Uuid) -> anyhow::Result<Vec<Lore>> {
        let rows = LoreEntity::find()
            .filter(Column::AuthorId.eq(author_id))
            .order_by_desc(Column::DateModified)
            .all(&self.conn)
            .await
            .context("find_by_author failed")?;
        Ok(rows.into_iter().map(entity_to_contract).collect())
    }

    async fn find_by_title(&self, needle: &str) -> anyhow::Result<Vec<Lore>> {
        // LIKE is case-sensitive on some backends; fold both sides.
        let pattern = format!("%{}%", needle.to_lowercase());
        let rows = LoreEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Title))).like(pattern))
            .order_by_desc(Column::DateModified)
            .all(&self.conn)
            .await
            .context("find_by_title failed")?;
        Ok(rows.into_iter().map(entity_to_contract).collect())
    }

    async fn insert(&self, lore: Lore) -> anyhow::Result<()> {
        let m = LoreAM {
            id: Set(lore.id),
            author_id: Set(lore.author_id),
            date_created: Set(lore.date_created),
            title: Set(lore.title),
            content: Set(lore.content),
            date_modified: Set(lore.date_modified),
        };
        let _ = m.insert(&self.conn).await.context("insert failed")?;
        Ok(())
    }

    async fn update(&self, lore: Lore) -> anyhow::Result<()> {
        let m = LoreAM {
            id: Set(lore.id),
            author_id: Set(lore.author_id),
            date_created: Set(lore.date_created),
            title: Set(lore.title),
            content: Set(lore.content),
            date_modified: Set(lore.date_modified),
        };
        let _ = m.update(&self.conn).await.context("update failed")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = LoreEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_by_author(&self, author_id: Uuid) -> anyhow::Result<()> {
        LoreEntity::delete_many()
            .filter(Column::AuthorId.eq(author_id))
            .exec(&self.conn)
            .await
            .context("delete_by_author failed")?;
        Ok(())
    }
}
