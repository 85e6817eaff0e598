use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lore::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Lore::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Lore::AuthorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Lore::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Lore::Title).text().not_null())
                    .col(ColumnDef::new(Lore::Content).text().not_null())
                    .col(
                        ColumnDef::new(Lore::DateModified)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lore_author")
                            .from(Lore::Table, Lore::AuthorId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lore_author_id")
                    .table(Lore::Table)
                    .col(Lore::AuthorId)
                    .to_owned(),
            )
            .await?;

        // Every listing sorts on date_modified.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lore_date_modified")
                    .table(Lore::Table)
                    .col(Lore::DateModified)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lore {
    Table,
    Id,
    AuthorId,
    DateCreated,
    Title,
    Content,
    DateModified,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
