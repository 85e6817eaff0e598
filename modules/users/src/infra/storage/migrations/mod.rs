use sea_orm_migration::prelude::*;

mod initial_001;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(initial_001::Migration)]
    }

    // Each module owns its own migration history so that independent migrators
    // sharing one database connection do not collide on a single tracking table.
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("seaql_migrations_users").into_iden()
    }
}
