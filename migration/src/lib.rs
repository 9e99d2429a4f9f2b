pub use sea_orm_migration::prelude::*;

mod m20250304_000001_create_users_table;
mod m20250304_000002_create_user_details_table;
mod m20250310_000001_create_catalog_entities_table;
mod m20250310_000002_create_systems_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_000001_create_users_table::Migration),
            Box::new(m20250304_000002_create_user_details_table::Migration),
            Box::new(m20250310_000001_create_catalog_entities_table::Migration),
            Box::new(m20250310_000002_create_systems_table::Migration),
        ]
    }
}
