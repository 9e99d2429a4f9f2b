use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogEntities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogEntities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CatalogEntities::EntityType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogEntities::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(CatalogEntities::En).json_binary().not_null())
                    .col(ColumnDef::new(CatalogEntities::Pt).json_binary().not_null())
                    .col(
                        ColumnDef::new(CatalogEntities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CatalogEntities::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing filters on (entity_type, active)
        manager
            .create_index(
                Index::create()
                    .name("idx_catalog_entities_type_active")
                    .table(CatalogEntities::Table)
                    .col(CatalogEntities::EntityType)
                    .col(CatalogEntities::Active)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_catalog_entities_updated_at
                BEFORE UPDATE ON catalog_entities
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_catalog_entities_updated_at ON catalog_entities",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CatalogEntities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CatalogEntities {
    Table,
    Id,
    EntityType,
    Active,
    En,
    Pt,
    CreatedAt,
    UpdatedAt,
}
