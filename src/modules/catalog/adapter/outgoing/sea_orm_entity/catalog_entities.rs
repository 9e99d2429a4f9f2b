use sea_orm::entity::prelude::*;

/// One row per catalog document; `entity_type` holds the route segment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "catalog_entities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub entity_type: String,
    pub active: bool,
    #[sea_orm(column_type = "JsonBinary")]
    pub en: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub pt: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
