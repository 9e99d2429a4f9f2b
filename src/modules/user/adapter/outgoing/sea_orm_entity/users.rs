use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    #[sea_orm(nullable)]
    pub provider_id: Option<String>,
    #[sea_orm(column_type = "Text", string_len = 32)]
    pub nickname: String,
    #[sea_orm(column_type = "Text", string_len = 5)]
    pub tag: String,
    #[sea_orm(nullable)]
    pub picture: Option<String>,
    pub in_progress_status: String,
    pub in_progress_code: String,
    pub two_factor_active: bool,
    #[sea_orm(nullable)]
    pub two_factor_secret: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub two_factor_qrcode: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_details::Entity")]
    UserDetails,
}

impl Related<super::user_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
