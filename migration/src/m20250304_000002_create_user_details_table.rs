use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserDetails::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserDetails::FirstName).string_len(100).null())
                    .col(ColumnDef::new(UserDetails::LastName).string_len(100).null())
                    .col(ColumnDef::new(UserDetails::Pronoun).string_len(32).null())
                    .col(ColumnDef::new(UserDetails::Birthday).string_len(10).null())
                    .col(ColumnDef::new(UserDetails::Biography).text().null())
                    .col(
                        ColumnDef::new(UserDetails::Role)
                            .string_len(16)
                            .not_null()
                            .default("user"),
                    )
                    .col(ColumnDef::new(UserDetails::SecretQuestion).json_binary().null())
                    .col(
                        ColumnDef::new(UserDetails::GameInfo)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust(
                                r#"'{"campaigns":[],"characters":[],"badges":[]}'::jsonb"#,
                            )),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_details_user_id")
                            .from(UserDetails::Table, UserDetails::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserDetails {
    Table,
    UserId,
    FirstName,
    LastName,
    Pronoun,
    Birthday,
    Biography,
    Role,
    SecretQuestion,
    GameInfo,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
