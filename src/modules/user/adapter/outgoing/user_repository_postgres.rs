use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};
use crate::user::application::domain::entities::{InProgress, TwoFactorSecret, User};
use crate::user::application::domain::state_machine::UserStatus;
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: UserModel) -> Result<User, UserRepositoryError> {
        let status: UserStatus = model
            .in_progress_status
            .parse()
            .map_err(UserRepositoryError::DatabaseError)?;

        Ok(User {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            provider_id: model.provider_id,
            nickname: model.nickname,
            tag: model.tag,
            picture: model.picture,
            in_progress: InProgress {
                status,
                code: model.in_progress_code,
            },
            two_factor_secret: TwoFactorSecret {
                secret: model.two_factor_secret,
                qrcode: model.two_factor_qrcode,
                active: model.two_factor_active,
            },
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }

    fn to_active_model(user: User) -> UserActiveModel {
        UserActiveModel {
            id: Set(user.id),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            provider_id: Set(user.provider_id),
            nickname: Set(user.nickname),
            tag: Set(user.tag),
            picture: Set(user.picture),
            in_progress_status: Set(user.in_progress.status.as_str().to_string()),
            in_progress_code: Set(user.in_progress.code),
            two_factor_active: Set(user.two_factor_secret.active),
            two_factor_secret: Set(user.two_factor_secret.secret),
            two_factor_qrcode: Set(user.two_factor_secret.qrcode),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }

    fn db_error(e: DbErr) -> UserRepositoryError {
        UserRepositoryError::DatabaseError(e.to_string())
    }

    async fn find_one(
        &self,
        query: sea_orm::Select<UserEntity>,
    ) -> Result<Option<User>, UserRepositoryError> {
        query
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?
            .map(Self::to_domain)
            .transpose()
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        self.find_one(UserEntity::find_by_id(user_id)).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        self.find_one(UserEntity::find().filter(UserColumn::Email.eq(email)))
            .await
    }

    async fn find_by_nickname_and_tag(
        &self,
        nickname: &str,
        tag: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        self.find_one(
            UserEntity::find()
                .filter(UserColumn::Nickname.eq(nickname))
                .filter(UserColumn::Tag.eq(tag)),
        )
        .await
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        UserEntity::find()
            .order_by_asc(UserColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::db_error)?
            .into_iter()
            .map(Self::to_domain)
            .collect()
    }

    async fn insert(&self, user: User) -> Result<User, UserRepositoryError> {
        let inserted = Self::to_active_model(user)
            .insert(&*self.db)
            .await
            .map_err(|e| {
                let err_str = e.to_string().to_lowercase();
                if err_str.contains("23505")
                    || err_str.contains("duplicate key")
                    || err_str.contains("unique constraint")
                {
                    return UserRepositoryError::UserAlreadyExists;
                }
                Self::db_error(e)
            })?;

        Self::to_domain(inserted)
    }

    async fn update(&self, user: User) -> Result<User, UserRepositoryError> {
        let updated = Self::to_active_model(user)
            .update(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => UserRepositoryError::UserNotFound,
                other => Self::db_error(other),
            })?;

        Self::to_domain(updated)
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(Self::db_error)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(status: &str) -> UserModel {
        let now = Utc::now();
        UserModel {
            id: Uuid::new_v4(),
            email: "gimli@erebor.me".to_string(),
            password_hash: "hash".to_string(),
            provider_id: None,
            nickname: "gimli".to_string(),
            tag: "#0420".to_string(),
            picture: None,
            in_progress_status: status.to_string(),
            in_progress_code: "AXE123".to_string(),
            two_factor_active: false,
            two_factor_secret: None,
            two_factor_qrcode: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_maps_model() {
        let row = model("wait_to_confirm");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let user = repo.find_by_id(row.id).await.unwrap().unwrap();

        assert_eq!(user.id, row.id);
        assert_eq!(user.in_progress.status, UserStatus::WaitToConfirm);
        assert_eq!(user.in_progress.code, "AXE123");
        assert!(!user.two_factor_secret.active);
    }

    #[tokio::test]
    async fn test_unknown_status_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("sleeping")]])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let result = repo.find_by_email("gimli@erebor.me").await;

        assert!(matches!(result, Err(UserRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_insert_duplicate_email() {
        let row = model("wait_to_confirm");
        let user = UserRepositoryPostgres::to_domain(row).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint".to_string(),
            )])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let result = repo.insert(user).await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_update_returns_stored_row() {
        let mut row = model("done");
        row.in_progress_code = String::new();
        let user = UserRepositoryPostgres::to_domain(row.clone()).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let updated = repo.update(user).await.unwrap();

        assert_eq!(updated.in_progress.status, UserStatus::Done);
        assert!(updated.in_progress.code.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }
}
