use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::user_details::{
    ActiveModel as DetailActiveModel, Entity as DetailEntity, Model as DetailModel,
};
use crate::user::application::domain::entities::{Role, UserDetail};
use crate::user::application::ports::outgoing::{
    UserDetailsRepository, UserDetailsRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserDetailsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

fn db_error(e: impl std::fmt::Display) -> UserDetailsRepositoryError {
    UserDetailsRepositoryError::DatabaseError(e.to_string())
}

impl UserDetailsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: DetailModel) -> Result<UserDetail, UserDetailsRepositoryError> {
        let role = match model.role.as_str() {
            "admin" => Role::Admin,
            "user" => Role::User,
            other => return Err(db_error(format!("Unknown role: {}", other))),
        };
        let secret_question = model
            .secret_question
            .map(serde_json::from_value)
            .transpose()
            .map_err(db_error)?;
        let game_info = serde_json::from_value(model.game_info).map_err(db_error)?;

        Ok(UserDetail {
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            pronoun: model.pronoun,
            birthday: model.birthday,
            biography: model.biography,
            role,
            secret_question,
            game_info,
        })
    }

    fn to_active_model(
        detail: UserDetail,
    ) -> Result<DetailActiveModel, UserDetailsRepositoryError> {
        let secret_question = detail
            .secret_question
            .map(serde_json::to_value)
            .transpose()
            .map_err(db_error)?;
        let game_info = serde_json::to_value(detail.game_info).map_err(db_error)?;

        Ok(DetailActiveModel {
            user_id: Set(detail.user_id),
            first_name: Set(detail.first_name),
            last_name: Set(detail.last_name),
            pronoun: Set(detail.pronoun),
            birthday: Set(detail.birthday),
            biography: Set(detail.biography),
            role: Set(detail.role.as_str().to_string()),
            secret_question: Set(secret_question),
            game_info: Set(game_info),
        })
    }
}

#[async_trait]
impl UserDetailsRepository for UserDetailsRepositoryPostgres {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserDetail>, UserDetailsRepositoryError> {
        DetailEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(Self::to_domain)
            .transpose()
    }

    async fn insert(&self, detail: UserDetail) -> Result<UserDetail, UserDetailsRepositoryError> {
        let inserted = Self::to_active_model(detail)?
            .insert(&*self.db)
            .await
            .map_err(db_error)?;
        Self::to_domain(inserted)
    }

    async fn update(&self, detail: UserDetail) -> Result<UserDetail, UserDetailsRepositoryError> {
        let updated = Self::to_active_model(detail)?
            .update(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => UserDetailsRepositoryError::NotFound,
                other => db_error(other),
            })?;
        Self::to_domain(updated)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<(), UserDetailsRepositoryError> {
        DetailEntity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(())
    }
}
