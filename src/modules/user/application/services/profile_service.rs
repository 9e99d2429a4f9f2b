use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

use super::register_user_service::secret_question;
use crate::shared::validation::Schema;
use crate::user::application::domain::entities::{GameInfo, UserDetail, UserView};
use crate::user::application::ports::incoming::use_cases::{
    DeleteUserUseCase, GetUserUseCase, GetUsersUseCase, UpdateGameInfoCommand,
    UpdateGameInfoUseCase, UpdateProfilePayload, UpdateProfileUseCase, UserError,
};
use crate::user::application::ports::outgoing::{UserDetailsRepository, UserRepository};

/// Read and profile-management operations. None of them touch `inProgress`.
pub struct ProfileService<R, D>
where
    R: UserRepository,
    D: UserDetailsRepository,
{
    users: R,
    details: D,
}

impl<R, D> ProfileService<R, D>
where
    R: UserRepository,
    D: UserDetailsRepository,
{
    pub fn new(users: R, details: D) -> Self {
        Self { users, details }
    }
}

#[async_trait]
impl<R, D> GetUsersUseCase for ProfileService<R, D>
where
    R: UserRepository + Send + Sync,
    D: UserDetailsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<UserView>, UserError> {
        let users = self.users.find_all().await?;

        let mut details: HashMap<Uuid, UserDetail> = HashMap::with_capacity(users.len());
        for user in &users {
            if let Some(detail) = self.details.find_by_user_id(user.id).await? {
                details.insert(user.id, detail);
            }
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let detail = details.remove(&user.id);
                UserView::new(user, detail)
            })
            .collect())
    }
}

#[async_trait]
impl<R, D> GetUserUseCase for ProfileService<R, D>
where
    R: UserRepository + Send + Sync,
    D: UserDetailsRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserView, UserError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserInexistent)?;
        let detail = self.details.find_by_user_id(user_id).await?;

        Ok(UserView::new(user, detail))
    }
}

#[async_trait]
impl<R, D> UpdateProfileUseCase for ProfileService<R, D>
where
    R: UserRepository + Send + Sync,
    D: UserDetailsRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        payload: serde_json::Value,
    ) -> Result<UserView, UserError> {
        let payload = UpdateProfilePayload::from_payload(payload)?;

        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserInexistent)?;

        if let Some(nickname) = payload.nickname {
            user.nickname = nickname;
        }
        if payload.picture.is_some() {
            user.picture = payload.picture;
        }
        user.updated_at = Utc::now();
        let user = self.users.update(user).await?;

        let existing = self.details.find_by_user_id(user_id).await?;
        let detail = match payload.details {
            Some(patch) => {
                let is_new = existing.is_none();
                let mut detail = existing.unwrap_or_else(|| UserDetail::empty(user_id));
                if patch.secret_question.is_some() {
                    detail.secret_question = secret_question(patch.secret_question)?;
                }
                detail.first_name = patch.first_name.or(detail.first_name);
                detail.last_name = patch.last_name.or(detail.last_name);
                detail.pronoun = patch.pronoun.or(detail.pronoun);
                detail.birthday = patch.birthday.or(detail.birthday);
                detail.biography = patch.biography.or(detail.biography);

                Some(if is_new {
                    self.details.insert(detail).await?
                } else {
                    self.details.update(detail).await?
                })
            }
            None => existing,
        };

        info!(%user_id, "Profile updated");
        Ok(UserView::new(user, detail))
    }
}

#[async_trait]
impl<R, D> UpdateGameInfoUseCase for ProfileService<R, D>
where
    R: UserRepository + Send + Sync,
    D: UserDetailsRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateGameInfoCommand) -> Result<GameInfo, UserError> {
        let mut detail = self
            .details
            .find_by_user_id(command.user_id)
            .await?
            .ok_or(UserError::UserInexistent)?;

        command
            .operation
            .apply(detail.game_info.list_mut(command.target), &command.info_id);
        let detail = self.details.update(detail).await?;

        info!(
            user_id = %command.user_id,
            target = ?command.target,
            operation = %command.operation,
            "Game info updated"
        );
        Ok(detail.game_info)
    }
}

#[async_trait]
impl<R, D> DeleteUserUseCase for ProfileService<R, D>
where
    R: UserRepository + Send + Sync,
    D: UserDetailsRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), UserError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(UserError::UserInexistent);
        }

        self.details.delete_by_user_id(user_id).await?;
        self.users.delete(user_id).await?;

        info!(%user_id, "User deleted");
        Ok(())
    }
}
