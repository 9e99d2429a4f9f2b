use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::{register_user::UserDetailsPayload, UserError};
use crate::shared::reference_list::ReferenceMethod;
use crate::user::application::domain::entities::{GameInfo, GameInfoTarget, UserView};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[validate(length(min = 1, max = 32))]
    pub nickname: Option<String>,
    #[validate(length(max = 120))]
    pub picture: Option<String>,
    #[validate(nested)]
    pub details: Option<UserDetailsPayload>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGameInfoCommand {
    pub user_id: Uuid,
    pub info_id: String,
    pub target: GameInfoTarget,
    pub operation: ReferenceMethod,
}

#[async_trait]
pub trait GetUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserView>, UserError>;
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserView, UserError>;
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, payload: serde_json::Value)
        -> Result<UserView, UserError>;
}

#[async_trait]
pub trait UpdateGameInfoUseCase: Send + Sync {
    async fn execute(&self, command: UpdateGameInfoCommand) -> Result<GameInfo, UserError>;
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), UserError>;
}
