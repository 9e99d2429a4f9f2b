use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::UserError;
use crate::user::application::domain::state_machine::UserStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmCodeResponse {
    pub status: UserStatus,
}

#[async_trait]
pub trait ConfirmCodeUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, code: Option<String>)
        -> Result<ConfirmCodeResponse, UserError>;
}
