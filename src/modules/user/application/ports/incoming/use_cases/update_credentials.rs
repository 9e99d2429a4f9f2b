use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::UserError;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEmailPayload {
    #[validate(required, email)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePasswordPayload {
    #[validate(required, length(min = 8, max = 16))]
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateEmailCommand {
    pub user_id: Uuid,
    pub code: Option<String>,
    pub payload: serde_json::Value,
}

/// The account is addressed by id when signed in, or by email when the
/// password was forgotten.
#[derive(Debug, Clone)]
pub struct UpdatePasswordCommand {
    pub user_id: Option<Uuid>,
    pub email: Option<String>,
    pub code: Option<String>,
    pub payload: serde_json::Value,
}

#[async_trait]
pub trait UpdateEmailUseCase: Send + Sync {
    async fn execute(&self, command: UpdateEmailCommand) -> Result<(), UserError>;
}

#[async_trait]
pub trait UpdatePasswordUseCase: Send + Sync {
    async fn execute(&self, command: UpdatePasswordCommand) -> Result<(), UserError>;
}
