use async_trait::async_trait;
use uuid::Uuid;

use super::UserError;
use crate::user::application::domain::state_machine::Flow;

#[derive(Debug, Clone, PartialEq)]
pub struct RequestVerificationCommand {
    pub user_id: Option<Uuid>,
    pub email: Option<String>,
    pub flow: Flow,
}

/// Issues a fresh code for `flow` and emails it.
#[async_trait]
pub trait RequestVerificationUseCase: Send + Sync {
    async fn execute(&self, command: RequestVerificationCommand) -> Result<(), UserError>;
}
