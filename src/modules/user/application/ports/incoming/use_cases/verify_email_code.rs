use async_trait::async_trait;
use uuid::Uuid;

use super::UserError;
use crate::user::application::domain::{entities::VerificationContext, state_machine::Flow};

/// A code submitted for `flow`, identifying the account by id or, failing
/// that, by email.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyEmailCodeRequest {
    pub user_id: Option<Uuid>,
    pub email: Option<String>,
    pub code: Option<String>,
    pub flow: Flow,
}

/// Gate in front of every code-bearing operation.
#[async_trait]
pub trait EmailCodeGuard: Send + Sync {
    async fn verify(&self, request: VerifyEmailCodeRequest)
        -> Result<VerificationContext, UserError>;
}
