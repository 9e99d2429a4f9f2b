use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::UserError;

/// Returned once, right after a secret is generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoFactorResponse {
    pub active: bool,
    pub qrcode: String,
}

#[async_trait]
pub trait ActivateTwoFactorUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<TwoFactorResponse, UserError>;
}

#[async_trait]
pub trait ResetTwoFactorUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, code: Option<String>)
        -> Result<TwoFactorResponse, UserError>;
}
