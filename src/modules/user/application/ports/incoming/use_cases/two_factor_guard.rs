use async_trait::async_trait;
use uuid::Uuid;

use super::UserError;

/// Demands a valid one-time password from accounts with two-factor enabled.
#[async_trait]
pub trait TwoFactorGuard: Send + Sync {
    async fn authenticate(&self, user_id: Uuid, token: Option<String>) -> Result<(), UserError>;
}
