use crate::user::application::domain::state_machine::Flow;

#[derive(Debug, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// A one-time code addressed to an account holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCodeMessage {
    pub email: String,
    pub nickname: String,
    pub code: String,
    pub flow: Flow,
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_code(
        &self,
        message: VerificationCodeMessage,
    ) -> Result<(), UserEmailNotificationError>;
}
