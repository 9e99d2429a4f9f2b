use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::user::application::domain::entities::{InProgress, TwoFactorSecret, User};
use crate::user::application::domain::state_machine::{self, Flow, UserStatus};
use crate::user::application::ports::incoming::use_cases::{
    ActivateTwoFactorUseCase, EmailCodeGuard, ResetTwoFactorUseCase, TwoFactorResponse, UserError,
    VerifyEmailCodeRequest,
};
use crate::user::application::ports::outgoing::{OtpAuthenticator, UserRepository};

/// Generates a secret for `user`, stores it and returns the one-time QR payload.
async fn enroll<R>(
    users: &R,
    otp: &dyn OtpAuthenticator,
    mut user: User,
    status: UserStatus,
) -> Result<TwoFactorResponse, UserError>
where
    R: UserRepository,
{
    let enrollment = otp.enroll(&user.email)?;

    user.two_factor_secret =
        TwoFactorSecret::activated(enrollment.secret, enrollment.qrcode.clone());
    user.in_progress = InProgress::settle(status);
    user.updated_at = Utc::now();
    users.update(user).await?;

    Ok(TwoFactorResponse {
        active: true,
        qrcode: enrollment.qrcode,
    })
}

pub struct ActivateTwoFactorService<R>
where
    R: UserRepository,
{
    users: R,
    otp: Arc<dyn OtpAuthenticator>,
}

impl<R> ActivateTwoFactorService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, otp: Arc<dyn OtpAuthenticator>) -> Self {
        Self { users, otp }
    }
}

#[async_trait]
impl<R> ActivateTwoFactorUseCase for ActivateTwoFactorService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<TwoFactorResponse, UserError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserInexistent)?;

        if user.in_progress.status != UserStatus::Done {
            warn!(%user_id, status = %user.in_progress.status, "Two factor activation rejected");
            return Err(UserError::InvalidUserStatus);
        }
        if user.two_factor_secret.active {
            return Err(UserError::TwoFactorAlreadyActive);
        }

        let response = enroll(&self.users, self.otp.as_ref(), user, UserStatus::Done).await?;
        info!(%user_id, "Two factor activated");
        Ok(response)
    }
}

pub struct ResetTwoFactorService<R>
where
    R: UserRepository,
{
    users: R,
    otp: Arc<dyn OtpAuthenticator>,
    guard: Arc<dyn EmailCodeGuard>,
}

impl<R> ResetTwoFactorService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, otp: Arc<dyn OtpAuthenticator>, guard: Arc<dyn EmailCodeGuard>) -> Self {
        Self { users, otp, guard }
    }
}

#[async_trait]
impl<R> ResetTwoFactorUseCase for ResetTwoFactorService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        code: Option<String>,
    ) -> Result<TwoFactorResponse, UserError> {
        let flow = Flow::ResetTwoFactor;

        // Rejected before the guard so the pending code stays usable.
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserInexistent)?;
        if !user.two_factor_secret.active {
            warn!(%user_id, "Two factor reset requested without active two factor");
            return Err(UserError::TwoFactorNoActive);
        }

        self.guard
            .verify(VerifyEmailCodeRequest {
                user_id: Some(user_id),
                email: None,
                code,
                flow,
            })
            .await?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserInexistent)?;

        let done = state_machine::complete(flow, user.in_progress.status)?;
        let response = enroll(&self.users, self.otp.as_ref(), user, done).await?;
        info!(%user_id, "Two factor secret reset");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::{StubOtpAuthenticator, ENROLLED_SECRET};
    use crate::tests::support::in_memory::InMemoryUserStore;
    use crate::tests::support::user_fixtures::{done_user, user_with_status, with_two_factor};
    use crate::user::application::services::EmailCodeGuardService;

    fn activate(store: &InMemoryUserStore) -> ActivateTwoFactorService<InMemoryUserStore> {
        ActivateTwoFactorService::new(store.clone(), Arc::new(StubOtpAuthenticator))
    }

    fn reset(store: &InMemoryUserStore) -> ResetTwoFactorService<InMemoryUserStore> {
        ResetTwoFactorService::new(
            store.clone(),
            Arc::new(StubOtpAuthenticator),
            Arc::new(EmailCodeGuardService::new(store.clone(), store.clone())),
        )
    }

    #[tokio::test]
    async fn test_activation_stores_secret_and_returns_qrcode() {
        let user = done_user();
        let store = InMemoryUserStore::new().with_user(user.clone());

        let response = activate(&store).execute(user.id).await.unwrap();

        assert!(response.active);
        assert!(response.qrcode.starts_with("otpauth://"));
        let stored = store.user(user.id).unwrap();
        assert!(stored.two_factor_secret.active);
        assert_eq!(stored.two_factor_secret.secret.as_deref(), Some(ENROLLED_SECRET));
        assert_eq!(stored.two_factor_secret.qrcode, Some(response.qrcode));
    }

    #[tokio::test]
    async fn test_activation_twice_is_rejected() {
        let user = with_two_factor(done_user(), "SECRET");
        let store = InMemoryUserStore::new().with_user(user.clone());

        let result = activate(&store).execute(user.id).await;

        assert!(matches!(result, Err(UserError::TwoFactorAlreadyActive)));
    }

    #[tokio::test]
    async fn test_activation_requires_done_status() {
        let user = user_with_status(UserStatus::WaitToConfirm, "ABC123");
        let store = InMemoryUserStore::new().with_user(user.clone());

        let result = activate(&store).execute(user.id).await;

        assert!(matches!(result, Err(UserError::InvalidUserStatus)));
        assert_eq!(store.user_writes(), 0);
    }

    #[tokio::test]
    async fn test_reset_regenerates_secret_and_finishes_flow() {
        let user = with_two_factor(
            user_with_status(UserStatus::WaitToStartResetTwoFactor, "RST123"),
            "OLDSECRET",
        );
        let store = InMemoryUserStore::new().with_user(user.clone());

        let response = reset(&store)
            .execute(user.id, Some("RST123".to_string()))
            .await
            .unwrap();

        assert!(response.active);
        let stored = store.user(user.id).unwrap();
        assert_eq!(stored.in_progress.status, UserStatus::Done);
        assert_eq!(stored.two_factor_secret.secret.as_deref(), Some(ENROLLED_SECRET));
    }

    #[tokio::test]
    async fn test_reset_without_two_factor_keeps_pending_code() {
        let user = user_with_status(UserStatus::WaitToStartResetTwoFactor, "RST123");
        let store = InMemoryUserStore::new().with_user(user.clone());

        let result = reset(&store)
            .execute(user.id, Some("RST123".to_string()))
            .await;

        assert!(matches!(result, Err(UserError::TwoFactorNoActive)));
        let stored = store.user(user.id).unwrap();
        assert_eq!(stored.in_progress.status, UserStatus::WaitToStartResetTwoFactor);
        assert_eq!(stored.in_progress.code, "RST123");
        assert_eq!(store.user_writes(), 0);
    }

    #[tokio::test]
    async fn test_reset_with_wrong_code_changes_nothing() {
        let user = with_two_factor(
            user_with_status(UserStatus::WaitToStartResetTwoFactor, "RST123"),
            "OLDSECRET",
        );
        let store = InMemoryUserStore::new().with_user(user.clone());

        let result = reset(&store)
            .execute(user.id, Some("XXXXXX".to_string()))
            .await;

        assert!(matches!(result, Err(UserError::InvalidEmailVerifyCode)));
        assert_eq!(store.user(user.id).unwrap(), user);
    }
}
