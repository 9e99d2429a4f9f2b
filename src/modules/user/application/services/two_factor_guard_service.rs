use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::user::application::ports::incoming::use_cases::{TwoFactorGuard, UserError};
use crate::user::application::ports::outgoing::{OtpAuthenticator, UserRepository};

pub struct TwoFactorGuardService<R>
where
    R: UserRepository,
{
    users: R,
    otp: Arc<dyn OtpAuthenticator>,
}

impl<R> TwoFactorGuardService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, otp: Arc<dyn OtpAuthenticator>) -> Self {
        Self { users, otp }
    }
}

#[async_trait]
impl<R> TwoFactorGuard for TwoFactorGuardService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn authenticate(&self, user_id: Uuid, token: Option<String>) -> Result<(), UserError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound)?;

        let Some(secret) = user.two_factor_secret.configured_secret().map(str::to_owned) else {
            debug!(%user_id, "Two factor not configured, skipping");
            return Ok(());
        };

        let token = token.ok_or(UserError::QueryString)?;

        // The QR payload is only shown once; drop it on first use.
        if user.two_factor_secret.qrcode.take().is_some() {
            self.users.update(user).await?;
        }

        if !self.otp.verify(&secret, &token)? {
            warn!(%user_id, "Two factor code rejected");
            return Err(UserError::TwoFactorIncorrect);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::{StubOtpAuthenticator, VALID_OTP};
    use crate::tests::support::in_memory::InMemoryUserStore;
    use crate::tests::support::user_fixtures::{done_user, with_two_factor};
    use crate::user::application::domain::entities::TwoFactorSecret;
    use crate::user::application::ports::outgoing::{OtpEnrollment, OtpError};
    use mockall::mock;

    mock! {
        pub Otp {}
        impl OtpAuthenticator for Otp {
            fn enroll(&self, account: &str) -> Result<OtpEnrollment, OtpError>;
            fn verify(&self, secret: &str, token: &str) -> Result<bool, OtpError>;
        }
    }

    fn guard(store: &InMemoryUserStore) -> TwoFactorGuardService<InMemoryUserStore> {
        TwoFactorGuardService::new(store.clone(), Arc::new(StubOtpAuthenticator))
    }

    #[tokio::test]
    async fn test_passes_without_configured_secret() {
        let user = done_user();
        let store = InMemoryUserStore::new().with_user(user.clone());

        let mut otp = MockOtp::new();
        otp.expect_verify().never();
        let guard = TwoFactorGuardService::new(store.clone(), Arc::new(otp));

        assert!(guard.authenticate(user.id, None).await.is_ok());
        assert_eq!(store.user_writes(), 0);
    }

    #[tokio::test]
    async fn test_inactive_leftover_secret_is_ignored() {
        let mut user = done_user();
        user.two_factor_secret = TwoFactorSecret {
            secret: Some("LEFTOVER".to_string()),
            qrcode: None,
            active: false,
        };
        let store = InMemoryUserStore::new().with_user(user.clone());

        assert!(guard(&store).authenticate(user.id, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_token_is_query_string_error() {
        let user = with_two_factor(done_user(), "SECRET");
        let store = InMemoryUserStore::new().with_user(user.clone());

        let result = guard(&store).authenticate(user.id, None).await;
        assert!(matches!(result, Err(UserError::QueryString)));
    }

    #[tokio::test]
    async fn test_first_use_strips_qrcode_once() {
        let user = with_two_factor(done_user(), "SECRET");
        let store = InMemoryUserStore::new().with_user(user.clone());
        let guard = guard(&store);

        guard
            .authenticate(user.id, Some(VALID_OTP.to_string()))
            .await
            .unwrap();
        guard
            .authenticate(user.id, Some(VALID_OTP.to_string()))
            .await
            .unwrap();

        let stored = store.user(user.id).unwrap();
        assert!(stored.two_factor_secret.qrcode.is_none());
        assert_eq!(stored.two_factor_secret.secret.as_deref(), Some("SECRET"));
        assert_eq!(store.user_writes(), 1);
    }

    #[tokio::test]
    async fn test_wrong_token_is_rejected() {
        let user = with_two_factor(done_user(), "SECRET");
        let store = InMemoryUserStore::new().with_user(user.clone());

        let result = guard(&store)
            .authenticate(user.id, Some("000000".to_string()))
            .await;
        assert!(matches!(result, Err(UserError::TwoFactorIncorrect)));
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let store = InMemoryUserStore::new();
        let result = guard(&store).authenticate(Uuid::new_v4(), None).await;
        assert!(matches!(result, Err(UserError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_secret_is_forwarded_to_verifier() {
        let user = with_two_factor(done_user(), "MYSECRET");
        let store = InMemoryUserStore::new().with_user(user.clone());

        let mut otp = MockOtp::new();
        otp.expect_verify()
            .withf(|secret, token| secret == "MYSECRET" && token == "123456")
            .times(1)
            .returning(|_, _| Ok(true));
        let guard = TwoFactorGuardService::new(store, Arc::new(otp));

        assert!(guard
            .authenticate(user.id, Some("123456".to_string()))
            .await
            .is_ok());
    }
}
