//! Hand-written fakes for the user module's collaborator ports.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier, VerificationCodeMessage,
};
use crate::tests::support::user_fixtures::stub_hash;
use crate::user::application::ports::outgoing::{
    HashError, OtpAuthenticator, OtpEnrollment, OtpError, PasswordHasher, TokenClaims,
    TokenError, TokenProvider,
};

pub const VALID_OTP: &str = "424242";
pub const ENROLLED_SECRET: &str = "JBSWY3DPEHPK3PXP";

#[derive(Clone, Default)]
pub struct StubPasswordHasher;

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(stub_hash(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(stub_hash(password) == hash)
    }
}

/// Accepts [`VALID_OTP`] for any secret and enrolls [`ENROLLED_SECRET`].
#[derive(Clone, Default)]
pub struct StubOtpAuthenticator;

impl OtpAuthenticator for StubOtpAuthenticator {
    fn enroll(&self, account: &str) -> Result<OtpEnrollment, OtpError> {
        Ok(OtpEnrollment {
            secret: ENROLLED_SECRET.to_string(),
            qrcode: format!("otpauth://totp/TableRise:{}", account),
        })
    }

    fn verify(&self, _secret: &str, token: &str) -> Result<bool, OtpError> {
        Ok(token == VALID_OTP)
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<VerificationCodeMessage>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<VerificationCodeMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Dispatch happens on a spawned task, so give it a chance to run.
    pub async fn wait_for(&self, count: usize) -> Vec<VerificationCodeMessage> {
        for _ in 0..50 {
            if self.sent.lock().unwrap().len() >= count {
                break;
            }
            tokio::task::yield_now().await;
        }
        self.sent()
    }
}

#[async_trait]
impl UserEmailNotifier for RecordingNotifier {
    async fn send_verification_code(
        &self,
        message: VerificationCodeMessage,
    ) -> Result<(), UserEmailNotificationError> {
        self.sent.lock().unwrap().push(message);
        if self.fail {
            return Err(UserEmailNotificationError::EmailSendingFailed(
                "smtp down".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tokens are `token-<uuid>` and `token-unverified-<uuid>`.
#[derive(Clone, Default)]
pub struct StubTokenProvider;

impl StubTokenProvider {
    pub fn token_for(user_id: Uuid) -> String {
        format!("token-{}", user_id)
    }

    pub fn unverified_token_for(user_id: Uuid) -> String {
        format!("token-unverified-{}", user_id)
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(
        &self,
        user_id: Uuid,
        is_verified: bool,
    ) -> Result<String, TokenError> {
        Ok(if is_verified {
            Self::token_for(user_id)
        } else {
            Self::unverified_token_for(user_id)
        })
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (raw_id, is_verified) = match token.strip_prefix("token-unverified-") {
            Some(rest) => (rest, false),
            None => (
                token
                    .strip_prefix("token-")
                    .ok_or(TokenError::MalformedToken)?,
                true,
            ),
        };
        let sub = Uuid::parse_str(raw_id).map_err(|_| TokenError::MalformedToken)?;
        let now = Utc::now().timestamp();

        Ok(TokenClaims {
            sub,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
            is_verified,
        })
    }
}
