use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::user::application::domain::entities::{
    AccountSecurityMethod, InProgress, User, VerificationContext,
};
use crate::user::application::domain::state_machine;
use crate::user::application::ports::incoming::use_cases::{
    EmailCodeGuard, UserError, VerifyEmailCodeRequest,
};
use crate::user::application::ports::outgoing::{UserDetailsRepository, UserRepository};

pub struct EmailCodeGuardService<R, D>
where
    R: UserRepository,
    D: UserDetailsRepository,
{
    users: R,
    details: D,
}

impl<R, D> EmailCodeGuardService<R, D>
where
    R: UserRepository,
    D: UserDetailsRepository,
{
    pub fn new(users: R, details: D) -> Self {
        Self { users, details }
    }

    async fn resolve_user(&self, request: &VerifyEmailCodeRequest) -> Result<User, UserError> {
        let found = match (request.user_id, request.email.as_deref()) {
            (Some(id), _) => self.users.find_by_id(id).await?,
            (None, Some(email)) => self.users.find_by_email(email).await?,
            (None, None) => {
                return Err(UserError::BadRequest(
                    "Neither id or email was provided to validate the email code".to_string(),
                ))
            }
        };

        found.ok_or(UserError::UserInexistent)
    }
}

#[async_trait]
impl<R, D> EmailCodeGuard for EmailCodeGuardService<R, D>
where
    R: UserRepository + Send + Sync,
    D: UserDetailsRepository + Send + Sync,
{
    async fn verify(
        &self,
        request: VerifyEmailCodeRequest,
    ) -> Result<VerificationContext, UserError> {
        let mut user = self.resolve_user(&request).await?;
        let flow = request.flow;

        let next_status = state_machine::verify(flow, user.in_progress.status).map_err(|e| {
            warn!(user_id = %user.id, error = %e, "Rejected verification code");
            UserError::from(e)
        })?;

        let code_matches = request
            .code
            .as_deref()
            .is_some_and(|code| user.in_progress.matches(code));
        if !code_matches {
            warn!(user_id = %user.id, %flow, "Verification code does not match");
            return Err(UserError::InvalidEmailVerifyCode);
        }

        user.in_progress = InProgress::settle(next_status);
        user.updated_at = Utc::now();
        let user = self.users.update(user).await?;

        let security_method = AccountSecurityMethod::of(&user);
        let secret_question = match security_method {
            AccountSecurityMethod::TwoFactor => None,
            AccountSecurityMethod::SecretQuestion => self
                .details
                .find_by_user_id(user.id)
                .await?
                .and_then(|detail| detail.secret_question)
                .map(|sq| sq.question),
        };

        info!(user_id = %user.id, %flow, status = %next_status, "Verification code accepted");

        Ok(VerificationContext {
            user_id: user.id,
            user_status: user.in_progress.status,
            account_security_method: security_method,
            secret_question,
            last_update: user.updated_at,
        })
    }
}
