use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::notify::dispatch_verification_code;
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotifier, VerificationCodeMessage,
};
use crate::shared::validation::Schema;
use crate::user::application::domain::codes::{generate_tag, generate_verification_code};
use crate::user::application::domain::entities::{
    InProgress, SecretQuestion, TwoFactorSecret, User, UserDetail, UserView,
};
use crate::user::application::domain::state_machine::{Flow, UserStatus};
use crate::user::application::ports::incoming::use_cases::{
    RegisterUserPayload, RegisterUserUseCase, SecretQuestionPayload, UserDetailsPayload,
    UserError,
};
use crate::user::application::ports::outgoing::{
    PasswordHasher, UserDetailsRepository, UserRepository,
};

const MAX_TAG_ATTEMPTS: usize = 5;

pub struct RegisterUserService<R, D>
where
    R: UserRepository,
    D: UserDetailsRepository,
{
    users: R,
    details: D,
    hasher: Arc<dyn PasswordHasher>,
    notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    tag_generator: fn() -> String,
}

impl<R, D> RegisterUserService<R, D>
where
    R: UserRepository,
    D: UserDetailsRepository,
{
    pub fn new(
        users: R,
        details: D,
        hasher: Arc<dyn PasswordHasher>,
        notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            users,
            details,
            hasher,
            notifier,
            tag_generator: generate_tag,
        }
    }

    pub fn with_tag_generator(mut self, tag_generator: fn() -> String) -> Self {
        self.tag_generator = tag_generator;
        self
    }

    async fn unique_tag(&self, nickname: &str) -> Result<String, UserError> {
        for _ in 0..MAX_TAG_ATTEMPTS {
            let tag = (self.tag_generator)();
            if self
                .users
                .find_by_nickname_and_tag(nickname, &tag)
                .await?
                .is_none()
            {
                return Ok(tag);
            }
        }

        warn!(nickname, "Could not find a free tag");
        Err(UserError::TagAlreadyExist)
    }
}

pub(crate) fn secret_question(
    payload: Option<SecretQuestionPayload>,
) -> Result<Option<SecretQuestion>, UserError> {
    let Some(payload) = payload else {
        return Ok(None);
    };

    let question = payload.question.unwrap_or_default();
    let answer = payload.answer.unwrap_or_default();
    if question.trim().is_empty() || answer.trim().is_empty() {
        return Err(UserError::BlankQuestionOrAnswer);
    }

    Ok(Some(SecretQuestion { question, answer }))
}

fn build_detail(
    user_id: Uuid,
    payload: Option<UserDetailsPayload>,
) -> Result<UserDetail, UserError> {
    let mut detail = UserDetail::empty(user_id);
    if let Some(payload) = payload {
        detail.secret_question = secret_question(payload.secret_question)?;
        detail.first_name = payload.first_name;
        detail.last_name = payload.last_name;
        detail.pronoun = payload.pronoun;
        detail.birthday = payload.birthday;
        detail.biography = payload.biography;
    }
    Ok(detail)
}

#[async_trait]
impl<R, D> RegisterUserUseCase for RegisterUserService<R, D>
where
    R: UserRepository + Send + Sync,
    D: UserDetailsRepository + Send + Sync,
{
    async fn execute(&self, payload: serde_json::Value) -> Result<UserView, UserError> {
        let payload = RegisterUserPayload::from_payload(payload)?;

        // `required` already held for these three.
        let email = payload.email.unwrap_or_default().trim().to_lowercase();
        let password = payload.password.unwrap_or_default();
        let nickname = payload.nickname.unwrap_or_default();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(UserError::EmailAlreadyExist);
        }

        let user_id = Uuid::new_v4();
        let detail = build_detail(user_id, payload.details)?;
        let tag = self.unique_tag(&nickname).await?;
        let password_hash = self.hasher.hash_password(&password).await?;
        let code = generate_verification_code();
        let now = Utc::now();

        let user = self
            .users
            .insert(User {
                id: user_id,
                email,
                password_hash,
                provider_id: payload.provider_id,
                nickname,
                tag,
                picture: payload.picture,
                in_progress: InProgress::issue(UserStatus::WaitToConfirm, code.clone()),
                two_factor_secret: TwoFactorSecret::inactive(),
                created_at: now,
                updated_at: now,
            })
            .await?;
        let detail = self.details.insert(detail).await?;

        dispatch_verification_code(
            &self.notifier,
            VerificationCodeMessage {
                email: user.email.clone(),
                nickname: user.nickname.clone(),
                code,
                flow: Flow::ConfirmEmail,
            },
        );

        info!(user_id = %user.id, tag = %user.tag, "User registered");
        Ok(UserView::new(user, Some(detail)))
    }
}
