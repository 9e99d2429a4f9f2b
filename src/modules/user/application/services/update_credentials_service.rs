use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::shared::validation::Schema;
use crate::user::application::domain::entities::{InProgress, User};
use crate::user::application::domain::state_machine::{self, Flow};
use crate::user::application::ports::incoming::use_cases::{
    EmailCodeGuard, UpdateEmailCommand, UpdateEmailPayload, UpdateEmailUseCase,
    UpdatePasswordCommand, UpdatePasswordPayload, UpdatePasswordUseCase, UserError,
    VerifyEmailCodeRequest,
};
use crate::user::application::ports::outgoing::{PasswordHasher, UserRepository};

/// Applies `change` to a user the guard has just verified for `flow`, then
/// closes the flow.
async fn finish_flow<R, F>(users: &R, user_id: Uuid, flow: Flow, change: F) -> Result<User, UserError>
where
    R: UserRepository,
    F: FnOnce(&mut User) + Send,
{
    let mut user = users
        .find_by_id(user_id)
        .await?
        .ok_or(UserError::UserInexistent)?;

    let done = state_machine::complete(flow, user.in_progress.status)?;
    change(&mut user);
    user.in_progress = InProgress::settle(done);
    user.updated_at = Utc::now();

    Ok(users.update(user).await?)
}

pub struct UpdateEmailService<R>
where
    R: UserRepository,
{
    users: R,
    guard: Arc<dyn EmailCodeGuard>,
}

impl<R> UpdateEmailService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, guard: Arc<dyn EmailCodeGuard>) -> Self {
        Self { users, guard }
    }
}

#[async_trait]
impl<R> UpdateEmailUseCase for UpdateEmailService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateEmailCommand) -> Result<(), UserError> {
        let payload = UpdateEmailPayload::from_payload(command.payload)?;
        let email = payload.email.unwrap_or_default().trim().to_lowercase();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(UserError::EmailAlreadyExist);
        }

        let flow = Flow::EmailChange;
        let context = self
            .guard
            .verify(VerifyEmailCodeRequest {
                user_id: Some(command.user_id),
                email: None,
                code: command.code,
                flow,
            })
            .await?;

        let user = finish_flow(&self.users, context.user_id, flow, |user| user.email = email).await?;
        info!(user_id = %user.id, "Email updated");
        Ok(())
    }
}

pub struct UpdatePasswordService<R>
where
    R: UserRepository,
{
    users: R,
    hasher: Arc<dyn PasswordHasher>,
    guard: Arc<dyn EmailCodeGuard>,
}

impl<R> UpdatePasswordService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, hasher: Arc<dyn PasswordHasher>, guard: Arc<dyn EmailCodeGuard>) -> Self {
        Self {
            users,
            hasher,
            guard,
        }
    }
}

#[async_trait]
impl<R> UpdatePasswordUseCase for UpdatePasswordService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: UpdatePasswordCommand) -> Result<(), UserError> {
        let payload = UpdatePasswordPayload::from_payload(command.payload)?;
        let password = payload.password.unwrap_or_default();

        let flow = Flow::PasswordChange;
        let context = self
            .guard
            .verify(VerifyEmailCodeRequest {
                user_id: command.user_id,
                email: command.email.map(|e| e.trim().to_lowercase()),
                code: command.code,
                flow,
            })
            .await?;

        let password_hash = self.hasher.hash_password(&password).await?;
        let user = finish_flow(&self.users, context.user_id, flow, |user| {
            user.password_hash = password_hash
        })
        .await?;

        info!(user_id = %user.id, "Password updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::StubPasswordHasher;
    use crate::tests::support::in_memory::InMemoryUserStore;
    use crate::tests::support::user_fixtures::{done_user, stub_hash, user_with_status};
    use crate::user::application::domain::state_machine::UserStatus;
    use crate::user::application::services::EmailCodeGuardService;
    use serde_json::json;

    fn guard(store: &InMemoryUserStore) -> Arc<dyn EmailCodeGuard> {
        Arc::new(EmailCodeGuardService::new(store.clone(), store.clone()))
    }

    fn email_service(store: &InMemoryUserStore) -> UpdateEmailService<InMemoryUserStore> {
        UpdateEmailService::new(store.clone(), guard(store))
    }

    fn password_service(store: &InMemoryUserStore) -> UpdatePasswordService<InMemoryUserStore> {
        UpdatePasswordService::new(store.clone(), Arc::new(StubPasswordHasher), guard(store))
    }

    #[tokio::test]
    async fn test_email_change_completes_flow() {
        let user = user_with_status(UserStatus::WaitToStartEmailChange, "MAIL01");
        let store = InMemoryUserStore::new().with_user(user.clone());

        email_service(&store)
            .execute(UpdateEmailCommand {
                user_id: user.id,
                code: Some("MAIL01".to_string()),
                payload: json!({ "email": "New@Rivendell.me" }),
            })
            .await
            .unwrap();

        let stored = store.user(user.id).unwrap();
        assert_eq!(stored.email, "new@rivendell.me");
        assert_eq!(stored.in_progress.status, UserStatus::Done);
        // guard write + final write
        assert_eq!(store.user_writes(), 2);
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_before_guard() {
        let user = user_with_status(UserStatus::WaitToStartEmailChange, "MAIL01");
        let store = InMemoryUserStore::new().with_user(user.clone());

        let result = email_service(&store)
            .execute(UpdateEmailCommand {
                user_id: user.id,
                code: Some("MAIL01".to_string()),
                payload: json!({ "email": "nope" }),
            })
            .await;

        assert!(matches!(result, Err(UserError::Validation(_))));
        assert_eq!(store.user(user.id).unwrap(), user);
    }

    #[tokio::test]
    async fn test_taken_email_is_rejected() {
        let taken = done_user();
        let user = user_with_status(UserStatus::WaitToStartEmailChange, "MAIL01");
        let store = InMemoryUserStore::new()
            .with_user(taken.clone())
            .with_user(user.clone());

        let result = email_service(&store)
            .execute(UpdateEmailCommand {
                user_id: user.id,
                code: Some("MAIL01".to_string()),
                payload: json!({ "email": taken.email }),
            })
            .await;

        assert!(matches!(result, Err(UserError::EmailAlreadyExist)));
        assert_eq!(store.user_writes(), 0);
    }

    #[tokio::test]
    async fn test_password_reset_by_email() {
        let user = user_with_status(UserStatus::WaitToStartPasswordChange, "PASS01");
        let store = InMemoryUserStore::new().with_user(user.clone());

        password_service(&store)
            .execute(UpdatePasswordCommand {
                user_id: None,
                email: Some(user.email.clone()),
                code: Some("PASS01".to_string()),
                payload: json!({ "password": "Mellon#2024" }),
            })
            .await
            .unwrap();

        let stored = store.user(user.id).unwrap();
        assert_eq!(stored.password_hash, stub_hash("Mellon#2024"));
        assert_eq!(stored.in_progress.status, UserStatus::Done);
    }

    #[tokio::test]
    async fn test_password_change_outside_flow_is_invalid_status() {
        let user = done_user();
        let store = InMemoryUserStore::new().with_user(user.clone());

        let result = password_service(&store)
            .execute(UpdatePasswordCommand {
                user_id: Some(user.id),
                email: None,
                code: Some("PASS01".to_string()),
                payload: json!({ "password": "Mellon#2024" }),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidUserStatus)));
        assert_eq!(store.user(user.id).unwrap().password_hash, user.password_hash);
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let user = user_with_status(UserStatus::WaitToStartPasswordChange, "PASS01");
        let store = InMemoryUserStore::new().with_user(user.clone());

        let result = password_service(&store)
            .execute(UpdatePasswordCommand {
                user_id: Some(user.id),
                email: None,
                code: Some("PASS01".to_string()),
                payload: json!({ "password": "short" }),
            })
            .await;

        let Err(UserError::Validation(violation)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(violation.details[0].path, vec!["password".to_string()]);
    }
}
