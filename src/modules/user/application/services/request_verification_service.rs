use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use super::notify::dispatch_verification_code;
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotifier, VerificationCodeMessage,
};
use crate::user::application::domain::codes::generate_verification_code;
use crate::user::application::domain::entities::InProgress;
use crate::user::application::domain::state_machine;
use crate::user::application::ports::incoming::use_cases::{
    RequestVerificationCommand, RequestVerificationUseCase, UserError,
};
use crate::user::application::ports::outgoing::UserRepository;

pub struct RequestVerificationService<R>
where
    R: UserRepository,
{
    users: R,
    notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<R> RequestVerificationService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, notifier: Arc<dyn UserEmailNotifier + Send + Sync>) -> Self {
        Self { users, notifier }
    }
}

#[async_trait]
impl<R> RequestVerificationUseCase for RequestVerificationService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RequestVerificationCommand) -> Result<(), UserError> {
        let found = match (command.user_id, command.email.as_deref()) {
            (Some(id), _) => self.users.find_by_id(id).await?,
            (None, Some(email)) => self.users.find_by_email(&email.trim().to_lowercase()).await?,
            (None, None) => {
                return Err(UserError::BadRequest(
                    "Neither id or email was provided to send the verification code".to_string(),
                ))
            }
        };
        let mut user = found.ok_or(UserError::UserInexistent)?;
        let flow = command.flow;

        let pending = state_machine::start(flow, user.in_progress.status).map_err(|e| {
            warn!(user_id = %user.id, error = %e, "Verification request rejected");
            UserError::from(e)
        })?;

        let code = generate_verification_code();
        user.in_progress = InProgress::issue(pending, code.clone());
        user.updated_at = Utc::now();
        let user = self.users.update(user).await?;

        dispatch_verification_code(
            &self.notifier,
            VerificationCodeMessage {
                email: user.email.clone(),
                nickname: user.nickname.clone(),
                code,
                flow,
            },
        );

        info!(user_id = %user.id, %flow, status = %pending, "Verification code issued");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::RecordingNotifier;
    use crate::tests::support::in_memory::InMemoryUserStore;
    use crate::tests::support::user_fixtures::{done_user, user_with_status};
    use crate::user::application::domain::state_machine::{Flow, UserStatus};

    fn service(
        store: &InMemoryUserStore,
        notifier: &RecordingNotifier,
    ) -> RequestVerificationService<InMemoryUserStore> {
        RequestVerificationService::new(store.clone(), Arc::new(notifier.clone()))
    }

    #[tokio::test]
    async fn test_starting_a_flow_issues_code_and_moves_status() {
        let user = done_user();
        let store = InMemoryUserStore::new().with_user(user.clone());
        let notifier = RecordingNotifier::new();

        service(&store, &notifier)
            .execute(RequestVerificationCommand {
                user_id: Some(user.id),
                email: None,
                flow: Flow::EmailChange,
            })
            .await
            .unwrap();

        let stored = store.user(user.id).unwrap();
        assert_eq!(stored.in_progress.status, UserStatus::WaitToStartEmailChange);
        assert_eq!(stored.in_progress.code.len(), 6);

        let sent = notifier.wait_for(1).await;
        assert_eq!(sent[0].code, stored.in_progress.code);
        assert_eq!(sent[0].email, user.email);
    }

    #[tokio::test]
    async fn test_resend_replaces_previous_code() {
        let user = user_with_status(UserStatus::WaitToConfirm, "OLD111");
        let store = InMemoryUserStore::new().with_user(user.clone());
        let notifier = RecordingNotifier::new();

        service(&store, &notifier)
            .execute(RequestVerificationCommand {
                user_id: None,
                email: Some(user.email.clone()),
                flow: Flow::ConfirmEmail,
            })
            .await
            .unwrap();

        let stored = store.user(user.id).unwrap();
        assert_eq!(stored.in_progress.status, UserStatus::WaitToConfirm);
        assert_ne!(stored.in_progress.code, "OLD111");
    }

    #[tokio::test]
    async fn test_unconfirmed_account_cannot_change_password() {
        let user = user_with_status(UserStatus::WaitToConfirm, "ABC123");
        let store = InMemoryUserStore::new().with_user(user.clone());
        let notifier = RecordingNotifier::new();

        let result = service(&store, &notifier)
            .execute(RequestVerificationCommand {
                user_id: Some(user.id),
                email: None,
                flow: Flow::PasswordChange,
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidUserStatus)));
        assert_eq!(store.user_writes(), 0);
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_requires_id_or_email() {
        let store = InMemoryUserStore::new();
        let notifier = RecordingNotifier::new();

        let result = service(&store, &notifier)
            .execute(RequestVerificationCommand {
                user_id: None,
                email: None,
                flow: Flow::PasswordChange,
            })
            .await;

        assert!(matches!(result, Err(UserError::BadRequest(_))));
    }
}
