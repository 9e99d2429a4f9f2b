use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{info, warn};

use crate::user::application::domain::state_machine::UserStatus;
use crate::user::application::ports::incoming::use_cases::{
    LoginRequest, LoginResponse, LoginUserUseCase, UserError,
};
use crate::user::application::ports::outgoing::{PasswordHasher, TokenProvider, UserRepository};

pub struct LoginUserService<R>
where
    R: UserRepository,
{
    users: R,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<R> LoginUserService<R>
where
    R: UserRepository,
{
    pub fn new(users: R, hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R> LoginUserUseCase for LoginUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, UserError> {
        let email = request.email.trim().to_lowercase();

        if !EmailAddress::is_valid(&email) {
            warn!("Login attempt with malformed email");
            return Err(UserError::Login);
        }

        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!("Login attempt for unknown email");
            return Err(UserError::Login);
        };

        if !self
            .hasher
            .verify_password(&request.password, &user.password_hash)
            .await?
        {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(UserError::Login);
        }

        let is_verified = user.in_progress.status != UserStatus::WaitToConfirm;
        let token = self.tokens.generate_access_token(user.id, is_verified)?;

        info!(user_id = %user.id, is_verified, "User logged in");
        Ok(LoginResponse { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::{StubPasswordHasher, StubTokenProvider};
    use crate::tests::support::in_memory::InMemoryUserStore;
    use crate::tests::support::user_fixtures::{done_user, user_with_status, TEST_PASSWORD};

    fn service(store: &InMemoryUserStore) -> LoginUserService<InMemoryUserStore> {
        LoginUserService::new(
            store.clone(),
            Arc::new(StubPasswordHasher),
            Arc::new(StubTokenProvider),
        )
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_confirmed_user_gets_verified_token() {
        let user = done_user();
        let store = InMemoryUserStore::new().with_user(user.clone());

        let response = service(&store)
            .execute(login(&user.email.to_uppercase(), TEST_PASSWORD))
            .await
            .unwrap();

        assert_eq!(response.token, StubTokenProvider::token_for(user.id));
    }

    #[tokio::test]
    async fn test_unconfirmed_user_gets_unverified_token() {
        let user = user_with_status(UserStatus::WaitToConfirm, "ABC123");
        let store = InMemoryUserStore::new().with_user(user.clone());

        let response = service(&store)
            .execute(login(&user.email, TEST_PASSWORD))
            .await
            .unwrap();

        assert_eq!(response.token, StubTokenProvider::unverified_token_for(user.id));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let user = done_user();
        let store = InMemoryUserStore::new().with_user(user.clone());
        let service = service(&store);

        let wrong_password = service.execute(login(&user.email, "nope-nope")).await;
        let unknown = service
            .execute(login("ghost@tablerise.test", TEST_PASSWORD))
            .await;

        assert!(matches!(wrong_password, Err(UserError::Login)));
        assert!(matches!(unknown, Err(UserError::Login)));
    }

    #[tokio::test]
    async fn test_malformed_email_is_a_login_failure() {
        let store = InMemoryUserStore::new().with_user(done_user());

        let result = service(&store).execute(login("not-an-email", TEST_PASSWORD)).await;

        assert!(matches!(result, Err(UserError::Login)));
    }
}
