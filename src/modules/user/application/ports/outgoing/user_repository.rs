use async_trait::async_trait;
use uuid::Uuid;

use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persistence of the `users` collection. Every write replaces the whole record.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;
    async fn find_by_nickname_and_tag(
        &self,
        nickname: &str,
        tag: &str,
    ) -> Result<Option<User>, UserRepositoryError>;
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;
    async fn insert(&self, user: User) -> Result<User, UserRepositoryError>;
    async fn update(&self, user: User) -> Result<User, UserRepositoryError>;
    async fn delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
