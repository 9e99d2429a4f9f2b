use async_trait::async_trait;
use uuid::Uuid;

use crate::user::application::domain::entities::UserDetail;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserDetailsRepositoryError {
    #[error("User details not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserDetailsRepository: Send + Sync {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserDetail>, UserDetailsRepositoryError>;
    async fn insert(&self, detail: UserDetail) -> Result<UserDetail, UserDetailsRepositoryError>;
    async fn update(&self, detail: UserDetail) -> Result<UserDetail, UserDetailsRepositoryError>;
    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<(), UserDetailsRepositoryError>;
}
