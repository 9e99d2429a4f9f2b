use async_trait::async_trait;
use uuid::Uuid;

use crate::system::application::domain::SystemDocument;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SystemRepositoryError {
    #[error("System not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SystemRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<SystemDocument>, SystemRepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SystemDocument>, SystemRepositoryError>;
    async fn insert(&self, system: SystemDocument) -> Result<SystemDocument, SystemRepositoryError>;
    /// Writes the whole document back.
    async fn save(&self, system: SystemDocument) -> Result<SystemDocument, SystemRepositoryError>;
}
