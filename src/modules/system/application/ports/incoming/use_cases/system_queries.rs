use async_trait::async_trait;
use uuid::Uuid;

use super::SystemError;
use crate::system::application::domain::SystemDocument;

#[async_trait]
pub trait GetSystemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SystemDocument>, SystemError>;
}

#[async_trait]
pub trait GetSystemUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<SystemDocument, SystemError>;
}
