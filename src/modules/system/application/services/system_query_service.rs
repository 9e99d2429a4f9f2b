use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::system::application::domain::SystemDocument;
use crate::system::application::ports::incoming::use_cases::{
    GetSystemUseCase, GetSystemsUseCase, SystemError,
};
use crate::system::application::ports::outgoing::SystemRepository;

pub struct SystemQueryService<R>
where
    R: SystemRepository,
{
    repository: R,
}

impl<R> SystemQueryService<R>
where
    R: SystemRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSystemsUseCase for SystemQueryService<R>
where
    R: SystemRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SystemDocument>, SystemError> {
        let systems = self.repository.find_all().await?;
        info!(count = systems.len(), "Systems listed");
        Ok(systems)
    }
}

#[async_trait]
impl<R> GetSystemUseCase for SystemQueryService<R>
where
    R: SystemRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<SystemDocument, SystemError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SystemError::NotFound)
    }
}
