use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::catalog::application::domain::{CatalogEntity, CatalogKind};
use crate::catalog::application::ports::incoming::use_cases::{
    CatalogError, GetCatalogEntitiesUseCase, GetCatalogEntityUseCase,
};
use crate::catalog::application::ports::outgoing::CatalogRepository;

pub struct CatalogQueryService<R>
where
    R: CatalogRepository,
{
    repository: R,
}

impl<R> CatalogQueryService<R>
where
    R: CatalogRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetCatalogEntitiesUseCase for CatalogQueryService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(
        &self,
        kind: CatalogKind,
        active: bool,
    ) -> Result<Vec<CatalogEntity>, CatalogError> {
        let entities = self.repository.find_all(kind, active).await?;
        info!(%kind, active, count = entities.len(), "Catalog entities listed");
        Ok(entities)
    }
}

#[async_trait]
impl<R> GetCatalogEntityUseCase for CatalogQueryService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(&self, kind: CatalogKind, id: Uuid) -> Result<CatalogEntity, CatalogError> {
        self.repository
            .find_by_id(kind, id)
            .await?
            .ok_or(CatalogError::NotFound)
    }
}
