use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::catalog::application::domain::CatalogKind;
use crate::catalog::application::ports::incoming::use_cases::{
    CatalogError, DeleteCatalogEntityUseCase,
};
use crate::catalog::application::ports::outgoing::CatalogRepository;

pub struct DeleteCatalogEntityService<R>
where
    R: CatalogRepository,
{
    repository: R,
}

impl<R> DeleteCatalogEntityService<R>
where
    R: CatalogRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCatalogEntityUseCase for DeleteCatalogEntityService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(&self, kind: CatalogKind, id: Uuid) -> Result<(), CatalogError> {
        if !kind.supports_delete() {
            return Err(CatalogError::DeleteUnsupported(kind));
        }

        self.repository.delete(kind, id).await?;
        info!(%kind, %id, "Catalog entity deleted");
        Ok(())
    }
}
