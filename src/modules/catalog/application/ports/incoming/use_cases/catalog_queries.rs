use async_trait::async_trait;
use uuid::Uuid;

use super::CatalogError;
use crate::catalog::application::domain::{CatalogEntity, CatalogKind};

#[async_trait]
pub trait GetCatalogEntitiesUseCase: Send + Sync {
    /// Entities of `kind` whose availability equals `active`.
    async fn execute(
        &self,
        kind: CatalogKind,
        active: bool,
    ) -> Result<Vec<CatalogEntity>, CatalogError>;
}

#[async_trait]
pub trait GetCatalogEntityUseCase: Send + Sync {
    async fn execute(&self, kind: CatalogKind, id: Uuid) -> Result<CatalogEntity, CatalogError>;
}
