use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::{CatalogEntity, CatalogKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogRepositoryError {
    #[error("Catalog entity not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage for every catalog kind; each call is scoped to one kind.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_all(
        &self,
        kind: CatalogKind,
        active: bool,
    ) -> Result<Vec<CatalogEntity>, CatalogRepositoryError>;
    async fn find_by_id(
        &self,
        kind: CatalogKind,
        id: Uuid,
    ) -> Result<Option<CatalogEntity>, CatalogRepositoryError>;
    async fn insert(&self, entity: CatalogEntity) -> Result<CatalogEntity, CatalogRepositoryError>;
    async fn save(&self, entity: CatalogEntity) -> Result<CatalogEntity, CatalogRepositoryError>;
    async fn delete(&self, kind: CatalogKind, id: Uuid) -> Result<(), CatalogRepositoryError>;
}
