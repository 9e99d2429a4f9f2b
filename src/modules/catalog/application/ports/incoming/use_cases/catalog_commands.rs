use async_trait::async_trait;
use uuid::Uuid;

use super::CatalogError;
use crate::catalog::application::domain::{CatalogEntity, CatalogKind};
use crate::shared::availability::AvailabilityResponse;

#[async_trait]
pub trait UpdateCatalogEntityUseCase: Send + Sync {
    /// Replaces both locale bodies. `active` can only change through
    /// [`ToggleAvailabilityUseCase`].
    async fn execute(
        &self,
        kind: CatalogKind,
        id: Uuid,
        payload: serde_json::Value,
    ) -> Result<CatalogEntity, CatalogError>;
}

#[async_trait]
pub trait ToggleAvailabilityUseCase: Send + Sync {
    async fn execute(
        &self,
        kind: CatalogKind,
        id: Uuid,
        availability: bool,
    ) -> Result<AvailabilityResponse, CatalogError>;
}

#[async_trait]
pub trait DeleteCatalogEntityUseCase: Send + Sync {
    async fn execute(&self, kind: CatalogKind, id: Uuid) -> Result<(), CatalogError>;
}
