use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::application::domain::{CatalogEntity, CatalogKind};
use crate::catalog::application::ports::incoming::use_cases::{
    CatalogError, UpdateCatalogEntityUseCase,
};
use crate::catalog::application::ports::outgoing::CatalogRepository;

pub struct UpdateCatalogEntityService<R>
where
    R: CatalogRepository,
{
    repository: R,
}

impl<R> UpdateCatalogEntityService<R>
where
    R: CatalogRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCatalogEntityUseCase for UpdateCatalogEntityService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(
        &self,
        kind: CatalogKind,
        id: Uuid,
        payload: Value,
    ) -> Result<CatalogEntity, CatalogError> {
        if payload.get("active").is_some() {
            warn!(%kind, %id, "Update tried to change availability");
            return Err(CatalogError::AvailabilityBadRequest);
        }

        kind.validate(&payload)?;

        let mut entity = self
            .repository
            .find_by_id(kind, id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        let Value::Object(mut body) = payload else {
            return Err(CatalogError::Internal("validated payload is not an object".into()));
        };
        entity.en = body.remove("en").unwrap_or(Value::Null);
        entity.pt = body.remove("pt").unwrap_or(Value::Null);

        let entity = self.repository.save(entity).await?;
        info!(%kind, %id, "Catalog entity updated");
        Ok(entity)
    }
}
