use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::application::domain::CatalogKind;
use crate::catalog::application::ports::incoming::use_cases::{
    CatalogError, ToggleAvailabilityUseCase,
};
use crate::catalog::application::ports::outgoing::CatalogRepository;
use crate::shared::availability::{self, AvailabilityResponse};

pub struct ToggleAvailabilityService<R>
where
    R: CatalogRepository,
{
    repository: R,
}

impl<R> ToggleAvailabilityService<R>
where
    R: CatalogRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ToggleAvailabilityUseCase for ToggleAvailabilityService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(
        &self,
        kind: CatalogKind,
        id: Uuid,
        availability: bool,
    ) -> Result<AvailabilityResponse, CatalogError> {
        let mut entity = self
            .repository
            .find_by_id(kind, id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        availability::switch(&mut entity.active, availability).map_err(|e| {
            warn!(%kind, %id, availability, "Availability already set");
            CatalogError::from(e)
        })?;

        self.repository.save(entity).await?;

        info!(%kind, %id, availability, "Catalog entity availability changed");
        Ok(AvailabilityResponse::new(kind.display_name(), id, availability))
    }
}
