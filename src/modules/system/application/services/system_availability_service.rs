use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::shared::availability::{self, AvailabilityResponse};
use crate::system::application::ports::incoming::use_cases::{
    SetSystemAvailabilityUseCase, SystemError,
};
use crate::system::application::ports::outgoing::SystemRepository;

/// Backs both `activate` and `deactivate`.
pub struct SystemAvailabilityService<R>
where
    R: SystemRepository,
{
    repository: R,
}

impl<R> SystemAvailabilityService<R>
where
    R: SystemRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetSystemAvailabilityUseCase for SystemAvailabilityService<R>
where
    R: SystemRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, active: bool) -> Result<AvailabilityResponse, SystemError> {
        let mut system = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(SystemError::NotFound)?;

        availability::switch(&mut system.active, active).map_err(|e| {
            warn!(%id, active, "System availability already set");
            SystemError::from(e)
        })?;

        self.repository.save(system).await?;

        info!(%id, active, "System availability changed");
        Ok(AvailabilityResponse::new("System", id, active))
    }
}
