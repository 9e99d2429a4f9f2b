use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::shared::validation::Schema;
use crate::system::application::domain::schemas::UpdateContentPayload;
use crate::system::application::domain::ContentField;
use crate::system::application::ports::incoming::use_cases::{
    SystemError, UpdateSystemContentUseCase,
};
use crate::system::application::ports::outgoing::SystemRepository;

pub struct UpdateSystemContentService<R>
where
    R: SystemRepository,
{
    repository: R,
}

impl<R> UpdateSystemContentService<R>
where
    R: SystemRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSystemContentUseCase for UpdateSystemContentService<R>
where
    R: SystemRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        field: Option<String>,
        payload: Value,
    ) -> Result<String, SystemError> {
        let payload = UpdateContentPayload::from_payload(payload)?;

        let field: ContentField = match field.as_deref() {
            None | Some("") => {
                warn!(%id, "Content update without entity field");
                return Err(SystemError::AvailabilityBadRequest);
            }
            Some(raw) => raw.parse()?,
        };

        let (Some(method), Some(new_id)) = (payload.method, payload.newID) else {
            return Err(SystemError::Internal(
                "validated content payload is incomplete".into(),
            ));
        };

        let mut system = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(SystemError::NotFound)?;

        method.apply(system.content.field_mut(field), &new_id);
        let system = self.repository.save(system).await?;

        info!(%id, %field, %method, "System content updated");
        Ok(format!(
            "New ID {} was {} to array of entities {} - system ID: {}",
            new_id, method, field, system.id
        ))
    }
}
