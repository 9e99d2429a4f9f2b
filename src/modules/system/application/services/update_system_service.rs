use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::shared::validation::Schema;
use crate::system::application::domain::schemas::SystemUpdatePayload;
use crate::system::application::domain::SystemDocument;
use crate::system::application::ports::incoming::use_cases::{SystemError, UpdateSystemUseCase};
use crate::system::application::ports::outgoing::SystemRepository;

pub struct UpdateSystemService<R>
where
    R: SystemRepository,
{
    repository: R,
}

impl<R> UpdateSystemService<R>
where
    R: SystemRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSystemUseCase for UpdateSystemService<R>
where
    R: SystemRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, payload: Value) -> Result<SystemDocument, SystemError> {
        if payload.get("active").is_some() {
            warn!(%id, "System update tried to change availability");
            return Err(SystemError::AvailabilityBadRequest);
        }

        let update = SystemUpdatePayload::from_payload(payload)?;

        let mut system = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(SystemError::NotFound)?;

        if let Some(name) = update.name {
            system.name = name;
        }
        if let Some(content) = update.content {
            system.content = content.into();
        }
        if let Some(references) = update.references {
            system.references = references.into();
        }

        let system = self.repository.save(system).await?;
        info!(%id, "System updated");
        Ok(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::catalog_fixtures::system;
    use crate::tests::support::in_memory::InMemorySystemStore;
    use serde_json::json;

    fn content_with_race(race: &str) -> Value {
        json!({
            "races": [race], "classes": [], "spells": [], "items": [], "weapons": [],
            "armors": [], "feats": [], "realms": [], "gods": [], "monsters": []
        })
    }

    #[tokio::test]
    async fn test_update_replaces_content_and_keeps_references() {
        let existing = system(true);
        let store = InMemorySystemStore::new().with_system(existing.clone());
        let service = UpdateSystemService::new(store.clone());

        let updated = service
            .execute(existing.id, json!({ "content": content_with_race("elf") }))
            .await
            .unwrap();

        assert_eq!(updated.content.races, vec!["elf"]);
        assert_eq!(updated.name, existing.name);
        assert_eq!(updated.references, existing.references);
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn test_update_without_content_is_validation_error() {
        let existing = system(true);
        let store = InMemorySystemStore::new().with_system(existing.clone());
        let service = UpdateSystemService::new(store.clone());

        let result = service.execute(existing.id, json!({ "name": "Tormenta" })).await;

        assert!(matches!(result, Err(SystemError::Validation(_))));
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_update_with_active_is_rejected() {
        let existing = system(true);
        let store = InMemorySystemStore::new().with_system(existing.clone());
        let service = UpdateSystemService::new(store.clone());

        let result = service
            .execute(
                existing.id,
                json!({ "content": content_with_race("elf"), "active": false }),
            )
            .await;

        assert!(matches!(result, Err(SystemError::AvailabilityBadRequest)));
        assert!(store.system(existing.id).unwrap().active);
    }

    #[tokio::test]
    async fn test_update_unknown_system() {
        let service = UpdateSystemService::new(InMemorySystemStore::new());

        let result = service
            .execute(Uuid::new_v4(), json!({ "content": content_with_race("elf") }))
            .await;

        assert!(matches!(result, Err(SystemError::NotFound)));
    }
}
