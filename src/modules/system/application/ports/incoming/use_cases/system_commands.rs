use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::SystemError;
use crate::shared::availability::AvailabilityResponse;
use crate::system::application::domain::SystemDocument;

#[async_trait]
pub trait UpdateSystemUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, payload: Value) -> Result<SystemDocument, SystemError>;
}

#[async_trait]
pub trait UpdateSystemContentUseCase: Send + Sync {
    /// Adds or removes `newID` in the content array named by `field` and
    /// returns a human readable summary of the change.
    async fn execute(
        &self,
        id: Uuid,
        field: Option<String>,
        payload: Value,
    ) -> Result<String, SystemError>;
}

#[async_trait]
pub trait SetSystemAvailabilityUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, active: bool) -> Result<AvailabilityResponse, SystemError>;
}
