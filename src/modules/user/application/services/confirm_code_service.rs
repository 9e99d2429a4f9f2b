use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::user::application::domain::state_machine::Flow;
use crate::user::application::ports::incoming::use_cases::{
    ConfirmCodeResponse, ConfirmCodeUseCase, EmailCodeGuard, UserError, VerifyEmailCodeRequest,
};

/// Email confirmation is the guard's transition on its own.
pub struct ConfirmCodeService {
    guard: Arc<dyn EmailCodeGuard>,
}

impl ConfirmCodeService {
    pub fn new(guard: Arc<dyn EmailCodeGuard>) -> Self {
        Self { guard }
    }
}

#[async_trait]
impl ConfirmCodeUseCase for ConfirmCodeService {
    async fn execute(
        &self,
        user_id: Uuid,
        code: Option<String>,
    ) -> Result<ConfirmCodeResponse, UserError> {
        let context = self
            .guard
            .verify(VerifyEmailCodeRequest {
                user_id: Some(user_id),
                email: None,
                code,
                flow: Flow::ConfirmEmail,
            })
            .await?;

        info!(%user_id, "Email confirmed");
        Ok(ConfirmCodeResponse {
            status: context.user_status,
        })
    }
}
