use async_trait::async_trait;
use serde::Deserialize;
use validator::Validate;

use super::UserError;
use crate::user::application::domain::entities::UserView;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SecretQuestionPayload {
    #[validate(required, length(max = 120))]
    pub question: Option<String>,
    #[validate(required, length(max = 120))]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsPayload {
    #[validate(length(max = 64))]
    pub first_name: Option<String>,
    #[validate(length(max = 64))]
    pub last_name: Option<String>,
    #[validate(length(max = 32))]
    pub pronoun: Option<String>,
    #[validate(length(max = 32))]
    pub birthday: Option<String>,
    #[validate(length(max = 500))]
    pub biography: Option<String>,
    #[validate(nested)]
    pub secret_question: Option<SecretQuestionPayload>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserPayload {
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required, length(min = 8, max = 16))]
    pub password: Option<String>,
    #[validate(required, length(min = 1, max = 32))]
    pub nickname: Option<String>,
    #[validate(length(max = 120))]
    pub picture: Option<String>,
    pub provider_id: Option<String>,
    #[validate(nested)]
    pub details: Option<UserDetailsPayload>,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, payload: serde_json::Value) -> Result<UserView, UserError>;
}
