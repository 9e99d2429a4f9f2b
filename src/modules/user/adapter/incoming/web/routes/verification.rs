use actix_web::{get, patch, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::api::{ApiError, ApiResponse};
use crate::user::application::domain::state_machine::Flow;
use crate::user::application::ports::incoming::use_cases::RequestVerificationCommand;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FlowQuery {
    pub flow: Flow,
}

#[derive(Debug, Deserialize)]
pub struct EmailFlowQuery {
    pub email: String,
    pub flow: Flow,
}

#[derive(Debug, Deserialize)]
pub struct CodeQuery {
    pub code: Option<String>,
}

/// Sends a fresh code for `flow` to the account's email.
#[get("/{id}/verify")]
pub async fn request_verification_handler(
    path: web::Path<Uuid>,
    query: web::Query<FlowQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    data.user
        .request_verification
        .execute(RequestVerificationCommand {
            user_id: Some(path.into_inner()),
            email: None,
            flow: query.into_inner().flow,
        })
        .await?;

    Ok(ApiResponse::no_content())
}

/// Same as above for callers that only know the email (password reset).
#[get("/verify")]
pub async fn request_verification_by_email_handler(
    query: web::Query<EmailFlowQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    data.user
        .request_verification
        .execute(RequestVerificationCommand {
            user_id: None,
            email: Some(query.email),
            flow: query.flow,
        })
        .await?;

    Ok(ApiResponse::no_content())
}

#[patch("/{id}/confirm")]
pub async fn confirm_code_handler(
    path: web::Path<Uuid>,
    query: web::Query<CodeQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let response = data
        .user
        .confirm_code
        .execute(path.into_inner(), query.into_inner().code)
        .await?;

    Ok(ApiResponse::success(response))
}
