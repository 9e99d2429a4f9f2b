use actix_web::{patch, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use super::verification::CodeQuery;
use crate::shared::api::{ApiError, ApiResponse};
use crate::user::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::user::application::ports::incoming::use_cases::{
    UpdateEmailCommand, UpdatePasswordCommand,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailCodeQuery {
    pub email: String,
    pub code: Option<String>,
}

#[patch("/{id}/update/email")]
pub async fn update_email_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    query: web::Query<CodeQuery>,
    payload: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user.ensure_owner(user_id)?;

    data.user
        .update_email
        .execute(UpdateEmailCommand {
            user_id,
            code: query.into_inner().code,
            payload: payload.into_inner(),
        })
        .await?;

    Ok(HttpResponse::Ok().finish())
}

#[patch("/{id}/update/password")]
pub async fn update_password_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    query: web::Query<CodeQuery>,
    payload: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user.ensure_owner(user_id)?;

    data.user
        .update_password
        .execute(UpdatePasswordCommand {
            user_id: Some(user_id),
            email: None,
            code: query.into_inner().code,
            payload: payload.into_inner(),
        })
        .await?;

    Ok(ApiResponse::no_content())
}

/// Forgotten-password path: the emailed code is the only credential.
#[patch("/update/password")]
pub async fn reset_password_handler(
    query: web::Query<EmailCodeQuery>,
    payload: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();

    data.user
        .update_password
        .execute(UpdatePasswordCommand {
            user_id: None,
            email: Some(query.email),
            code: query.code,
            payload: payload.into_inner(),
        })
        .await?;

    Ok(ApiResponse::no_content())
}
