use actix_web::{post, web, HttpResponse};
use tracing::{info, warn};

use crate::shared::api::{ApiError, ApiResponse};
use crate::user::application::ports::incoming::use_cases::LoginRequest;
use crate::AppState;

#[post("/register")]
pub async fn register_user_handler(
    payload: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user = data
        .user
        .register
        .execute(payload.into_inner())
        .await
        .inspect_err(|e| warn!(error = %e, "Registration rejected"))?;

    info!(user_id = %user.id, "User registered");
    Ok(ApiResponse::created(user))
}

#[post("/login")]
pub async fn login_user_handler(
    payload: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let response = data.user.login.execute(payload.into_inner()).await?;
    Ok(ApiResponse::success(response))
}
