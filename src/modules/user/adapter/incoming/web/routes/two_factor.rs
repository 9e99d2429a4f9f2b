use actix_web::{patch, web, HttpResponse};
use uuid::Uuid;

use super::verification::CodeQuery;
use crate::shared::api::{ApiError, ApiResponse};
use crate::user::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::AppState;

#[patch("/{id}/2fa/activate")]
pub async fn activate_two_factor_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user.ensure_owner(user_id)?;

    let response = data.user.activate_two_factor.execute(user_id).await?;
    Ok(ApiResponse::success(response))
}

#[patch("/{id}/2fa/reset")]
pub async fn reset_two_factor_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    query: web::Query<CodeQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user.ensure_owner(user_id)?;

    let response = data
        .user
        .reset_two_factor
        .execute(user_id, query.into_inner().code)
        .await?;
    Ok(ApiResponse::success(response))
}
