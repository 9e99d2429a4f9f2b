use actix_web::{delete, get, patch, put, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::api::{ApiError, ApiResponse};
use crate::shared::reference_list::ReferenceMethod;
use crate::user::adapter::incoming::web::extractors::auth::{AuthenticatedUser, VerifiedUser};
use crate::user::application::domain::entities::GameInfoTarget;
use crate::user::application::ports::incoming::use_cases::UpdateGameInfoCommand;
use crate::AppState;

/// Current TOTP code for accounts with two-factor enabled.
#[derive(Debug, Deserialize)]
pub struct TwoFactorQuery {
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfoQuery {
    pub info_id: String,
    pub target_info: GameInfoTarget,
    pub operation: ReferenceMethod,
}

#[get("")]
pub async fn get_users_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let users = data.user.get_list.execute().await?;
    Ok(ApiResponse::success(users))
}

#[get("/{id}")]
pub async fn get_user_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user = data.user.get_single.execute(path.into_inner()).await?;
    Ok(ApiResponse::success(user))
}

#[put("/{id}/update")]
pub async fn update_profile_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    query: web::Query<TwoFactorQuery>,
    payload: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user.ensure_owner(user_id)?;

    data.user
        .two_factor_guard
        .authenticate(user_id, query.into_inner().token)
        .await?;

    let view = data
        .user
        .update_profile
        .execute(user_id, payload.into_inner())
        .await?;
    Ok(ApiResponse::created(view))
}

#[patch("/{id}/update/game-info")]
pub async fn update_game_info_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    query: web::Query<GameInfoQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user.ensure_owner(user_id)?;
    let query = query.into_inner();

    let info = data
        .user
        .update_game_info
        .execute(UpdateGameInfoCommand {
            user_id,
            info_id: query.info_id,
            target: query.target_info,
            operation: query.operation,
        })
        .await?;
    Ok(ApiResponse::success(info))
}

#[delete("/{id}/delete")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<TwoFactorQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user.ensure_owner(user_id)?;

    data.user
        .two_factor_guard
        .authenticate(user_id, query.into_inner().token)
        .await?;

    data.user.delete.execute(user_id).await?;
    Ok(ApiResponse::no_content())
}
