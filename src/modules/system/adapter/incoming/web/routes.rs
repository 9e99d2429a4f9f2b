use actix_web::{get, patch, put, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EntityQuery {
    pub entity: Option<String>,
}

#[get("")]
pub async fn get_systems_handler(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let systems = data.system.get_list.execute().await?;
    Ok(ApiResponse::success(systems))
}

#[get("/{id}")]
pub async fn get_system_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let system = data.system.get_single.execute(path.into_inner()).await?;
    Ok(ApiResponse::success(system))
}

#[put("/{id}")]
pub async fn update_system_handler(
    path: web::Path<Uuid>,
    payload: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let system = data
        .system
        .update
        .execute(path.into_inner(), payload.into_inner())
        .await?;
    Ok(ApiResponse::success(system))
}

#[patch("/{id}")]
pub async fn update_system_content_handler(
    path: web::Path<Uuid>,
    query: web::Query<EntityQuery>,
    payload: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let message = data
        .system
        .update_content
        .execute(path.into_inner(), query.into_inner().entity, payload.into_inner())
        .await?;
    Ok(ApiResponse::created(message))
}

#[patch("/activate/{id}")]
pub async fn activate_system_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let response = data
        .system
        .set_availability
        .execute(path.into_inner(), true)
        .await?;
    Ok(ApiResponse::success(response))
}

#[patch("/deactivate/{id}")]
pub async fn deactivate_system_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let response = data
        .system
        .set_availability
        .execute(path.into_inner(), false)
        .await?;
    Ok(ApiResponse::success(response))
}

pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dnd5e/system")
            .service(get_systems_handler)
            .service(get_system_handler)
            .service(update_system_handler)
            .service(activate_system_handler)
            .service(deactivate_system_handler)
            .service(update_system_content_handler),
    );
}
