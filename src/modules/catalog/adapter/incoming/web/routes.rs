use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::application::domain::CatalogKind;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub availability: bool,
}

pub async fn get_entities_handler(
    kind: web::Data<CatalogKind>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let entities = data.catalog.get_list.execute(**kind, true).await?;
    Ok(ApiResponse::success(entities))
}

pub async fn get_disabled_entities_handler(
    kind: web::Data<CatalogKind>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let entities = data.catalog.get_list.execute(**kind, false).await?;
    Ok(ApiResponse::success(entities))
}

pub async fn get_entity_handler(
    kind: web::Data<CatalogKind>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let entity = data
        .catalog
        .get_single
        .execute(**kind, path.into_inner())
        .await?;
    Ok(ApiResponse::success(entity))
}

pub async fn update_entity_handler(
    kind: web::Data<CatalogKind>,
    path: web::Path<Uuid>,
    payload: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let entity = data
        .catalog
        .update
        .execute(**kind, path.into_inner(), payload.into_inner())
        .await?;
    Ok(ApiResponse::success(entity))
}

pub async fn toggle_availability_handler(
    kind: web::Data<CatalogKind>,
    path: web::Path<Uuid>,
    query: web::Query<AvailabilityQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let response = data
        .catalog
        .toggle_availability
        .execute(**kind, path.into_inner(), query.availability)
        .await?;
    Ok(ApiResponse::success(response))
}

pub async fn delete_entity_handler(
    kind: web::Data<CatalogKind>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    data.catalog
        .delete
        .execute(**kind, path.into_inner())
        .await?;
    Ok(ApiResponse::no_content())
}

fn kind_scope(kind: CatalogKind) -> actix_web::Scope {
    let item = web::resource("/{id}")
        .route(web::get().to(get_entity_handler))
        .route(web::put().to(update_entity_handler))
        .route(web::patch().to(toggle_availability_handler));

    // Kinds without delete answer 405 from the resource.
    let item = if kind.supports_delete() {
        item.route(web::delete().to(delete_entity_handler))
    } else {
        item
    };

    web::scope(&format!("/{}", kind.segment()))
        .app_data(web::Data::new(kind))
        .route("", web::get().to(get_entities_handler))
        .route("/disabled", web::get().to(get_disabled_entities_handler))
        .service(item)
}

/// Mounts one scope per catalog kind, e.g. `/monsters`, `/magicitems`.
pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    for kind in CatalogKind::ALL {
        cfg.service(kind_scope(kind));
    }
}
