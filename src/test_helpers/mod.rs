use actix_web::{web, HttpResponse, Result};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::adapter::outgoing::CatalogRepositoryPostgres;
use crate::catalog::application::domain::{CatalogEntity, CatalogKind};
use crate::catalog::application::ports::outgoing::CatalogRepository;
use crate::system::adapter::outgoing::SystemRepositoryPostgres;
use crate::system::application::domain::{SystemContent, SystemDocument, SystemReferences};
use crate::system::application::ports::outgoing::SystemRepository;
use crate::user::adapter::outgoing::UserRepositoryPostgres;
use crate::user::application::ports::outgoing::{TokenProvider, UserRepository};

#[derive(Serialize)]
pub struct RandomAccountResponse {
    email: String,
    nickname: String,
    password: String,
}

#[derive(Serialize)]
pub struct PendingCodeResponse {
    status: String,
    code: String,
}

#[derive(Serialize)]
pub struct CleanupResponse {
    deleted_details: u64,
    deleted_users: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Deserialize)]
pub struct SeedCatalogPayload {
    en: serde_json::Value,
    pt: serde_json::Value,
    #[serde(default = "default_active")]
    active: bool,
}

#[derive(Deserialize)]
pub struct SeedSystemPayload {
    name: String,
    #[serde(default)]
    content: SystemContent,
    #[serde(default)]
    references: SystemReferences,
}

#[derive(Deserialize)]
pub struct TokenQuery {
    #[serde(default = "default_active")]
    verified: bool,
}

fn default_active() -> bool {
    true
}

fn internal(context: &str, e: impl std::fmt::Display) -> actix_web::Error {
    actix_web::error::ErrorInternalServerError(format!("{}: {}", context, e))
}

/// GET /test/account/random
pub async fn generate_random_account() -> Result<HttpResponse> {
    let ts = chrono::Utc::now().timestamp();
    let suffix: String = (0..4)
        .map(|_| format!("{:x}", rand::random::<u8>() % 16))
        .collect();

    Ok(HttpResponse::Ok().json(RandomAccountResponse {
        email: format!("player{}.{}@tablerise.test", ts, suffix),
        nickname: format!("player_{}", suffix),
        password: format!("Tr#{}{}", ts, suffix),
    }))
}

/// Pending verification code of a user, for flows that would otherwise need
/// a mailbox.
/// GET /test/users/{user_id}/code
pub async fn pending_code(
    user_id: web::Path<Uuid>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let repo = UserRepositoryPostgres::new(Arc::clone(db.get_ref()));
    let user = repo
        .find_by_id(user_id.into_inner())
        .await
        .map_err(|e| internal("User lookup failed", e))?;

    match user {
        Some(user) => Ok(HttpResponse::Ok().json(PendingCodeResponse {
            status: user.in_progress.status.to_string(),
            code: user.in_progress.code,
        })),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "User not found"
        }))),
    }
}

/// POST /test/seed/catalog/{kind}
pub async fn seed_catalog_entity(
    kind: web::Path<String>,
    payload: web::Json<SeedCatalogPayload>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let kind: CatalogKind = kind
        .into_inner()
        .parse()
        .map_err(actix_web::error::ErrorBadRequest)?;
    let payload = payload.into_inner();

    let mut entity = CatalogEntity::new(kind, payload.en, payload.pt);
    entity.active = payload.active;

    let repo = CatalogRepositoryPostgres::new(Arc::clone(db.get_ref()));
    let entity = repo
        .insert(entity)
        .await
        .map_err(|e| internal("Catalog seed failed", e))?;

    Ok(HttpResponse::Created().json(entity))
}

/// POST /test/seed/system
pub async fn seed_system(
    payload: web::Json<SeedSystemPayload>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let system = SystemDocument::new(payload.name, payload.content, payload.references);

    let repo = SystemRepositoryPostgres::new(Arc::clone(db.get_ref()));
    let system = repo
        .insert(system)
        .await
        .map_err(|e| internal("System seed failed", e))?;

    Ok(HttpResponse::Created().json(system))
}

/// DELETE /test/cleanup/all/{user_id}
pub async fn cleanup_test_user(
    user_id: web::Path<Uuid>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let user_id = user_id.into_inner();

    let txn = db
        .as_ref()
        .begin()
        .await
        .map_err(|e| internal("Transaction error", e))?;

    let details_result = txn
        .execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "DELETE FROM user_details WHERE user_id = $1",
            vec![user_id.into()],
        ))
        .await
        .map_err(|e| internal("Failed to delete user details", e))?;

    let user_result = txn
        .execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "DELETE FROM users WHERE id = $1",
            vec![user_id.into()],
        ))
        .await
        .map_err(|e| internal("Failed to delete user", e))?;

    if user_result.rows_affected() == 0 {
        txn.rollback().await.ok();
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "User not found"
        })));
    }

    txn.commit().await.map_err(|e| internal("Commit failed", e))?;

    Ok(HttpResponse::Ok().json(CleanupResponse {
        deleted_details: details_result.rows_affected(),
        deleted_users: user_result.rows_affected(),
    }))
}

/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        tracing::error!("Test helper routes active in production");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Access token for any user id, skipping login.
/// GET /test/token/{user_id}?verified=true
pub async fn generate_test_token(
    user_id: web::Path<Uuid>,
    query: web::Query<TokenQuery>,
    tokens: web::Data<Arc<dyn TokenProvider + Send + Sync>>,
) -> Result<HttpResponse> {
    let token = tokens
        .generate_access_token(user_id.into_inner(), query.verified)
        .map_err(|e| internal("Token generation failed", e))?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/account/random", web::get().to(generate_random_account))
            .route("/users/{user_id}/code", web::get().to(pending_code))
            .route("/seed/catalog/{kind}", web::post().to(seed_catalog_entity))
            .route("/seed/system", web::post().to(seed_system))
            .route("/cleanup/all/{user_id}", web::delete().to(cleanup_test_user))
            .route("/token/{user_id}", web::get().to(generate_test_token)),
    );
}
