// src/shared/api/json_config.rs
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

use crate::shared::api::{ApiError, ApiResponse};
use crate::shared::validation::ErrorDetail;

/// Malformed JSON bodies are reported like schema failures.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let detail = ErrorDetail {
            attribute: "payload".to_string(),
            path: Vec::new(),
            reason: err.to_string(),
        };
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::error(ApiError::validation(vec![detail])),
        )
        .into()
    })
}

/// Query strings that fail to deserialize (e.g. `availability=maybe`).
pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::error(ApiError::invalid_entry()),
        )
        .into()
    })
}

/// Ids that do not parse can never match a stored object.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(err, ApiResponse::not_found()).into()
    })
}
