// src/shared/api/response.rs
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use super::error::ApiError;

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(err: impl Into<ApiError>) -> HttpResponse {
        err.into().error_response()
    }

    pub fn not_found() -> HttpResponse {
        Self::error(ApiError::not_found_by_id())
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(ApiError::bad_request(message))
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(ApiError::unauthorized(message))
    }

    pub fn forbidden(message: &str) -> HttpResponse {
        Self::error(ApiError::forbidden(message))
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(ApiError::internal())
    }
}
