// src/shared/api/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::shared::validation::{ErrorDetail, SchemaViolation};

pub const NOT_FOUND_BY_ID: &str = "NotFound an object with provided ID";
pub const AVAILABILITY_BAD_REQUEST: &str = "Not possible to change availability through this route";
pub const INVALID_QUERY: &str = "The query is invalid";
pub const SCHEMA_ERROR: &str = "Schema error";

/// Error returned to HTTP clients.
///
/// Serialized as `{message, code, name, error?, details?}` where `code` is the
/// numeric status and `error` carries the domain error code when one applies.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub name: String,
    pub message: String,
    pub error: Option<&'static str>,
    pub details: Vec<ErrorDetail>,
}

#[derive(Serialize)]
struct ApiErrorBody<'a> {
    message: &'a str,
    code: u16,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [ErrorDetail]>,
}

impl ApiError {
    pub fn new(status: StatusCode, name: &str, message: &str) -> Self {
        Self {
            status,
            name: name.to_string(),
            message: message.to_string(),
            error: None,
            details: Vec::new(),
        }
    }

    /// Error tagged with a domain error code (`invalid-user-status`, `2fa-incorrect`, ...).
    pub fn domain(status: StatusCode, code: &'static str, message: &str) -> Self {
        let name = kind_name(status);
        Self {
            error: Some(code),
            ..Self::new(status, name, message)
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NotFound", message)
    }

    pub fn not_found_by_id() -> Self {
        Self::not_found(NOT_FOUND_BY_ID)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BadRequest", message)
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", message)
    }

    pub fn forbidden(message: &str) -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden", message)
    }

    pub fn invalid_entry() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid Entry", INVALID_QUERY)
    }

    pub fn validation(details: Vec<ErrorDetail>) -> Self {
        Self {
            details,
            ..Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                SCHEMA_ERROR,
            )
        }
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalServerError",
            "An unexpected error occurred",
        )
    }
}

fn kind_name(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "BadRequest",
        StatusCode::UNAUTHORIZED => "Unauthorized",
        StatusCode::FORBIDDEN => "Forbidden",
        StatusCode::NOT_FOUND => "NotFound",
        StatusCode::UNPROCESSABLE_ENTITY => "ValidationError",
        _ => "InternalServerError",
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ApiErrorBody {
            message: &self.message,
            code: self.status.as_u16(),
            name: &self.name,
            error: self.error,
            details: (!self.details.is_empty()).then_some(self.details.as_slice()),
        })
    }
}

impl From<SchemaViolation> for ApiError {
    fn from(violation: SchemaViolation) -> Self {
        Self::validation(violation.details)
    }
}
