use actix_web::http::StatusCode;
use tracing::error;

use crate::shared::api::ApiError;
use crate::user::application::ports::incoming::use_cases::UserError;

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::Validation(violation) => violation.into(),
            UserError::BadRequest(msg) => ApiError::bad_request(&msg),
            UserError::Internal(msg) => {
                error!(error = %msg, "Account operation failed");
                ApiError::internal()
            }
            other => {
                let status = match other {
                    UserError::UserInexistent | UserError::UserNotFound => StatusCode::NOT_FOUND,
                    UserError::TwoFactorIncorrect | UserError::Login | UserError::Unauthorized => {
                        StatusCode::UNAUTHORIZED
                    }
                    _ => StatusCode::BAD_REQUEST,
                };
                match other.code() {
                    Some(code) => ApiError::domain(status, code, &message),
                    None => ApiError::new(status, "BadRequest", &message),
                }
            }
        }
    }
}
