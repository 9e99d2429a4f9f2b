use actix_web::{dev::Payload, http::StatusCode, web, Error as ActixError, FromRequest, HttpRequest};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::warn;
use uuid::Uuid;

use crate::shared::api::ApiError;
use crate::user::application::ports::outgoing::TokenProvider;

/// Bearer-token holder, verified or not.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub is_verified: bool,
}

impl AuthenticatedUser {
    /// Accounts may only manage themselves.
    pub fn ensure_owner(&self, user_id: Uuid) -> Result<(), ApiError> {
        if self.user_id != user_id {
            warn!(token_sub = %self.user_id, %user_id, "Token does not own the requested account");
            return Err(ApiError::forbidden("Token does not match the requested user"));
        }
        Ok(())
    }
}

fn unauthorized(message: &str) -> ActixError {
    ApiError::domain(StatusCode::UNAUTHORIZED, "unauthorized", message).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(tokens) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        else {
            return ready(Err(ApiError::internal().into()));
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(unauthorized("Missing or invalid authorization header")));
        };

        match tokens.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
                is_verified: claims.is_verified,
            })),
            Err(_) => ready(Err(unauthorized("Invalid or expired token"))),
        }
    }
}

/// Bearer-token holder whose email is confirmed.
#[derive(Debug, Clone)]
pub struct VerifiedUser {
    pub user_id: Uuid,
}

impl VerifiedUser {
    pub fn ensure_owner(&self, user_id: Uuid) -> Result<(), ApiError> {
        AuthenticatedUser {
            user_id: self.user_id,
            is_verified: true,
        }
        .ensure_owner(user_id)
    }
}

impl FromRequest for VerifiedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) if user.is_verified => ready(Ok(VerifiedUser {
                user_id: user.user_id,
            })),
            Ok(_) => ready(Err(ApiError::forbidden("Email verification required").into())),
            Err(e) => ready(Err(e)),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
