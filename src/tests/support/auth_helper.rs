use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::tests::support::fakes::StubTokenProvider;
use crate::user::application::ports::outgoing::TokenProvider;

/// `Authorization` header carrying a verified token for `user_id`.
pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    (
        "Authorization",
        format!("Bearer {}", StubTokenProvider::token_for(user_id)),
    )
}

pub fn unverified_bearer(user_id: Uuid) -> (&'static str, String) {
    (
        "Authorization",
        format!("Bearer {}", StubTokenProvider::unverified_token_for(user_id)),
    )
}

/// Token provider as the auth extractors look it up.
pub fn token_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider);
    web::Data::new(provider)
}
