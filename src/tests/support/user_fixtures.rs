use chrono::Utc;
use uuid::Uuid;

use crate::user::application::domain::entities::{
    InProgress, SecretQuestion, TwoFactorSecret, User, UserDetail,
};
use crate::user::application::domain::state_machine::UserStatus;

pub const TEST_PASSWORD: &str = "Secret#123";

/// Hash produced by `StubPasswordHasher` for [`TEST_PASSWORD`].
pub fn stub_hash(password: &str) -> String {
    format!("hashed::{}", password)
}

pub fn user_with_status(status: UserStatus, code: &str) -> User {
    let now = Utc::now();
    let id = Uuid::new_v4();
    User {
        id,
        email: format!("{}@tablerise.test", id.simple()),
        password_hash: stub_hash(TEST_PASSWORD),
        provider_id: None,
        nickname: "aragorn".to_string(),
        tag: "#0001".to_string(),
        picture: None,
        in_progress: InProgress::issue(status, code.to_string()),
        two_factor_secret: TwoFactorSecret::inactive(),
        created_at: now,
        updated_at: now,
    }
}

pub fn done_user() -> User {
    user_with_status(UserStatus::Done, "")
}

pub fn with_two_factor(mut user: User, secret: &str) -> User {
    user.two_factor_secret = TwoFactorSecret::activated(
        secret.to_string(),
        format!("otpauth://totp/TableRise:{}?secret={}", user.email, secret),
    );
    user
}

pub fn detail_for(user: &User) -> UserDetail {
    let mut detail = UserDetail::empty(user.id);
    detail.secret_question = Some(SecretQuestion {
        question: "First pet?".to_string(),
        answer: "Shadowfax".to_string(),
    });
    detail
}
