use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::state_machine::UserStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub provider_id: Option<String>,
    pub nickname: String,
    pub tag: String,
    pub picture: Option<String>,
    pub in_progress: InProgress,
    pub two_factor_secret: TwoFactorSecret,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outstanding verification, if any. `code` is empty when nothing is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InProgress {
    pub status: UserStatus,
    pub code: String,
}

impl InProgress {
    pub fn issue(status: UserStatus, code: String) -> Self {
        Self { status, code }
    }

    pub fn settle(status: UserStatus) -> Self {
        Self {
            status,
            code: String::new(),
        }
    }

    pub fn matches(&self, code: &str) -> bool {
        !self.code.is_empty() && self.code == code
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoFactorSecret {
    pub secret: Option<String>,
    pub qrcode: Option<String>,
    pub active: bool,
}

impl TwoFactorSecret {
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn activated(secret: String, qrcode: String) -> Self {
        Self {
            secret: Some(secret),
            qrcode: Some(qrcode),
            active: true,
        }
    }

    /// Only an active secret enforces a one-time password.
    pub fn configured_secret(&self) -> Option<&str> {
        if self.active {
            self.secret.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretQuestion {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub campaigns: Vec<String>,
    pub characters: Vec<String>,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameInfoTarget {
    Campaigns,
    Characters,
    Badges,
}

impl GameInfo {
    pub fn list_mut(&mut self, target: GameInfoTarget) -> &mut Vec<String> {
        match target {
            GameInfoTarget::Campaigns => &mut self.campaigns,
            GameInfoTarget::Characters => &mut self.characters,
            GameInfoTarget::Badges => &mut self.badges,
        }
    }
}

/// Extended profile, 1:1 with [`User`].
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetail {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub pronoun: Option<String>,
    pub birthday: Option<String>,
    pub biography: Option<String>,
    pub role: Role,
    pub secret_question: Option<SecretQuestion>,
    pub game_info: GameInfo,
}

impl UserDetail {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            first_name: None,
            last_name: None,
            pronoun: None,
            birthday: None,
            biography: None,
            role: Role::User,
            secret_question: None,
            game_info: GameInfo::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountSecurityMethod {
    TwoFactor,
    SecretQuestion,
}

impl AccountSecurityMethod {
    pub fn of(user: &User) -> Self {
        if user.two_factor_secret.active {
            AccountSecurityMethod::TwoFactor
        } else {
            AccountSecurityMethod::SecretQuestion
        }
    }
}

/// What the verification guard hands to the operation it protects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationContext {
    pub user_id: Uuid,
    pub user_status: UserStatus,
    pub account_security_method: AccountSecurityMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_question: Option<String>,
    pub last_update: DateTime<Utc>,
}

// ============================================================================
// Read models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InProgressView {
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorView {
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailView {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub pronoun: Option<String>,
    pub birthday: Option<String>,
    pub biography: Option<String>,
    pub role: Role,
    pub game_info: GameInfo,
}

impl From<UserDetail> for UserDetailView {
    fn from(detail: UserDetail) -> Self {
        Self {
            first_name: detail.first_name,
            last_name: detail.last_name,
            pronoun: detail.pronoun,
            birthday: detail.birthday,
            biography: detail.biography,
            role: detail.role,
            game_info: detail.game_info,
        }
    }
}

/// Public shape of an account. Never carries the password hash, the pending
/// code or the two-factor secret.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub provider_id: Option<String>,
    pub nickname: String,
    pub tag: String,
    pub picture: Option<String>,
    pub in_progress: InProgressView,
    pub two_factor_secret: TwoFactorView,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<UserDetailView>,
}

impl UserView {
    pub fn new(user: User, detail: Option<UserDetail>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            provider_id: user.provider_id,
            nickname: user.nickname,
            tag: user.tag,
            picture: user.picture,
            in_progress: InProgressView {
                status: user.in_progress.status,
            },
            two_factor_secret: TwoFactorView {
                active: user.two_factor_secret.active,
            },
            created_at: user.created_at,
            updated_at: user.updated_at,
            details: detail.map(UserDetailView::from),
        }
    }
}
