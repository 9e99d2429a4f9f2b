use crate::shared::validation::SchemaViolation;
use crate::user::application::domain::state_machine::TransitionError;
use crate::user::application::ports::outgoing::{
    HashError, OtpError, TokenError, UserDetailsRepositoryError, UserRepositoryError,
};

/// Failures shared by every account operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UserError {
    #[error(transparent)]
    Validation(#[from] SchemaViolation),

    #[error("{0}")]
    BadRequest(String),

    #[error("User does not exist")]
    UserInexistent,

    #[error("User not found")]
    UserNotFound,

    #[error("Email already exists in database")]
    EmailAlreadyExist,

    #[error("Tag already exists in database")]
    TagAlreadyExist,

    #[error("Secret question or answer cannot be blank")]
    BlankQuestionOrAnswer,

    #[error("User status is invalid to perform this operation")]
    InvalidUserStatus,

    #[error("Invalid email verify code")]
    InvalidEmailVerifyCode,

    #[error("Two factor code does not match")]
    TwoFactorIncorrect,

    #[error("Two factor is already active")]
    TwoFactorAlreadyActive,

    #[error("Two factor is not active for this user")]
    TwoFactorNoActive,

    #[error("The code query must be a string")]
    QueryString,

    #[error("Unable to login")]
    Login,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// Stable error code exposed to clients.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            UserError::Validation(_) | UserError::BadRequest(_) | UserError::Internal(_) => None,
            UserError::UserInexistent => Some("user-inexistent"),
            UserError::UserNotFound => Some("user"),
            UserError::EmailAlreadyExist => Some("email-already-exist"),
            UserError::TagAlreadyExist => Some("tag-already-exist"),
            UserError::BlankQuestionOrAnswer => Some("blank-question-or-answer"),
            UserError::InvalidUserStatus => Some("invalid-user-status"),
            UserError::InvalidEmailVerifyCode => Some("invalid-email-verify-code"),
            UserError::TwoFactorIncorrect => Some("2fa-incorrect"),
            UserError::TwoFactorAlreadyActive => Some("2fa-already-active"),
            UserError::TwoFactorNoActive => Some("2fa-no-active"),
            UserError::QueryString => Some("query-string"),
            UserError::Login => Some("login"),
            UserError::Unauthorized => Some("unauthorized"),
        }
    }
}

impl From<UserRepositoryError> for UserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserAlreadyExists => UserError::EmailAlreadyExist,
            UserRepositoryError::UserNotFound => UserError::UserInexistent,
            UserRepositoryError::DatabaseError(msg) => UserError::Internal(msg),
        }
    }
}

impl From<UserDetailsRepositoryError> for UserError {
    fn from(err: UserDetailsRepositoryError) -> Self {
        match err {
            UserDetailsRepositoryError::NotFound => UserError::UserInexistent,
            UserDetailsRepositoryError::DatabaseError(msg) => UserError::Internal(msg),
        }
    }
}

impl From<HashError> for UserError {
    fn from(err: HashError) -> Self {
        UserError::Internal(err.to_string())
    }
}

impl From<OtpError> for UserError {
    fn from(err: OtpError) -> Self {
        UserError::Internal(err.to_string())
    }
}

impl From<TokenError> for UserError {
    fn from(err: TokenError) -> Self {
        UserError::Internal(err.to_string())
    }
}

impl From<TransitionError> for UserError {
    fn from(_: TransitionError) -> Self {
        UserError::InvalidUserStatus
    }
}
