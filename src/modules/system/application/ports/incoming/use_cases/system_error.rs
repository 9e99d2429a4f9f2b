use crate::shared::api::error::{AVAILABILITY_BAD_REQUEST, NOT_FOUND_BY_ID};
use crate::shared::availability::AlreadyInState;
use crate::shared::validation::SchemaViolation;
use crate::system::application::domain::entities::UnknownContentField;
use crate::system::application::ports::outgoing::SystemRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SystemError {
    #[error(transparent)]
    Validation(#[from] SchemaViolation),

    #[error("{}", NOT_FOUND_BY_ID)]
    NotFound,

    #[error("{}", AVAILABILITY_BAD_REQUEST)]
    AvailabilityBadRequest,

    #[error("Invalid entity field")]
    InvalidContentField(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SystemRepositoryError> for SystemError {
    fn from(err: SystemRepositoryError) -> Self {
        match err {
            SystemRepositoryError::NotFound => SystemError::NotFound,
            SystemRepositoryError::DatabaseError(msg) => SystemError::Internal(msg),
        }
    }
}

impl From<AlreadyInState> for SystemError {
    fn from(_: AlreadyInState) -> Self {
        SystemError::AvailabilityBadRequest
    }
}

impl From<UnknownContentField> for SystemError {
    fn from(err: UnknownContentField) -> Self {
        SystemError::InvalidContentField(err.0)
    }
}
