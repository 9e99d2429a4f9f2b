use crate::catalog::application::domain::CatalogKind;
use crate::catalog::application::ports::outgoing::CatalogRepositoryError;
use crate::shared::api::error::{AVAILABILITY_BAD_REQUEST, NOT_FOUND_BY_ID};
use crate::shared::availability::AlreadyInState;
use crate::shared::validation::SchemaViolation;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] SchemaViolation),

    #[error("{}", NOT_FOUND_BY_ID)]
    NotFound,

    #[error("{}", AVAILABILITY_BAD_REQUEST)]
    AvailabilityBadRequest,

    #[error("{0} entities cannot be deleted")]
    DeleteUnsupported(CatalogKind),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CatalogRepositoryError> for CatalogError {
    fn from(err: CatalogRepositoryError) -> Self {
        match err {
            CatalogRepositoryError::NotFound => CatalogError::NotFound,
            CatalogRepositoryError::DatabaseError(msg) => CatalogError::Internal(msg),
        }
    }
}

impl From<AlreadyInState> for CatalogError {
    fn from(_: AlreadyInState) -> Self {
        CatalogError::AvailabilityBadRequest
    }
}
