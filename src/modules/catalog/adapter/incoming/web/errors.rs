use tracing::error;

use crate::catalog::application::ports::incoming::use_cases::CatalogError;
use crate::shared::api::error::AVAILABILITY_BAD_REQUEST;
use crate::shared::api::ApiError;

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(violation) => violation.into(),
            CatalogError::NotFound | CatalogError::DeleteUnsupported(_) => {
                ApiError::not_found_by_id()
            }
            CatalogError::AvailabilityBadRequest => ApiError::bad_request(AVAILABILITY_BAD_REQUEST),
            CatalogError::Internal(msg) => {
                error!(error = %msg, "Catalog operation failed");
                ApiError::internal()
            }
        }
    }
}
