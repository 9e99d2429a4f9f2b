use tracing::error;

use crate::shared::api::error::AVAILABILITY_BAD_REQUEST;
use crate::shared::api::ApiError;
use crate::system::application::ports::incoming::use_cases::SystemError;

impl From<SystemError> for ApiError {
    fn from(err: SystemError) -> Self {
        match err {
            SystemError::Validation(violation) => violation.into(),
            SystemError::NotFound => ApiError::not_found_by_id(),
            SystemError::AvailabilityBadRequest => ApiError::bad_request(AVAILABILITY_BAD_REQUEST),
            SystemError::InvalidContentField(_) => ApiError::bad_request("Invalid entity field"),
            SystemError::Internal(msg) => {
                error!(error = %msg, "System operation failed");
                ApiError::internal()
            }
        }
    }
}
