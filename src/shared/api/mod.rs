pub mod error;
pub mod json_config;
pub mod response;

pub use error::ApiError;
pub use response::ApiResponse;
