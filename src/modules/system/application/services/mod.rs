mod system_availability_service;
mod system_query_service;
mod update_content_service;
mod update_system_service;

pub use system_availability_service::SystemAvailabilityService;
pub use system_query_service::SystemQueryService;
pub use update_content_service::UpdateSystemContentService;
pub use update_system_service::UpdateSystemService;
