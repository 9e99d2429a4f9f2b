mod catalog_query_service;
mod delete_catalog_entity_service;
mod toggle_availability_service;
mod update_catalog_entity_service;

pub use catalog_query_service::CatalogQueryService;
pub use delete_catalog_entity_service::DeleteCatalogEntityService;
pub use toggle_availability_service::ToggleAvailabilityService;
pub use update_catalog_entity_service::UpdateCatalogEntityService;
