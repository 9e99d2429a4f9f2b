mod catalog_commands;
mod catalog_error;
mod catalog_queries;

pub use catalog_commands::{
    DeleteCatalogEntityUseCase, ToggleAvailabilityUseCase, UpdateCatalogEntityUseCase,
};
pub use catalog_error::CatalogError;
pub use catalog_queries::{GetCatalogEntitiesUseCase, GetCatalogEntityUseCase};
