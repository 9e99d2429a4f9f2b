pub mod catalog_kind;
pub mod entities;
pub mod schemas;

pub use catalog_kind::CatalogKind;
pub use entities::CatalogEntity;
