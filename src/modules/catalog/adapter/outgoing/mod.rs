mod catalog_repository_postgres;
pub mod sea_orm_entity;

pub use catalog_repository_postgres::CatalogRepositoryPostgres;
