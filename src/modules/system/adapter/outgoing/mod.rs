pub mod sea_orm_entity;
mod system_repository_postgres;

pub use system_repository_postgres::SystemRepositoryPostgres;
