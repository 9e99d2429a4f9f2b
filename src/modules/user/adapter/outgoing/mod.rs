pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
mod user_details_repository_postgres;
mod user_repository_postgres;

pub use user_details_repository_postgres::UserDetailsRepositoryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
