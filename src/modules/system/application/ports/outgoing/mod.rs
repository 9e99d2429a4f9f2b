pub mod system_repository;

pub use system_repository::{SystemRepository, SystemRepositoryError};
