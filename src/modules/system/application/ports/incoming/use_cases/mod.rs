mod system_commands;
mod system_error;
mod system_queries;

pub use system_commands::{
    SetSystemAvailabilityUseCase, UpdateSystemContentUseCase, UpdateSystemUseCase,
};
pub use system_error::SystemError;
pub use system_queries::{GetSystemUseCase, GetSystemsUseCase};
