pub mod domain;
pub mod ports;
pub mod services;
pub mod system_use_cases;

pub use system_use_cases::SystemUseCases;
