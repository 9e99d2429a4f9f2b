pub mod catalog;
pub mod email;
pub mod system;
pub mod user;
