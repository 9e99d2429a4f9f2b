pub mod app_state_builder;
pub mod auth_helper;
pub mod catalog_fixtures;
pub mod fakes;
pub mod in_memory;
pub mod user_fixtures;
