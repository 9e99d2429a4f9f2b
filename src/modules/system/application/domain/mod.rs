pub mod entities;
pub mod schemas;

pub use entities::{ContentField, SystemContent, SystemDocument, SystemReferences};
