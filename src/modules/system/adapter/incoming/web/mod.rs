mod errors;
pub mod routes;
