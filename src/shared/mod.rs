pub mod api;
pub mod availability;
pub mod reference_list;
pub mod validation;
