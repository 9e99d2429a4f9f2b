pub mod codes;
pub mod entities;
pub mod state_machine;
