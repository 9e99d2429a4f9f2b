// src/shared/availability.rs
use serde::Serialize;
use std::fmt;

/// Body returned by every availability switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityResponse {
    pub message: String,
    pub name: String,
}

impl AvailabilityResponse {
    pub fn new(entity: &str, id: impl fmt::Display, active: bool) -> Self {
        let action = if active { "activated" } else { "deactivated" };
        Self {
            message: format!("{} {} was {}", entity, id, action),
            name: "success".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Availability is already {0}")]
pub struct AlreadyInState(pub bool);

/// Flips `current` to `desired`. Asking for the value already held is a
/// client error and leaves `current` untouched.
pub fn switch(current: &mut bool, desired: bool) -> Result<(), AlreadyInState> {
    if *current == desired {
        return Err(AlreadyInState(desired));
    }
    *current = desired;
    Ok(())
}
