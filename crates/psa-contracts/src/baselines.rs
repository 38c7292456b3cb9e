//! Contracts for baseline operations

use psa_core::error::ValidationErrors;

use crate::base::{Contract, ValidationResult};

/// Payload for freezing a baseline
#[derive(Debug, Clone)]
pub struct CreateBaselinePayload {
    pub name: String,
}

/// Contract for creating a baseline
pub struct CreateBaselineContract;

impl Contract<CreateBaselinePayload> for CreateBaselineContract {
    fn validate(&self, payload: &CreateBaselinePayload) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if payload.name.trim().is_empty() {
            errors.add("name", "can't be blank");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
