//! Core error types for the PSA engine
//!
//! Every failure here is per-operation and recoverable by retrying with
//! corrected input; nothing is fatal to the embedding process.

use std::collections::HashMap;
use thiserror::Error;

/// Core error type for all engine operations
#[derive(Error, Debug)]
pub enum PsaError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PsaError {
    pub fn not_found(
        entity: &'static str,
        field: &'static str,
        value: impl ToString,
    ) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Stable machine-readable code, consumed by presentation collaborators.
    pub fn error_code(&self) -> &'static str {
        match self {
            PsaError::NotFound { .. } => "not_found",
            PsaError::Validation(_) => "validation_failed",
            PsaError::Conflict { .. } => "conflict",
            PsaError::Config(_) => "configuration_error",
            PsaError::Internal(_) => "internal_error",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PsaError::NotFound { .. })
    }
}

/// Validation errors collection, keyed by field name
#[derive(Error, Debug, Default, Clone)]
#[error("Validation errors: {errors:?}")]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: HashMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
        self.base_errors.extend(other.base_errors);
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }
}
