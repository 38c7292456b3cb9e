//! Service result type

use psa_core::error::{PsaError, ValidationErrors};
use psa_core::result::PsaResult;
use std::fmt;

/// Represents the result of a service call
///
/// Validation failures carry field-keyed errors; reference and conflict
/// failures additionally keep the typed source error so callers can
/// distinguish a missing target from bad input.
#[derive(Debug)]
pub struct ServiceResult<T> {
    success: bool,
    result: Option<T>,
    errors: ValidationErrors,
    source: Option<PsaError>,
    message: Option<String>,
}

impl<T> ServiceResult<T> {
    /// Create a successful service result
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: ValidationErrors::new(),
            source: None,
            message: None,
        }
    }

    /// Create a failed service result
    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
            source: None,
            message: None,
        }
    }

    /// Create a failed service result with a single field error
    pub fn failure_with_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        Self::failure(errors)
    }

    /// Create a failed service result with a base error
    pub fn failure_with_base_error(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(message);
        Self::failure(errors)
    }

    /// Create a failed service result from a typed engine error
    pub fn failure_from(error: PsaError) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(error.to_string());
        Self {
            success: false,
            result: None,
            errors,
            source: Some(error),
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Get the result (if successful)
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Take the result (consuming it)
    pub fn take_result(&mut self) -> Option<T> {
        self.result.take()
    }

    /// Unwrap the result, panicking if it was a failure
    pub fn unwrap(self) -> T {
        self.result.expect("called unwrap on a failed ServiceResult")
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The typed source error, when the failure was not plain validation
    pub fn source(&self) -> Option<&PsaError> {
        self.source.as_ref()
    }

    pub fn is_not_found(&self) -> bool {
        self.source.as_ref().map(PsaError::is_not_found).unwrap_or(false)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.errors.full_messages()
    }

    /// Map the result if successful
    pub fn map<U, F>(self, f: F) -> ServiceResult<U>
    where
        F: FnOnce(T) -> U,
    {
        ServiceResult {
            success: self.success,
            result: self.result.map(f),
            errors: self.errors,
            source: self.source,
            message: self.message,
        }
    }

    /// Convert to a standard Result, preserving the typed error when present
    pub fn into_result(self) -> PsaResult<T> {
        if self.success {
            self.result.ok_or_else(|| {
                PsaError::Internal("service succeeded but no result was returned".into())
            })
        } else if let Some(source) = self.source {
            Err(source)
        } else {
            Err(PsaError::Validation(self.errors))
        }
    }
}

impl<T> From<PsaResult<T>> for ServiceResult<T> {
    fn from(result: PsaResult<T>) -> Self {
        match result {
            Ok(value) => ServiceResult::success(value),
            Err(PsaError::Validation(errors)) => ServiceResult::failure(errors),
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ServiceResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            match self.result {
                Some(ref result) => write!(f, "Success: {}", result),
                None => write!(f, "Success"),
            }
        } else {
            write!(f, "Failure: {}", self.errors.full_messages().join(", "))
        }
    }
}
