//! Base contract system

use psa_core::error::ValidationErrors;
use psa_models::request::ApprovalLevel;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Trait for the acting user in contracts and services
///
/// The engine has no user directory of its own; collaborators supply an
/// actor implementing this trait. The username is stamped into audit
/// fields, the role flags gate approval levels.
pub trait ActorContext: Send + Sync {
    fn username(&self) -> &str;
    fn is_admin(&self) -> bool;
    fn is_manager(&self) -> bool;

    fn can_approve(&self, level: ApprovalLevel) -> bool {
        match level {
            ApprovalLevel::Manager => self.is_manager() || self.is_admin(),
            ApprovalLevel::Admin => self.is_admin(),
        }
    }
}

/// Base contract trait
pub trait Contract<T>: Send + Sync {
    /// Validate the payload against the current state
    fn validate(&self, payload: &T) -> ValidationResult;
}
