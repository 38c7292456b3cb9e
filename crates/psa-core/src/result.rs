//! Result type alias for engine operations

use crate::error::PsaError;

/// Standard Result type for PSA engine operations
pub type PsaResult<T> = Result<T, PsaError>;
