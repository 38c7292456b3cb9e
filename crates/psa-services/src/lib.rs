//! # psa-services
//!
//! Business logic services for PSA RS.
//!
//! Services are the engine's operation contracts: task creation and
//! timesheet posting, the lock sweep, baseline freezing and variance,
//! budget/EVM derivations, and the two approval workflows. Each service
//! validates through `psa-contracts` before touching the store and
//! reports through `ServiceResult`.

pub mod baselines;
pub mod budget;
pub mod lifecycle;
pub mod members;
pub mod milestones;
pub mod projects;
pub mod requests;
pub mod result;
pub mod tasks;

pub use result::ServiceResult;
