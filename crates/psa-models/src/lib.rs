//! # psa-models
//!
//! Domain models for PSA RS: projects and the collections they own
//! (tasks, members, baselines, milestones, budget periods, change
//! requests), plus the create/update payloads accepted by the services.

pub mod baseline;
pub mod budget_period;
pub mod member;
pub mod milestone;
pub mod project;
pub mod request;
pub mod task;

pub use baseline::*;
pub use budget_period::*;
pub use member::*;
pub use milestone::*;
pub use project::*;
pub use request::*;
pub use task::*;
