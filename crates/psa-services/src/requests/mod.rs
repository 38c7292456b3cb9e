//! Approval workflow services
//!
//! Two independent state machines, both externally triggered: single-gate
//! task requests and dual-gate (manager then admin) baseline requests.

mod baseline_requests;
mod task_requests;

pub use baseline_requests::{ApproveBaselineRequestService, SubmitBaselineRequestService};
pub use task_requests::{
    ApproveTaskRequestService, RejectTaskRequestService, SubmitTaskRequestService,
};
