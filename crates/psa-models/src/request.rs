//! Change request models
//!
//! Two independent approval state machines: single-gate task requests
//! (deadline extensions against locked tasks) and dual-gate baseline
//! requests (manager then admin).

use chrono::{DateTime, NaiveDate, Utc};
use psa_core::traits::{Id, ProjectScoped};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Task request status; Approved and Rejected are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Status of a single approval gate on a baseline request
///
/// There is no rejected state: baseline request gates only ever move from
/// Pending to Approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    #[default]
    Pending,
    Approved,
}

impl GateStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Approval gate level for baseline requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalLevel {
    Manager,
    Admin,
}

/// Request to unlock a task and extend its deadline
///
/// Multiple open requests against the same task are permitted and not
/// deduplicated; the presentation layer shows the last submitted one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub id: Uuid,
    pub task_id: Id,
    pub project_id: Id,
    pub requested_by: String,
    pub reason: String,
    pub proposed_end_date: NaiveDate,
    #[serde(default)]
    pub status: RequestStatus,
    pub submitted_at: DateTime<Utc>,
    pub decided_by: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl TaskRequest {
    pub fn is_open(&self) -> bool {
        matches!(self.status, RequestStatus::Pending)
    }
}

impl ProjectScoped for TaskRequest {
    fn project_id(&self) -> Option<Id> {
        Some(self.project_id)
    }
}

/// DTO for submitting a task request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTaskRequestDto {
    pub task_id: Id,
    #[validate(length(min = 1, max = 2000))]
    pub reason: String,
    pub proposed_end_date: NaiveDate,
}

/// Request to change governed baseline data, approved through two gates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineRequest {
    pub id: Uuid,
    pub project_id: Id,
    pub requested_by: String,
    pub requested_changes: String,
    pub reason: String,
    #[serde(default)]
    pub manager_status: GateStatus,
    #[serde(default)]
    pub admin_status: GateStatus,
    #[serde(default)]
    pub final_status: GateStatus,
    pub manager_approved_by: Option<String>,
    pub manager_approved_at: Option<DateTime<Utc>>,
    pub admin_approved_by: Option<String>,
    pub admin_approved_at: Option<DateTime<Utc>>,
    pub submitted_at: DateTime<Utc>,
}

impl BaselineRequest {
    pub fn both_gates_approved(&self) -> bool {
        self.manager_status.is_approved() && self.admin_status.is_approved()
    }
}

impl ProjectScoped for BaselineRequest {
    fn project_id(&self) -> Option<Id> {
        Some(self.project_id)
    }
}

/// DTO for submitting a baseline request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBaselineRequestDto {
    #[validate(length(min = 1, max = 5000))]
    pub requested_changes: String,
    #[validate(length(min = 1, max = 2000))]
    pub reason: String,
}
