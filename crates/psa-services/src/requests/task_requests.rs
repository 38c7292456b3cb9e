//! Task request workflow
//!
//! A task request is the auditable exception that releases a locked task:
//! approval unlocks the task, extends its end date to the proposed one,
//! and reactivates it. Rejection leaves the task untouched.

use chrono::Utc;
use psa_contracts::base::{ActorContext, Contract};
use psa_contracts::requests::SubmitTaskRequestContract;
use psa_core::error::PsaError;
use psa_core::traits::{Entity, Id};
use psa_models::request::{ApprovalLevel, RequestStatus, SubmitTaskRequestDto, TaskRequest};
use psa_models::task::{Task, TaskStatus};
use psa_store::EntityStore;
use tracing::info;
use uuid::Uuid;

use crate::result::ServiceResult;

/// Service for submitting a task request
///
/// Multiple open requests against one task are allowed; submissions do not
/// supersede earlier pending requests.
pub struct SubmitTaskRequestService<'a, U: ActorContext> {
    store: &'a mut EntityStore,
    actor: &'a U,
}

impl<'a, U: ActorContext> SubmitTaskRequestService<'a, U> {
    pub fn new(store: &'a mut EntityStore, actor: &'a U) -> Self {
        Self { store, actor }
    }

    pub fn call(self, project_id: Id, dto: SubmitTaskRequestDto) -> ServiceResult<TaskRequest> {
        let project = match self.store.project(project_id) {
            Ok(project) => project,
            Err(e) => return ServiceResult::failure_from(e),
        };

        let contract = SubmitTaskRequestContract::new(project);
        if let Err(errors) = contract.validate(&dto) {
            return ServiceResult::failure(errors);
        }

        let request = TaskRequest {
            id: Uuid::new_v4(),
            task_id: dto.task_id,
            project_id,
            requested_by: self.actor.username().to_string(),
            reason: dto.reason,
            proposed_end_date: dto.proposed_end_date,
            status: RequestStatus::Pending,
            submitted_at: Utc::now(),
            decided_by: None,
            decided_at: None,
        };

        match self.store.add_task_request(project_id, request) {
            Ok(request) => {
                info!(project_id, task_id = request.task_id, "task request submitted");
                ServiceResult::success(request)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}

/// Service for approving a task request
pub struct ApproveTaskRequestService<'a, U: ActorContext> {
    store: &'a mut EntityStore,
    actor: &'a U,
}

impl<'a, U: ActorContext> ApproveTaskRequestService<'a, U> {
    pub fn new(store: &'a mut EntityStore, actor: &'a U) -> Self {
        Self { store, actor }
    }

    pub fn call(self, project_id: Id, request_id: Uuid) -> ServiceResult<TaskRequest> {
        if !self.actor.can_approve(ApprovalLevel::Manager) {
            return ServiceResult::failure_with_base_error(
                "You are not authorized to approve task requests",
            );
        }

        let approver = self.actor.username().to_string();
        let result = self.store.with_project_mut(project_id, |project| {
            let request = project
                .task_request(request_id)
                .cloned()
                .ok_or_else(|| PsaError::not_found("TaskRequest", "id", request_id))?;

            if !request.is_open() {
                return Err(PsaError::conflict(format!(
                    "task request {} has already been decided",
                    request_id
                )));
            }

            // The governed task must still exist; a vanished target is a
            // hard reference error, not a silent no-op.
            let task = project
                .task_mut(request.task_id)
                .ok_or_else(|| PsaError::not_found(Task::TYPE_NAME, "id", request.task_id))?;

            task.locked = false;
            task.end_date = request.proposed_end_date;
            task.status = TaskStatus::Active;
            task.updated_at = Some(Utc::now());

            let request = project
                .task_request_mut(request_id)
                .ok_or_else(|| PsaError::not_found("TaskRequest", "id", request_id))?;
            request.status = RequestStatus::Approved;
            request.decided_by = Some(approver);
            request.decided_at = Some(Utc::now());
            Ok(request.clone())
        });

        match result {
            Ok(request) => {
                info!(project_id, task_id = request.task_id, "task request approved");
                ServiceResult::success(request)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}

/// Service for rejecting a task request
pub struct RejectTaskRequestService<'a, U: ActorContext> {
    store: &'a mut EntityStore,
    actor: &'a U,
}

impl<'a, U: ActorContext> RejectTaskRequestService<'a, U> {
    pub fn new(store: &'a mut EntityStore, actor: &'a U) -> Self {
        Self { store, actor }
    }

    pub fn call(self, project_id: Id, request_id: Uuid) -> ServiceResult<TaskRequest> {
        if !self.actor.can_approve(ApprovalLevel::Manager) {
            return ServiceResult::failure_with_base_error(
                "You are not authorized to reject task requests",
            );
        }

        let decider = self.actor.username().to_string();
        let result = self.store.with_project_mut(project_id, |project| {
            let request = project
                .task_request_mut(request_id)
                .ok_or_else(|| PsaError::not_found("TaskRequest", "id", request_id))?;

            if !request.is_open() {
                return Err(PsaError::conflict(format!(
                    "task request {} has already been decided",
                    request_id
                )));
            }

            request.status = RequestStatus::Rejected;
            request.decided_by = Some(decider);
            request.decided_at = Some(Utc::now());
            Ok(request.clone())
        });

        match result {
            Ok(request) => {
                info!(project_id, task_id = request.task_id, "task request rejected");
                ServiceResult::success(request)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}
