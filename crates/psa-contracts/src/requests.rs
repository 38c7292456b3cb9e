//! Contracts for change request operations

use psa_core::error::ValidationErrors;
use psa_models::project::Project;
use psa_models::request::{ApprovalLevel, SubmitBaselineRequestDto, SubmitTaskRequestDto};

use crate::base::{ActorContext, Contract, ValidationResult};

/// Contract for submitting a task request
pub struct SubmitTaskRequestContract<'a> {
    project: &'a Project,
}

impl<'a> SubmitTaskRequestContract<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }
}

impl<'a> Contract<SubmitTaskRequestDto> for SubmitTaskRequestContract<'a> {
    fn validate(&self, dto: &SubmitTaskRequestDto) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if dto.reason.trim().is_empty() {
            errors.add("reason", "can't be blank");
        }
        if self.project.task(dto.task_id).is_none() {
            errors.add("taskId", "references an unknown task");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Contract for submitting a baseline request
pub struct SubmitBaselineRequestContract;

impl Contract<SubmitBaselineRequestDto> for SubmitBaselineRequestContract {
    fn validate(&self, dto: &SubmitBaselineRequestDto) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if dto.requested_changes.trim().is_empty() {
            errors.add("requestedChanges", "can't be blank");
        }
        if dto.reason.trim().is_empty() {
            errors.add("reason", "can't be blank");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Contract checking the acting user may operate an approval gate
pub struct ApprovalGateContract<'a, U: ActorContext> {
    actor: &'a U,
    level: ApprovalLevel,
}

impl<'a, U: ActorContext> ApprovalGateContract<'a, U> {
    pub fn new(actor: &'a U, level: ApprovalLevel) -> Self {
        Self { actor, level }
    }

    pub fn validate_actor(&self) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        if !self.actor.can_approve(self.level) {
            errors.add_base("You are not authorized to approve at this level");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::testing::MockActor;
    use chrono::NaiveDate;
    use psa_models::task::{CreateTaskDto, Task};

    fn project() -> Project {
        let mut project = Project::new("ERP rollout", "Acme Corp");
        project.tasks.push(Task::from(CreateTaskDto {
            id: 1,
            name: "Kickoff".to_string(),
            estimated_hours: 4.0,
            cost_per_hour: 100.0,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            assigned_to: None,
            status: None,
        }));
        project
    }

    #[test]
    fn test_task_request_needs_reason_and_known_task() {
        let project = project();
        let contract = SubmitTaskRequestContract::new(&project);

        let valid = SubmitTaskRequestDto {
            task_id: 1,
            reason: "Client-side delay".to_string(),
            proposed_end_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        };
        assert!(contract.validate(&valid).is_ok());

        let blank_reason = SubmitTaskRequestDto {
            reason: "".to_string(),
            ..valid.clone()
        };
        assert!(contract.validate(&blank_reason).unwrap_err().has_error("reason"));

        let unknown_task = SubmitTaskRequestDto {
            task_id: 99,
            ..valid
        };
        assert!(contract.validate(&unknown_task).unwrap_err().has_error("taskId"));
    }

    #[test]
    fn test_baseline_request_needs_changes_and_reason() {
        let contract = SubmitBaselineRequestContract;

        let valid = SubmitBaselineRequestDto {
            requested_changes: "Re-plan phase 2".to_string(),
            reason: "Scope change".to_string(),
        };
        assert!(contract.validate(&valid).is_ok());

        let blank = SubmitBaselineRequestDto {
            requested_changes: " ".to_string(),
            reason: "".to_string(),
        };
        let errors = contract.validate(&blank).unwrap_err();
        assert!(errors.has_error("requestedChanges"));
        assert!(errors.has_error("reason"));
    }

    #[test]
    fn test_approval_gate_checks_role() {
        let manager = MockActor::manager("morgan");
        assert!(ApprovalGateContract::new(&manager, ApprovalLevel::Manager)
            .validate_actor()
            .is_ok());
        assert!(ApprovalGateContract::new(&manager, ApprovalLevel::Admin)
            .validate_actor()
            .is_err());

        let admin = MockActor::admin("alex");
        assert!(ApprovalGateContract::new(&admin, ApprovalLevel::Admin)
            .validate_actor()
            .is_ok());
    }
}
