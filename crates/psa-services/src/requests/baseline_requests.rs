//! Baseline request workflow
//!
//! Baseline requests pass through two gates, manager then admin. The
//! underlying operations do not re-validate ordering (the admin gate is
//! surfaced only after manager approval at the presentation layer), but
//! the final status flips exclusively on the admin transition, and only
//! once both gates are approved. No rejection transition exists: gates
//! move from Pending to Approved or not at all.
//!
//! Approving a baseline request changes the request record only; applying
//! the approved change to tasks or baselines is a manual follow-up outside
//! the engine.

use chrono::Utc;
use psa_contracts::base::{ActorContext, Contract};
use psa_contracts::requests::{ApprovalGateContract, SubmitBaselineRequestContract};
use psa_core::error::PsaError;
use psa_core::traits::Id;
use psa_models::request::{
    ApprovalLevel, BaselineRequest, GateStatus, SubmitBaselineRequestDto,
};
use psa_store::EntityStore;
use tracing::info;
use uuid::Uuid;

use crate::result::ServiceResult;

/// Service for submitting a baseline request
pub struct SubmitBaselineRequestService<'a, U: ActorContext> {
    store: &'a mut EntityStore,
    actor: &'a U,
}

impl<'a, U: ActorContext> SubmitBaselineRequestService<'a, U> {
    pub fn new(store: &'a mut EntityStore, actor: &'a U) -> Self {
        Self { store, actor }
    }

    pub fn call(
        self,
        project_id: Id,
        dto: SubmitBaselineRequestDto,
    ) -> ServiceResult<BaselineRequest> {
        if let Err(errors) = SubmitBaselineRequestContract.validate(&dto) {
            return ServiceResult::failure(errors);
        }
        if let Err(e) = self.store.project(project_id) {
            return ServiceResult::failure_from(e);
        }

        let request = BaselineRequest {
            id: Uuid::new_v4(),
            project_id,
            requested_by: self.actor.username().to_string(),
            requested_changes: dto.requested_changes,
            reason: dto.reason,
            manager_status: GateStatus::Pending,
            admin_status: GateStatus::Pending,
            final_status: GateStatus::Pending,
            manager_approved_by: None,
            manager_approved_at: None,
            admin_approved_by: None,
            admin_approved_at: None,
            submitted_at: Utc::now(),
        };

        match self.store.add_baseline_request(project_id, request) {
            Ok(request) => {
                info!(project_id, "baseline request submitted");
                ServiceResult::success(request)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}

/// Service for operating one approval gate on a baseline request
pub struct ApproveBaselineRequestService<'a, U: ActorContext> {
    store: &'a mut EntityStore,
    actor: &'a U,
}

impl<'a, U: ActorContext> ApproveBaselineRequestService<'a, U> {
    pub fn new(store: &'a mut EntityStore, actor: &'a U) -> Self {
        Self { store, actor }
    }

    pub fn call(
        self,
        project_id: Id,
        request_id: Uuid,
        level: ApprovalLevel,
    ) -> ServiceResult<BaselineRequest> {
        if let Err(errors) = ApprovalGateContract::new(self.actor, level).validate_actor() {
            return ServiceResult::failure(errors);
        }

        let approver = self.actor.username().to_string();
        let result = self.store.with_project_mut(project_id, |project| {
            let request = project
                .baseline_request_mut(request_id)
                .ok_or_else(|| PsaError::not_found("BaselineRequest", "id", request_id))?;

            match level {
                ApprovalLevel::Manager => {
                    if request.manager_status.is_approved() {
                        return Err(PsaError::conflict(format!(
                            "baseline request {} is already manager-approved",
                            request_id
                        )));
                    }
                    request.manager_status = GateStatus::Approved;
                    request.manager_approved_by = Some(approver);
                    request.manager_approved_at = Some(Utc::now());
                }
                ApprovalLevel::Admin => {
                    request.admin_status = GateStatus::Approved;
                    request.admin_approved_by = Some(approver);
                    request.admin_approved_at = Some(Utc::now());
                    // The final status flips here and nowhere else
                    if request.both_gates_approved() {
                        request.final_status = GateStatus::Approved;
                    }
                }
            }
            Ok(request.clone())
        });

        match result {
            Ok(request) => {
                info!(
                    project_id,
                    level = ?level,
                    final_approved = request.final_status.is_approved(),
                    "baseline request gate approved"
                );
                ServiceResult::success(request)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psa_models::project::CreateProjectDto;

    struct MockActor {
        name: &'static str,
        admin: bool,
        manager: bool,
    }

    impl ActorContext for MockActor {
        fn username(&self) -> &str {
            self.name
        }
        fn is_admin(&self) -> bool {
            self.admin
        }
        fn is_manager(&self) -> bool {
            self.manager
        }
    }

    fn manager() -> MockActor {
        MockActor {
            name: "morgan",
            admin: false,
            manager: true,
        }
    }

    fn admin() -> MockActor {
        MockActor {
            name: "alex",
            admin: true,
            manager: false,
        }
    }

    fn seeded_store() -> (EntityStore, Id) {
        let mut store = EntityStore::new();
        let project_id = store
            .create_project(CreateProjectDto {
                name: "ERP rollout".to_string(),
                client: "Acme Corp".to_string(),
                start_date: None,
                end_date: None,
                status: None,
            })
            .unwrap()
            .id
            .unwrap();
        (store, project_id)
    }

    fn submit(store: &mut EntityStore, project_id: Id) -> BaselineRequest {
        let actor = manager();
        SubmitBaselineRequestService::new(store, &actor)
            .call(
                project_id,
                SubmitBaselineRequestDto {
                    requested_changes: "Re-plan phase 2 around revised scope".to_string(),
                    reason: "Scope change approved by client".to_string(),
                },
            )
            .unwrap()
    }

    #[test]
    fn test_two_gate_pipeline() {
        let (mut store, project_id) = seeded_store();
        let request = submit(&mut store, project_id);
        assert_eq!(request.final_status, GateStatus::Pending);

        let actor = manager();
        let after_manager = ApproveBaselineRequestService::new(&mut store, &actor)
            .call(project_id, request.id, ApprovalLevel::Manager)
            .unwrap();
        assert_eq!(after_manager.manager_status, GateStatus::Approved);
        assert_eq!(after_manager.manager_approved_by.as_deref(), Some("morgan"));
        assert_eq!(
            after_manager.final_status,
            GateStatus::Pending,
            "manager approval alone never finalizes"
        );

        let actor = admin();
        let after_admin = ApproveBaselineRequestService::new(&mut store, &actor)
            .call(project_id, request.id, ApprovalLevel::Admin)
            .unwrap();
        assert_eq!(after_admin.admin_status, GateStatus::Approved);
        assert_eq!(after_admin.admin_approved_by.as_deref(), Some("alex"));
        assert_eq!(after_admin.final_status, GateStatus::Approved);
    }

    #[test]
    fn test_admin_before_manager_does_not_fail_or_finalize() {
        let (mut store, project_id) = seeded_store();
        let request = submit(&mut store, project_id);

        let actor = admin();
        let out_of_order = ApproveBaselineRequestService::new(&mut store, &actor)
            .call(project_id, request.id, ApprovalLevel::Admin)
            .unwrap();
        assert_eq!(out_of_order.admin_status, GateStatus::Approved);
        assert_eq!(out_of_order.final_status, GateStatus::Pending);

        // Manager catches up; the final flip still belongs to the admin
        // transition, so a second admin pass completes the pipeline.
        let actor = manager();
        let after_manager = ApproveBaselineRequestService::new(&mut store, &actor)
            .call(project_id, request.id, ApprovalLevel::Manager)
            .unwrap();
        assert_eq!(after_manager.final_status, GateStatus::Pending);

        let actor = admin();
        let finalized = ApproveBaselineRequestService::new(&mut store, &actor)
            .call(project_id, request.id, ApprovalLevel::Admin)
            .unwrap();
        assert_eq!(finalized.final_status, GateStatus::Approved);
    }

    #[test]
    fn test_manager_gate_rejects_double_approval() {
        let (mut store, project_id) = seeded_store();
        let request = submit(&mut store, project_id);

        let actor = manager();
        assert!(ApproveBaselineRequestService::new(&mut store, &actor)
            .call(project_id, request.id, ApprovalLevel::Manager)
            .is_success());

        let again = ApproveBaselineRequestService::new(&mut store, &actor).call(
            project_id,
            request.id,
            ApprovalLevel::Manager,
        );
        assert!(again.is_failure());
        assert!(matches!(again.source(), Some(PsaError::Conflict { .. })));
    }

    #[test]
    fn test_manager_cannot_operate_admin_gate() {
        let (mut store, project_id) = seeded_store();
        let request = submit(&mut store, project_id);

        let actor = manager();
        let result = ApproveBaselineRequestService::new(&mut store, &actor).call(
            project_id,
            request.id,
            ApprovalLevel::Admin,
        );
        assert!(result.is_failure());
        assert_eq!(
            store
                .project(project_id)
                .unwrap()
                .baseline_request(request.id)
                .unwrap()
                .admin_status,
            GateStatus::Pending
        );
    }

    #[test]
    fn test_unknown_request_is_not_found() {
        let (mut store, project_id) = seeded_store();
        let actor = admin();
        let result = ApproveBaselineRequestService::new(&mut store, &actor).call(
            project_id,
            Uuid::new_v4(),
            ApprovalLevel::Admin,
        );
        assert!(result.is_not_found());
    }

    #[test]
    fn test_submission_validation() {
        let (mut store, project_id) = seeded_store();
        let actor = manager();

        let result = SubmitBaselineRequestService::new(&mut store, &actor).call(
            project_id,
            SubmitBaselineRequestDto {
                requested_changes: "".to_string(),
                reason: "Scope change".to_string(),
            },
        );
        assert!(result.is_failure());
        assert!(result.errors().has_error("requestedChanges"));
        assert!(store
            .project(project_id)
            .unwrap()
            .baseline_requests
            .is_empty());
    }

    #[test]
    fn test_approval_touches_no_task_or_baseline() {
        let (mut store, project_id) = seeded_store();
        let request = submit(&mut store, project_id);

        let before_tasks = store.project(project_id).unwrap().tasks.clone();
        let before_baselines = store.project(project_id).unwrap().baselines.len();

        let actor = admin();
        ApproveBaselineRequestService::new(&mut store, &actor)
            .call(project_id, request.id, ApprovalLevel::Admin)
            .unwrap();

        let project = store.project(project_id).unwrap();
        assert_eq!(project.tasks.len(), before_tasks.len());
        assert_eq!(project.baselines.len(), before_baselines);
    }
}
