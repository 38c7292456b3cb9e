//! Milestone services

use psa_contracts::base::Contract;
use psa_contracts::milestones::CreateMilestoneContract;
use psa_core::traits::Id;
use psa_models::milestone::{CreateMilestoneDto, Milestone};
use psa_store::EntityStore;
use tracing::info;

use crate::result::ServiceResult;

/// Service for adding a milestone
///
/// The milestone's task references are frozen here; later task churn does
/// not flow into existing milestones.
pub struct AddMilestoneService<'a> {
    store: &'a mut EntityStore,
}

impl<'a> AddMilestoneService<'a> {
    pub fn new(store: &'a mut EntityStore) -> Self {
        Self { store }
    }

    pub fn call(self, project_id: Id, dto: CreateMilestoneDto) -> ServiceResult<Milestone> {
        let project = match self.store.project(project_id) {
            Ok(project) => project,
            Err(e) => return ServiceResult::failure_from(e),
        };

        let contract = CreateMilestoneContract::new(project);
        if let Err(errors) = contract.validate(&dto) {
            return ServiceResult::failure(errors);
        }

        match self.store.add_milestone(project_id, dto) {
            Ok(milestone) => {
                info!(project_id, milestone_id = milestone.id, "milestone added");
                ServiceResult::success(milestone)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}
