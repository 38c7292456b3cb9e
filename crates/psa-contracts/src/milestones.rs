//! Contracts for milestone operations

use psa_core::error::ValidationErrors;
use psa_models::milestone::CreateMilestoneDto;
use psa_models::project::Project;

use crate::base::{Contract, ValidationResult};

/// Contract for creating a milestone
///
/// Task references are frozen at creation, so they are checked here once;
/// later task churn does not invalidate an existing milestone.
pub struct CreateMilestoneContract<'a> {
    project: &'a Project,
}

impl<'a> CreateMilestoneContract<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }
}

impl<'a> Contract<CreateMilestoneDto> for CreateMilestoneContract<'a> {
    fn validate(&self, dto: &CreateMilestoneDto) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if dto.name.trim().is_empty() {
            errors.add("name", "can't be blank");
        }
        for task_id in &dto.task_ids {
            if self.project.task(*task_id).is_none() {
                errors.add("taskIds", format!("references unknown task {}", task_id));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
