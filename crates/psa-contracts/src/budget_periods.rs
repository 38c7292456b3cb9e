//! Contracts for budget period operations

use psa_core::error::ValidationErrors;
use psa_models::budget_period::CreateBudgetPeriodDto;
use psa_models::project::Project;

use crate::base::{Contract, ValidationResult};

/// Contract for adding a monthly budget period
pub struct CreateBudgetPeriodContract<'a> {
    project: &'a Project,
}

impl<'a> CreateBudgetPeriodContract<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    fn validate_figures(&self, dto: &CreateBudgetPeriodDto, errors: &mut ValidationErrors) {
        for (field, value) in [
            ("plannedHours", dto.planned_hours),
            ("plannedBudget", dto.planned_budget),
            ("actualHours", dto.actual_hours),
            ("actualCost", dto.actual_cost),
            ("ev", dto.ev),
        ] {
            if value < 0.0 {
                errors.add(field, "must not be negative");
            }
        }
    }
}

impl<'a> Contract<CreateBudgetPeriodDto> for CreateBudgetPeriodContract<'a> {
    fn validate(&self, dto: &CreateBudgetPeriodDto) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if dto.month.trim().is_empty() {
            errors.add("month", "can't be blank");
        }
        self.validate_figures(dto, &mut errors);
        for milestone_id in &dto.associated_milestones {
            if self.project.milestone(*milestone_id).is_none() {
                errors.add(
                    "associatedMilestones",
                    format!("references unknown milestone {}", milestone_id),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
