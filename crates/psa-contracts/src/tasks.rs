//! Contracts for task operations

use psa_core::error::ValidationErrors;
use psa_models::project::Project;
use psa_models::task::CreateTaskDto;

use crate::base::{Contract, ValidationResult};

/// Contract for creating a task within a project
pub struct CreateTaskContract<'a> {
    project: &'a Project,
}

impl<'a> CreateTaskContract<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    fn validate_identifier(&self, dto: &CreateTaskDto, errors: &mut ValidationErrors) {
        if dto.id <= 0 {
            errors.add("id", "must be a positive identifier");
        } else if self.project.task(dto.id).is_some() {
            errors.add("id", "has already been taken");
        }
    }

    fn validate_dates(&self, dto: &CreateTaskDto, errors: &mut ValidationErrors) {
        if dto.end_date < dto.start_date {
            errors.add("endDate", "must not precede the start date");
        }
    }

    fn validate_assignee(&self, dto: &CreateTaskDto, errors: &mut ValidationErrors) {
        if let Some(ref username) = dto.assigned_to {
            if self.project.member(username).is_none() {
                errors.add("assignedTo", "is not a member of this project");
            }
        }
    }
}

impl<'a> Contract<CreateTaskDto> for CreateTaskContract<'a> {
    fn validate(&self, dto: &CreateTaskDto) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if dto.name.trim().is_empty() {
            errors.add("name", "can't be blank");
        }
        if dto.estimated_hours < 0.0 {
            errors.add("estimatedHours", "must not be negative");
        }
        if dto.cost_per_hour < 0.0 {
            errors.add("costPerHour", "must not be negative");
        }

        self.validate_identifier(dto, &mut errors);
        self.validate_dates(dto, &mut errors);
        self.validate_assignee(dto, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
