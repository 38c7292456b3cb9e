//! Contracts for member operations

use psa_core::error::ValidationErrors;
use psa_models::member::CreateMemberDto;
use psa_models::project::Project;

use crate::base::{Contract, ValidationResult};

/// Contract for adding a member to a project
pub struct CreateMemberContract<'a> {
    project: &'a Project,
}

impl<'a> CreateMemberContract<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }
}

impl<'a> Contract<CreateMemberDto> for CreateMemberContract<'a> {
    fn validate(&self, dto: &CreateMemberDto) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if dto.username.trim().is_empty() {
            errors.add("username", "can't be blank");
        } else if self.project.member(&dto.username).is_some() {
            errors.add("username", "has already been taken");
        }
        if dto.hourly_cost_rate < 0.0 {
            errors.add("hourlyCostRate", "must not be negative");
        }
        if dto.client_billing_rate < 0.0 {
            errors.add("clientBillingRate", "must not be negative");
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
    use psa_models::member::Member;

    fn dto(username: &str) -> CreateMemberDto {
        CreateMemberDto {
            username: username.to_string(),
            labour_category: "Consultant".to_string(),
            hourly_cost_rate: 80.0,
            client_billing_rate: 150.0,
            status: None,
        }
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let mut project = Project::new("ERP rollout", "Acme Corp");
        project.members.push(Member::from(dto("avery")));

        let contract = CreateMemberContract::new(&project);
        assert!(contract.validate(&dto("blake")).is_ok());

        let result = contract.validate(&dto("avery"));
        assert!(result.unwrap_err().has_error("username"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let project = Project::new("ERP rollout", "Acme Corp");
        let contract = CreateMemberContract::new(&project);

        let mut payload = dto("avery");
        payload.hourly_cost_rate = -1.0;
        let result = contract.validate(&payload);
        assert!(result.unwrap_err().has_error("hourlyCostRate"));
    }
}
