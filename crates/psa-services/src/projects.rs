//! Create service for projects

use psa_core::error::ValidationErrors;
use psa_models::project::{CreateProjectDto, Project};
use psa_store::EntityStore;
use tracing::info;

use crate::result::ServiceResult;

/// Service for creating projects
pub struct CreateProjectService<'a> {
    store: &'a mut EntityStore,
}

impl<'a> CreateProjectService<'a> {
    pub fn new(store: &'a mut EntityStore) -> Self {
        Self { store }
    }

    pub fn call(self, dto: CreateProjectDto) -> ServiceResult<Project> {
        let mut errors = ValidationErrors::new();
        if dto.name.trim().is_empty() {
            errors.add("name", "can't be blank");
        }
        if !errors.is_empty() {
            return ServiceResult::failure(errors);
        }

        match self.store.create_project(dto) {
            Ok(project) => {
                info!(project_id = project.id, "project created");
                ServiceResult::success(project)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}
