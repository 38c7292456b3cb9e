//! Create service for tasks

use psa_contracts::base::Contract;
use psa_contracts::tasks::CreateTaskContract;
use psa_core::traits::Id;
use psa_models::task::{CreateTaskDto, Task};
use psa_store::EntityStore;
use tracing::info;

use crate::result::ServiceResult;

/// Service for creating tasks
///
/// The estimated cost is fixed here, at input time, as
/// estimated_hours x cost_per_hour; nothing re-derives it later.
pub struct CreateTaskService<'a> {
    store: &'a mut EntityStore,
}

impl<'a> CreateTaskService<'a> {
    pub fn new(store: &'a mut EntityStore) -> Self {
        Self { store }
    }

    /// Execute the create operation
    pub fn call(self, project_id: Id, dto: CreateTaskDto) -> ServiceResult<Task> {
        let project = match self.store.project(project_id) {
            Ok(project) => project,
            Err(e) => return ServiceResult::failure_from(e),
        };

        let contract = CreateTaskContract::new(project);
        if let Err(errors) = contract.validate(&dto) {
            return ServiceResult::failure(errors);
        }

        let task = Task::from(dto);
        match self.store.add_task(project_id, task) {
            Ok(task) => {
                info!(project_id, task_id = task.id, "task created");
                ServiceResult::success(task)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}
