//! Timesheet posting service

use psa_core::error::PsaError;
use psa_core::traits::{Entity, Id};
use psa_models::task::Task;
use psa_store::EntityStore;
use tracing::info;

use crate::result::ServiceResult;

/// Service for posting timesheet hours against a task
///
/// This is the only legitimate mutator of a task's actual_hours: postings
/// accumulate, they never overwrite. A locked task rejects postings until
/// an approved task request releases it.
pub struct PostTimesheetService<'a> {
    store: &'a mut EntityStore,
}

impl<'a> PostTimesheetService<'a> {
    pub fn new(store: &'a mut EntityStore) -> Self {
        Self { store }
    }

    pub fn call(self, project_id: Id, task_id: Id, hours: f64) -> ServiceResult<Task> {
        if hours <= 0.0 {
            return ServiceResult::failure_with_error("hours", "must be greater than zero");
        }

        let project = match self.store.project(project_id) {
            Ok(project) => project,
            Err(e) => return ServiceResult::failure_from(e),
        };
        let task = match project.task(task_id) {
            Some(task) => task,
            None => {
                return ServiceResult::failure_from(PsaError::not_found(
                    Task::TYPE_NAME,
                    "id",
                    task_id,
                ))
            }
        };
        if task.locked {
            return ServiceResult::failure_with_error(
                "taskId",
                "is locked; submit a task request to log further hours",
            );
        }

        match self.store.add_actual_hours(project_id, task_id, hours) {
            Ok(task) => {
                info!(project_id, task_id, hours, "timesheet hours posted");
                ServiceResult::success(task)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}
