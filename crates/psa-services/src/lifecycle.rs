//! Task lifecycle consistency pass
//!
//! The lock sweep is the one rule the engine enforces on task status: a
//! task past its end date that is not Completed becomes locked. The sweep
//! only ever flips `locked` false to true, so re-running it under any
//! schedule is safe; unlocking happens exclusively through an approved
//! task request.

use chrono::NaiveDate;
use psa_core::config::EngineConfig;
use psa_core::result::PsaResult;
use psa_core::traits::Id;
use psa_store::EntityStore;
use tracing::info;

/// Outcome of one sweep over a project
#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub locked_task_ids: Vec<Id>,
}

impl SweepOutcome {
    pub fn locked_any(&self) -> bool {
        !self.locked_task_ids.is_empty()
    }
}

/// Service running the auto-lock consistency pass
pub struct LockSweepService<'a> {
    store: &'a mut EntityStore,
    enabled: bool,
}

impl<'a> LockSweepService<'a> {
    pub fn new(store: &'a mut EntityStore) -> Self {
        Self {
            store,
            enabled: true,
        }
    }

    pub fn from_config(store: &'a mut EntityStore, config: &EngineConfig) -> Self {
        Self {
            store,
            enabled: config.auto_lock_overdue_tasks,
        }
    }

    /// Sweep one project as of the given date
    pub fn run(&mut self, project_id: Id, today: NaiveDate) -> PsaResult<SweepOutcome> {
        if !self.enabled {
            return Ok(SweepOutcome::default());
        }

        // Read first: a sweep that locks nothing must leave the project
        // untouched, revision included.
        let overdue: Vec<Id> = self
            .store
            .project(project_id)?
            .tasks
            .iter()
            .filter(|t| !t.locked && t.overdue(today))
            .map(|t| t.id)
            .collect();
        if overdue.is_empty() {
            return Ok(SweepOutcome::default());
        }

        let outcome = self.store.with_project_mut(project_id, |project| {
            let mut outcome = SweepOutcome::default();
            for task in &mut project.tasks {
                if overdue.contains(&task.id) {
                    task.locked = true;
                    outcome.locked_task_ids.push(task.id);
                }
            }
            Ok(outcome)
        })?;

        if outcome.locked_any() {
            info!(
                project_id,
                locked = outcome.locked_task_ids.len(),
                "lock sweep locked overdue tasks"
            );
        }
        Ok(outcome)
    }

    /// Sweep every project as of the given date
    pub fn run_all(&mut self, today: NaiveDate) -> PsaResult<Vec<(Id, SweepOutcome)>> {
        let mut outcomes = Vec::new();
        for project_id in self.store.project_ids() {
            let outcome = self.run(project_id, today)?;
            outcomes.push((project_id, outcome));
        }
        Ok(outcomes)
    }

    /// Sweep one project as of the current date
    pub fn run_today(&mut self, project_id: Id) -> PsaResult<SweepOutcome> {
        self.run(project_id, chrono::Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psa_models::project::CreateProjectDto;
    use psa_models::task::{CreateTaskDto, Task, TaskStatus};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn task(id: Id, end: &str, status: TaskStatus) -> Task {
        Task::from(CreateTaskDto {
            id,
            name: format!("Task {}", id),
            estimated_hours: 10.0,
            cost_per_hour: 100.0,
            start_date: d("2025-01-02"),
            end_date: d(end),
            assigned_to: None,
            status: Some(status),
        })
    }

    fn seeded_store() -> (EntityStore, Id) {
        let mut store = EntityStore::new();
        let project = store
            .create_project(CreateProjectDto {
                name: "ERP rollout".to_string(),
                client: "Acme Corp".to_string(),
                start_date: None,
                end_date: None,
                status: None,
            })
            .unwrap();
        let project_id = project.id.unwrap();
        store
            .add_task(project_id, task(1, "2025-01-10", TaskStatus::Active))
            .unwrap();
        store
            .add_task(project_id, task(2, "2025-01-10", TaskStatus::Completed))
            .unwrap();
        store
            .add_task(project_id, task(3, "2025-06-30", TaskStatus::InProgress))
            .unwrap();
        (store, project_id)
    }

    #[test]
    fn test_sweep_locks_only_overdue_incomplete_tasks() {
        let (mut store, project_id) = seeded_store();

        let outcome = LockSweepService::new(&mut store)
            .run(project_id, d("2025-01-11"))
            .unwrap();
        assert_eq!(outcome.locked_task_ids, vec![1]);

        let project = store.project(project_id).unwrap();
        assert!(project.task(1).unwrap().locked);
        assert!(!project.task(2).unwrap().locked, "completed tasks never auto-lock");
        assert!(!project.task(3).unwrap().locked);
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let (mut store, project_id) = seeded_store();

        let first = LockSweepService::new(&mut store)
            .run(project_id, d("2025-01-11"))
            .unwrap();
        assert!(first.locked_any());

        let second = LockSweepService::new(&mut store)
            .run(project_id, d("2025-01-11"))
            .unwrap();
        assert!(!second.locked_any());
        assert!(store.project(project_id).unwrap().task(1).unwrap().locked);
    }

    #[test]
    fn test_sweep_never_unlocks() {
        let (mut store, project_id) = seeded_store();
        LockSweepService::new(&mut store)
            .run(project_id, d("2025-01-11"))
            .unwrap();

        // Re-running on an earlier date leaves the lock in place
        LockSweepService::new(&mut store)
            .run(project_id, d("2025-01-01"))
            .unwrap();
        assert!(store.project(project_id).unwrap().task(1).unwrap().locked);
    }

    #[test]
    fn test_sweep_on_end_date_does_not_lock() {
        let (mut store, project_id) = seeded_store();
        let outcome = LockSweepService::new(&mut store)
            .run(project_id, d("2025-01-10"))
            .unwrap();
        assert!(!outcome.locked_any());
    }

    #[test]
    fn test_disabled_sweep_is_a_no_op() {
        let (mut store, project_id) = seeded_store();
        let config = EngineConfig {
            auto_lock_overdue_tasks: false,
        };

        let outcome = LockSweepService::from_config(&mut store, &config)
            .run(project_id, d("2025-01-11"))
            .unwrap();
        assert!(!outcome.locked_any());
        assert!(!store.project(project_id).unwrap().task(1).unwrap().locked);
    }

    #[test]
    fn test_run_all_covers_every_project() {
        let (mut store, first_project) = seeded_store();
        let second_project = store
            .create_project(CreateProjectDto {
                name: "Data migration".to_string(),
                client: "Acme Corp".to_string(),
                start_date: None,
                end_date: None,
                status: None,
            })
            .unwrap()
            .id
            .unwrap();
        store
            .add_task(second_project, task(1, "2025-01-05", TaskStatus::Pending))
            .unwrap();

        let outcomes = LockSweepService::new(&mut store)
            .run_all(d("2025-01-11"))
            .unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|(id, outcome)| (*id == first_project || *id == second_project)
                && outcome.locked_any()));
    }
}
