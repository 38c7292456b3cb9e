//! Baseline model
//!
//! A baseline is an immutable frozen snapshot of a project's planned task
//! data, used as the comparison point for variance. Baselines are
//! append-only: once created, a record is never mutated or removed.

use chrono::NaiveDate;
use psa_core::traits::{Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Per-task snapshot frozen into a baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineTaskSnapshot {
    pub task_id: Id,
    pub task_name: String,
    pub planned_hours: f64,
    pub planned_cost: f64,
    pub planned_start_date: NaiveDate,
    pub planned_end_date: NaiveDate,
    pub assigned_member: Option<String>,
}

impl From<&Task> for BaselineTaskSnapshot {
    fn from(task: &Task) -> Self {
        Self {
            task_id: task.id,
            task_name: task.name.clone(),
            planned_hours: task.estimated_hours,
            planned_cost: task.estimated_cost,
            planned_start_date: task.start_date,
            planned_end_date: task.end_date,
            assigned_member: task.assigned_to.clone(),
        }
    }
}

/// Baseline entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    pub id: Id,
    pub name: String,
    pub created_on: NaiveDate,
    pub created_by: String,
    pub task_snapshots: Vec<BaselineTaskSnapshot>,
    pub total_estimated_hours: f64,
    pub total_estimated_cost: f64,
    pub total_tasks: usize,
}

impl Identifiable for Baseline {
    fn id(&self) -> Option<Id> {
        Some(self.id)
    }
}

impl Entity for Baseline {
    const TYPE_NAME: &'static str = "Baseline";
}

impl Baseline {
    /// Freeze the current task plan into a new baseline record.
    ///
    /// Totals are the exact sums over this snapshot, not over the live
    /// project.
    pub fn freeze(
        id: Id,
        name: impl Into<String>,
        created_on: NaiveDate,
        created_by: impl Into<String>,
        tasks: &[Task],
    ) -> Self {
        let task_snapshots: Vec<BaselineTaskSnapshot> =
            tasks.iter().map(BaselineTaskSnapshot::from).collect();
        let total_estimated_hours = task_snapshots.iter().map(|s| s.planned_hours).sum();
        let total_estimated_cost = task_snapshots.iter().map(|s| s.planned_cost).sum();
        let total_tasks = task_snapshots.len();

        Self {
            id,
            name: name.into(),
            created_on,
            created_by: created_by.into(),
            task_snapshots,
            total_estimated_hours,
            total_estimated_cost,
            total_tasks,
        }
    }

    /// Find the snapshot for a task, if it existed when the plan was frozen
    pub fn snapshot_for(&self, task_id: Id) -> Option<&BaselineTaskSnapshot> {
        self.task_snapshots.iter().find(|s| s.task_id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{CreateTaskDto, TaskStatus};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn task(id: Id, hours: f64, rate: f64) -> Task {
        Task::from(CreateTaskDto {
            id,
            name: format!("Task {}", id),
            estimated_hours: hours,
            cost_per_hour: rate,
            start_date: d("2025-01-01"),
            end_date: d("2025-03-31"),
            assigned_to: None,
            status: Some(TaskStatus::Active),
        })
    }

    #[test]
    fn test_freeze_totals_sum_over_snapshot() {
        // 5h at $120 => $600, 8h at $130 => $1040
        let tasks = vec![task(1, 5.0, 120.0), task(2, 8.0, 130.0)];
        let baseline = Baseline::freeze(1, "Initial plan", d("2025-01-01"), "pm.lead", &tasks);

        assert_eq!(baseline.total_tasks, 2);
        assert_eq!(baseline.total_estimated_hours, 13.0);
        assert_eq!(baseline.total_estimated_cost, 1640.0);
    }

    #[test]
    fn test_snapshot_copies_planned_fields() {
        let tasks = vec![task(7, 5.0, 120.0)];
        let baseline = Baseline::freeze(1, "Initial plan", d("2025-01-01"), "pm.lead", &tasks);

        let snap = baseline.snapshot_for(7).unwrap();
        assert_eq!(snap.task_name, "Task 7");
        assert_eq!(snap.planned_hours, 5.0);
        assert_eq!(snap.planned_cost, 600.0);
        assert_eq!(snap.planned_end_date, d("2025-03-31"));
        assert!(baseline.snapshot_for(8).is_none());
    }

    #[test]
    fn test_freeze_of_empty_plan() {
        let baseline = Baseline::freeze(1, "Empty", d("2025-01-01"), "pm.lead", &[]);
        assert_eq!(baseline.total_tasks, 0);
        assert_eq!(baseline.total_estimated_cost, 0.0);
    }
}
