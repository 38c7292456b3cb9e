//! Variance computation against the current baseline

use psa_core::traits::Id;
use psa_core::types::safe_ratio;
use psa_models::project::Project;
use serde::Serialize;

/// Cost position of a task relative to its baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VarianceStatus {
    Over,
    Under,
    OnTrack,
}

/// Per-task variance row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskVariance {
    pub task_id: Id,
    pub task_name: String,
    pub planned_hours: f64,
    pub planned_cost: f64,
    pub actual_hours: f64,
    pub actual_cost: f64,
    pub hours_variance: f64,
    pub cost_variance: f64,
    pub variance_percentage: f64,
    pub status: VarianceStatus,
}

/// Pure derivation of task variance against the current baseline
///
/// Tasks without a snapshot in the current baseline (added after the
/// freeze, or no baseline at all) fall back to their own current
/// estimates, so their plan-vs-plan variance is zero by construction.
pub struct VarianceService;

impl VarianceService {
    pub fn compute(project: &Project) -> Vec<TaskVariance> {
        let baseline = project.current_baseline();

        project
            .tasks
            .iter()
            .map(|task| {
                let snapshot = baseline.and_then(|b| b.snapshot_for(task.id));
                let (planned_hours, planned_cost) = match snapshot {
                    Some(snap) => (snap.planned_hours, snap.planned_cost),
                    None => (task.estimated_hours, task.estimated_cost),
                };

                let actual_cost = task.actual_cost();
                // A task with no booked work carries no drift yet; variance
                // starts accruing with the first posting.
                let (hours_variance, cost_variance) = if task.actual_hours == 0.0 {
                    (0.0, 0.0)
                } else {
                    (task.actual_hours - planned_hours, actual_cost - planned_cost)
                };
                let variance_percentage = safe_ratio(cost_variance, planned_cost) * 100.0;

                let status = if cost_variance > 0.0 {
                    VarianceStatus::Over
                } else if cost_variance < 0.0 {
                    VarianceStatus::Under
                } else {
                    VarianceStatus::OnTrack
                };

                TaskVariance {
                    task_id: task.id,
                    task_name: task.name.clone(),
                    planned_hours,
                    planned_cost,
                    actual_hours: task.actual_hours,
                    actual_cost,
                    hours_variance,
                    cost_variance,
                    variance_percentage,
                    status,
                }
            })
            .collect()
    }
}
