//! Earned-value aggregation
//!
//! Portfolio-level totals over a project's budget periods, plus the
//! task-derived counterpart to manual PV/EV/AC entry.

use psa_core::types::safe_ratio;
use psa_models::project::Project;
use serde::Serialize;
use tracing::debug;

/// Aggregate earned-value metrics across all budget periods
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EvmSummary {
    pub total_pv: f64,
    pub total_ev: f64,
    pub total_ac: f64,
    pub schedule_variance: f64,
    pub cost_variance: f64,
    pub spi: f64,
    pub cpi: f64,
}

impl EvmSummary {
    pub fn for_project(project: &Project) -> Self {
        let total_pv: f64 = project.budget_periods.iter().map(|p| p.planned_budget).sum();
        let total_ev: f64 = project.budget_periods.iter().map(|p| p.ev).sum();
        let total_ac: f64 = project.budget_periods.iter().map(|p| p.actual_cost).sum();

        let summary = Self {
            total_pv,
            total_ev,
            total_ac,
            schedule_variance: total_ev - total_pv,
            cost_variance: total_ev - total_ac,
            spi: safe_ratio(total_ev, total_pv),
            cpi: safe_ratio(total_ev, total_ac),
        };
        debug!(
            periods = project.budget_periods.len(),
            spi = summary.spi,
            cpi = summary.cpi,
            "evm summary computed"
        );
        summary
    }
}

/// EV/AC figures derived from task actuals instead of manual entry
///
/// EV counts the estimated cost of completed tasks; AC and hours come from
/// booked time across all tasks. Integrations choose between this and the
/// manual figures on each budget period.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedActuals {
    pub ev: f64,
    pub actual_cost: f64,
    pub actual_hours: f64,
}

pub fn derive_actuals_from_tasks(project: &Project) -> DerivedActuals {
    let mut derived = DerivedActuals::default();
    for task in &project.tasks {
        if task.status.is_completed() {
            derived.ev += task.estimated_cost;
        }
        derived.actual_cost += task.actual_cost();
        derived.actual_hours += task.actual_hours;
    }
    derived
}
