//! Budget period model
//!
//! One record per month of the project budget. Planned value, earned value,
//! and actual cost are caller-supplied entries; schedule/cost variances and
//! performance indices are derived on read.

use psa_core::traits::Id;
use psa_core::types::safe_ratio;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Per-period health classification
///
/// The asymmetric thresholds (1.0 for on-track, 0.8 for at-risk) encode how
/// much drift is tolerable before escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodHealth {
    OnTrack,
    Warning,
    AtRisk,
}

/// Monthly budget entry
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPeriod {
    /// Month label, e.g. "2025-01"
    pub month: String,

    pub planned_hours: f64,

    /// Planned value (PV) for the period
    pub planned_budget: f64,

    /// Milestones the period is accountable for
    #[serde(default)]
    pub associated_milestones: Vec<Id>,

    pub actual_hours: f64,

    /// Actual cost (AC), supplied by financial entry
    pub actual_cost: f64,

    /// Earned value (EV), supplied by financial entry
    pub ev: f64,
}

impl BudgetPeriod {
    /// Schedule variance: EV - PV
    pub fn sv(&self) -> f64 {
        self.ev - self.planned_budget
    }

    /// Cost variance: EV - AC
    pub fn cv(&self) -> f64 {
        self.ev - self.actual_cost
    }

    /// Schedule performance index: EV / PV, 0 when PV is 0
    pub fn spi(&self) -> f64 {
        safe_ratio(self.ev, self.planned_budget)
    }

    /// Cost performance index: EV / AC, 0 when AC is 0
    pub fn cpi(&self) -> f64 {
        safe_ratio(self.ev, self.actual_cost)
    }

    pub fn health(&self) -> PeriodHealth {
        let spi = self.spi();
        let cpi = self.cpi();
        if spi >= 1.0 && cpi >= 1.0 {
            PeriodHealth::OnTrack
        } else if spi < 0.8 || cpi < 0.8 {
            PeriodHealth::AtRisk
        } else {
            PeriodHealth::Warning
        }
    }
}

/// DTO for adding a budget period
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetPeriodDto {
    #[validate(length(min = 1, max = 50))]
    pub month: String,
    #[validate(range(min = 0.0))]
    pub planned_hours: f64,
    #[validate(range(min = 0.0))]
    pub planned_budget: f64,
    #[serde(default)]
    pub associated_milestones: Vec<Id>,
    #[validate(range(min = 0.0))]
    pub actual_hours: f64,
    #[validate(range(min = 0.0))]
    pub actual_cost: f64,
    #[validate(range(min = 0.0))]
    pub ev: f64,
}

impl From<CreateBudgetPeriodDto> for BudgetPeriod {
    fn from(dto: CreateBudgetPeriodDto) -> Self {
        Self {
            month: dto.month,
            planned_hours: dto.planned_hours,
            planned_budget: dto.planned_budget,
            associated_milestones: dto.associated_milestones,
            actual_hours: dto.actual_hours,
            actual_cost: dto.actual_cost,
            ev: dto.ev,
        }
    }
}
