//! Budget and earned-value services

mod analysis;
mod evm;
mod periods;

pub use analysis::{member_cost_analysis, task_cost_analysis, MemberCostRow, TaskCostRow};
pub use evm::{derive_actuals_from_tasks, DerivedActuals, EvmSummary};
pub use periods::AddBudgetPeriodService;
