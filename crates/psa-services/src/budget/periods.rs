//! Create service for budget periods

use psa_contracts::base::Contract;
use psa_contracts::budget_periods::CreateBudgetPeriodContract;
use psa_core::traits::Id;
use psa_models::budget_period::{BudgetPeriod, CreateBudgetPeriodDto};
use psa_store::EntityStore;
use tracing::info;

use crate::result::ServiceResult;

/// Service for adding a monthly budget period
///
/// PV, EV, and AC are manual financial entries; the derivation path in
/// [`crate::budget::derive_actuals_from_tasks`] exists for integrations
/// that prefer computing them from task actuals.
pub struct AddBudgetPeriodService<'a> {
    store: &'a mut EntityStore,
}

impl<'a> AddBudgetPeriodService<'a> {
    pub fn new(store: &'a mut EntityStore) -> Self {
        Self { store }
    }

    pub fn call(self, project_id: Id, dto: CreateBudgetPeriodDto) -> ServiceResult<BudgetPeriod> {
        let project = match self.store.project(project_id) {
            Ok(project) => project,
            Err(e) => return ServiceResult::failure_from(e),
        };

        let contract = CreateBudgetPeriodContract::new(project);
        if let Err(errors) = contract.validate(&dto) {
            return ServiceResult::failure(errors);
        }

        match self.store.add_budget_period(project_id, BudgetPeriod::from(dto)) {
            Ok(period) => {
                info!(project_id, month = %period.month, "budget period added");
                ServiceResult::success(period)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psa_models::project::CreateProjectDto;

    fn store_with_project() -> (EntityStore, Id) {
        let mut store = EntityStore::new();
        let project_id = store
            .create_project(CreateProjectDto {
                name: "ERP rollout".to_string(),
                client: "Acme Corp".to_string(),
                start_date: None,
                end_date: None,
                status: None,
            })
            .unwrap()
            .id
            .unwrap();
        (store, project_id)
    }

    fn dto(month: &str) -> CreateBudgetPeriodDto {
        CreateBudgetPeriodDto {
            month: month.to_string(),
            planned_hours: 320.0,
            planned_budget: 40_000.0,
            associated_milestones: vec![],
            actual_hours: 300.0,
            actual_cost: 39_000.0,
            ev: 38_000.0,
        }
    }

    #[test]
    fn test_add_period() {
        let (mut store, project_id) = store_with_project();
        let result = AddBudgetPeriodService::new(&mut store).call(project_id, dto("2025-01"));
        assert!(result.is_success());
        assert_eq!(store.project(project_id).unwrap().budget_periods.len(), 1);
    }

    #[test]
    fn test_blank_month_rejected() {
        let (mut store, project_id) = store_with_project();
        let mut payload = dto("2025-01");
        payload.month = "".to_string();

        let result = AddBudgetPeriodService::new(&mut store).call(project_id, payload);
        assert!(result.is_failure());
        assert!(store.project(project_id).unwrap().budget_periods.is_empty());
    }

    #[test]
    fn test_unknown_project_is_not_found() {
        let mut store = EntityStore::new();
        let result = AddBudgetPeriodService::new(&mut store).call(7, dto("2025-01"));
        assert!(result.is_not_found());
    }
}
