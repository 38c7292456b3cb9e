//! Create service for baselines

use chrono::Utc;
use psa_contracts::base::{ActorContext, Contract};
use psa_contracts::baselines::{CreateBaselineContract, CreateBaselinePayload};
use psa_core::traits::Id;
use psa_models::baseline::Baseline;
use psa_store::EntityStore;
use tracing::info;

use crate::result::ServiceResult;

/// Service for freezing the current task plan into a baseline
///
/// Baselines are append-only: each call produces a new record and moves
/// the project's current-baseline pointer; prior records are never
/// touched.
pub struct CreateBaselineService<'a, U: ActorContext> {
    store: &'a mut EntityStore,
    actor: &'a U,
}

impl<'a, U: ActorContext> CreateBaselineService<'a, U> {
    pub fn new(store: &'a mut EntityStore, actor: &'a U) -> Self {
        Self { store, actor }
    }

    /// Execute the freeze
    pub fn call(self, project_id: Id, name: impl Into<String>) -> ServiceResult<Baseline> {
        let payload = CreateBaselinePayload { name: name.into() };
        if let Err(errors) = CreateBaselineContract.validate(&payload) {
            return ServiceResult::failure(errors);
        }

        let created_by = self.actor.username().to_string();
        let created_on = Utc::now().date_naive();

        match self.store.add_baseline(project_id, |id, project| {
            Baseline::freeze(id, payload.name, created_on, created_by, &project.tasks)
        }) {
            Ok(baseline) => {
                info!(
                    project_id,
                    baseline_id = baseline.id,
                    tasks = baseline.total_tasks,
                    "baseline created"
                );
                ServiceResult::success(baseline)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}
