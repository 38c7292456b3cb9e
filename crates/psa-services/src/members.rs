//! Member services

use psa_contracts::base::Contract;
use psa_contracts::members::CreateMemberContract;
use psa_core::traits::Id;
use psa_models::member::{CreateMemberDto, Member};
use psa_store::EntityStore;
use tracing::info;

use crate::result::ServiceResult;

/// Service for adding a team member to a project
pub struct AddMemberService<'a> {
    store: &'a mut EntityStore,
}

impl<'a> AddMemberService<'a> {
    pub fn new(store: &'a mut EntityStore) -> Self {
        Self { store }
    }

    pub fn call(self, project_id: Id, dto: CreateMemberDto) -> ServiceResult<Member> {
        let project = match self.store.project(project_id) {
            Ok(project) => project,
            Err(e) => return ServiceResult::failure_from(e),
        };

        let contract = CreateMemberContract::new(project);
        if let Err(errors) = contract.validate(&dto) {
            return ServiceResult::failure(errors);
        }

        match self.store.add_member(project_id, Member::from(dto)) {
            Ok(member) => {
                info!(project_id, username = %member.username, "member added");
                ServiceResult::success(member)
            }
            Err(e) => ServiceResult::failure_from(e),
        }
    }
}
