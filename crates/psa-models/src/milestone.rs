//! Milestone model

use psa_core::traits::{Entity, Id, Identifiable};
use psa_core::types::DateRange;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Milestone status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

/// Milestone entity
///
/// The task list is frozen at creation time, not live-linked: tasks added
/// to the project later do not appear here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: Id,
    pub name: String,
    pub dates: DateRange,
    #[serde(default)]
    pub status: MilestoneStatus,
    pub task_ids: Vec<Id>,
}

impl Identifiable for Milestone {
    fn id(&self) -> Option<Id> {
        Some(self.id)
    }
}

impl Entity for Milestone {
    const TYPE_NAME: &'static str = "Milestone";
}

/// DTO for creating a milestone
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMilestoneDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub dates: DateRange,
    pub status: Option<MilestoneStatus>,
    #[serde(default)]
    pub task_ids: Vec<Id>,
}

impl CreateMilestoneDto {
    pub fn into_milestone(self, id: Id) -> Milestone {
        Milestone {
            id,
            name: self.name,
            dates: self.dates,
            status: self.status.unwrap_or_default(),
            task_ids: self.task_ids,
        }
    }
}
