//! Member model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Member status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

/// Project team member
///
/// Identity is the username string matching an employee directory entry;
/// there is no cross-project identity beyond that.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique within the owning project
    #[validate(length(min = 1, max = 100))]
    pub username: String,

    pub labour_category: String,

    /// Internal cost rate per hour
    pub hourly_cost_rate: f64,

    /// Rate billed to the client per hour
    pub client_billing_rate: f64,

    #[serde(default)]
    pub status: MemberStatus,
}

impl Member {
    pub fn is_active(&self) -> bool {
        matches!(self.status, MemberStatus::Active)
    }
}

/// DTO for adding a member to a project
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberDto {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    pub labour_category: String,
    #[validate(range(min = 0.0))]
    pub hourly_cost_rate: f64,
    #[validate(range(min = 0.0))]
    pub client_billing_rate: f64,
    pub status: Option<MemberStatus>,
}

impl From<CreateMemberDto> for Member {
    fn from(dto: CreateMemberDto) -> Self {
        Self {
            username: dto.username,
            labour_category: dto.labour_category,
            hourly_cost_rate: dto.hourly_cost_rate,
            client_billing_rate: dto.client_billing_rate,
            status: dto.status.unwrap_or_default(),
        }
    }
}
