//! Project model
//!
//! The project is the aggregate root: it owns the ordered sequences of
//! tasks, members, baselines, milestones, budget periods, and change
//! requests that the entity store mutates.

use chrono::{DateTime, NaiveDate, Utc};
use psa_core::traits::{Entity, Id, Identifiable, Timestamped};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::baseline::Baseline;
use crate::budget_period::BudgetPeriod;
use crate::member::Member;
use crate::milestone::Milestone;
use crate::request::{BaselineRequest, TaskRequest};
use crate::task::Task;

/// Project status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    OnHold,
    Closed,
}

/// Project entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Option<Id>,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub client: String,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: ProjectStatus,

    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub members: Vec<Member>,

    /// Append-only audit trail of frozen plans
    #[serde(default)]
    pub baselines: Vec<Baseline>,

    #[serde(default)]
    pub milestones: Vec<Milestone>,

    #[serde(default)]
    pub budget_periods: Vec<BudgetPeriod>,

    #[serde(default)]
    pub task_requests: Vec<TaskRequest>,

    #[serde(default)]
    pub baseline_requests: Vec<BaselineRequest>,

    /// Explicit pointer to the baseline used for variance, set atomically
    /// when a baseline is created
    pub current_baseline_id: Option<Id>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            client: String::new(),
            start_date: None,
            end_date: None,
            status: ProjectStatus::Active,
            tasks: Vec::new(),
            members: Vec::new(),
            baselines: Vec::new(),
            milestones: Vec::new(),
            budget_periods: Vec::new(),
            task_requests: Vec::new(),
            baseline_requests: Vec::new(),
            current_baseline_id: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Identifiable for Project {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl Timestamped for Project {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for Project {
    const TYPE_NAME: &'static str = "Project";
}

impl Project {
    /// Create a new project with minimal required fields
    pub fn new(name: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client: client.into(),
            ..Default::default()
        }
    }

    pub fn task(&self, task_id: Id) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: Id) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    pub fn member(&self, username: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.username == username)
    }

    pub fn milestone(&self, milestone_id: Id) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == milestone_id)
    }

    /// The baseline that variance is computed against, if any
    pub fn current_baseline(&self) -> Option<&Baseline> {
        self.current_baseline_id
            .and_then(|id| self.baselines.iter().find(|b| b.id == id))
    }

    pub fn task_request(&self, request_id: Uuid) -> Option<&TaskRequest> {
        self.task_requests.iter().find(|r| r.id == request_id)
    }

    pub fn task_request_mut(&mut self, request_id: Uuid) -> Option<&mut TaskRequest> {
        self.task_requests.iter_mut().find(|r| r.id == request_id)
    }

    pub fn baseline_request(&self, request_id: Uuid) -> Option<&BaselineRequest> {
        self.baseline_requests.iter().find(|r| r.id == request_id)
    }

    pub fn baseline_request_mut(&mut self, request_id: Uuid) -> Option<&mut BaselineRequest> {
        self.baseline_requests.iter_mut().find(|r| r.id == request_id)
    }
}

/// DTO for creating a project
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub client: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
}

impl From<CreateProjectDto> for Project {
    fn from(dto: CreateProjectDto) -> Self {
        Self {
            name: dto.name,
            client: dto.client,
            start_date: dto.start_date,
            end_date: dto.end_date,
            status: dto.status.unwrap_or_default(),
            ..Default::default()
        }
    }
}
