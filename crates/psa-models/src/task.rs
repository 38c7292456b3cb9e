//! Task model
//!
//! Tasks are the unit of planning and time booking. Their lifecycle status
//! is caller-driven; the orthogonal `locked` flag is owned by the lock
//! sweep and released only through an approved task request.

use chrono::{DateTime, NaiveDate, Utc};
use psa_core::traits::{Entity, Id, Identifiable, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Active,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Task entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Caller-supplied identifier, unique within the owning project
    pub id: Id,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub estimated_hours: f64,
    pub cost_per_hour: f64,

    /// Fixed at input time as estimated_hours x cost_per_hour; never
    /// re-derived afterwards
    pub estimated_cost: f64,

    /// Accumulated through timesheet postings only
    pub actual_hours: f64,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Username of the assigned member, if any
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub status: TaskStatus,

    /// Read-only overlay released only via an approved task request
    #[serde(default)]
    pub locked: bool,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identifiable for Task {
    fn id(&self) -> Option<Id> {
        Some(self.id)
    }
}

impl Timestamped for Task {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for Task {
    const TYPE_NAME: &'static str = "Task";
}

impl Task {
    /// Cost incurred so far, always derived from booked hours
    pub fn actual_cost(&self) -> f64 {
        self.actual_hours * self.cost_per_hour
    }

    /// Whether the task is past its end date without being completed
    pub fn overdue(&self, today: NaiveDate) -> bool {
        !self.status.is_completed() && today > self.end_date
    }
}

/// DTO for creating a task
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    pub id: Id,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub estimated_hours: f64,

    #[validate(range(min = 0.0))]
    pub cost_per_hour: f64,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub assigned_to: Option<String>,
    pub status: Option<TaskStatus>,
}

impl From<CreateTaskDto> for Task {
    fn from(dto: CreateTaskDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            estimated_hours: dto.estimated_hours,
            cost_per_hour: dto.cost_per_hour,
            estimated_cost: dto.estimated_hours * dto.cost_per_hour,
            actual_hours: 0.0,
            start_date: dto.start_date,
            end_date: dto.end_date,
            assigned_to: dto.assigned_to,
            status: dto.status.unwrap_or_default(),
            locked: false,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Partial update of the mutable task fields
///
/// Only status, lock state, and end date support update-by-id; everything
/// else on a task is append-only or owned by the timesheet path.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskFieldsUpdate {
    pub status: Option<TaskStatus>,
    pub locked: Option<bool>,
    pub end_date: Option<NaiveDate>,
}

impl TaskFieldsUpdate {
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(locked) = self.locked {
            task.locked = locked;
        }
        if let Some(end_date) = self.end_date {
            task.end_date = end_date;
        }
    }
}
