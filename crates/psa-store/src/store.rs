//! Entity store
//!
//! An explicit owned store passed by handle to each service; there is no
//! ambient shared state. Collections are append-only except for the task
//! status/lock/end-date fields and the request status fields, which the
//! services update through `with_project_mut`.
//!
//! Every mutation bumps the owning project's revision. Callers that read a
//! project, edit the copy, and write it back wholesale must present the
//! revision they read; a stale revision is rejected with a conflict
//! instead of silently overwriting the other writer's effect.

use std::collections::BTreeMap;

use chrono::Utc;
use psa_core::error::PsaError;
use psa_core::result::PsaResult;
use psa_core::traits::{Entity, Id};
use psa_models::baseline::Baseline;
use psa_models::budget_period::BudgetPeriod;
use psa_models::member::Member;
use psa_models::milestone::{CreateMilestoneDto, Milestone};
use psa_models::project::{CreateProjectDto, Project};
use psa_models::request::{BaselineRequest, TaskRequest};
use psa_models::task::{Task, TaskFieldsUpdate};

struct ProjectRecord {
    revision: u64,
    project: Project,
}

/// Authoritative in-memory collections
pub struct EntityStore {
    projects: BTreeMap<Id, ProjectRecord>,
    next_id: Id,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            projects: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> Id {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn record(&self, project_id: Id) -> PsaResult<&ProjectRecord> {
        self.projects.get(&project_id).ok_or_else(|| {
            PsaError::not_found(Project::TYPE_NAME, "id", project_id)
        })
    }

    /// Look up a project by id
    pub fn project(&self, project_id: Id) -> PsaResult<&Project> {
        self.record(project_id).map(|r| &r.project)
    }

    /// Current revision of a project, for optimistic writes
    pub fn project_revision(&self, project_id: Id) -> PsaResult<u64> {
        self.record(project_id).map(|r| r.revision)
    }

    /// Iterate over all projects in id order
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values().map(|r| &r.project)
    }

    pub fn project_ids(&self) -> Vec<Id> {
        self.projects.keys().copied().collect()
    }

    /// Create a project and return it with its assigned id
    pub fn create_project(&mut self, dto: CreateProjectDto) -> PsaResult<Project> {
        let id = self.allocate_id();
        let now = Utc::now();

        let mut project = Project::from(dto);
        project.id = Some(id);
        project.created_at = Some(now);
        project.updated_at = Some(now);

        let stored = project.clone();
        self.projects.insert(
            id,
            ProjectRecord {
                revision: 0,
                project,
            },
        );
        tracing::debug!(project_id = id, "project created");
        Ok(stored)
    }

    /// Run a mutation against one project, bumping its revision on success.
    ///
    /// An Err return leaves the revision untouched; closures must reject
    /// before mutating.
    pub fn with_project_mut<T>(
        &mut self,
        project_id: Id,
        f: impl FnOnce(&mut Project) -> PsaResult<T>,
    ) -> PsaResult<T> {
        let record = self.projects.get_mut(&project_id).ok_or_else(|| {
            PsaError::not_found(Project::TYPE_NAME, "id", project_id)
        })?;

        let value = f(&mut record.project)?;
        record.revision += 1;
        record.project.updated_at = Some(Utc::now());
        Ok(value)
    }

    /// Replace a project wholesale, rejecting writes against a stale
    /// revision
    pub fn replace_project(
        &mut self,
        project_id: Id,
        expected_revision: u64,
        project: Project,
    ) -> PsaResult<&Project> {
        let record = self.projects.get_mut(&project_id).ok_or_else(|| {
            PsaError::not_found(Project::TYPE_NAME, "id", project_id)
        })?;

        if record.revision != expected_revision {
            return Err(PsaError::conflict(format!(
                "project {} was modified (revision {} != expected {})",
                project_id, record.revision, expected_revision
            )));
        }

        record.project = project;
        record.project.id = Some(project_id);
        record.project.updated_at = Some(Utc::now());
        record.revision += 1;
        Ok(&record.project)
    }

    /// Append a task; the id is caller-supplied and must be unique within
    /// the project
    pub fn add_task(&mut self, project_id: Id, task: Task) -> PsaResult<Task> {
        self.with_project_mut(project_id, |project| {
            if project.task(task.id).is_some() {
                return Err(PsaError::conflict(format!(
                    "task {} already exists in project {}",
                    task.id, project_id
                )));
            }
            let now = Utc::now();
            let mut task = task;
            task.created_at = Some(now);
            task.updated_at = Some(now);
            let stored = task.clone();
            project.tasks.push(task);
            Ok(stored)
        })
    }

    /// Append a member; the username must be unique within the project
    pub fn add_member(&mut self, project_id: Id, member: Member) -> PsaResult<Member> {
        self.with_project_mut(project_id, |project| {
            if project.member(&member.username).is_some() {
                return Err(PsaError::conflict(format!(
                    "member {} already exists in project {}",
                    member.username, project_id
                )));
            }
            let stored = member.clone();
            project.members.push(member);
            Ok(stored)
        })
    }

    /// Append a baseline and point the project at it in the same mutation
    pub fn add_baseline(
        &mut self,
        project_id: Id,
        build: impl FnOnce(Id, &Project) -> Baseline,
    ) -> PsaResult<Baseline> {
        let baseline_id = self.allocate_id();
        self.with_project_mut(project_id, |project| {
            let baseline = build(baseline_id, project);
            let stored = baseline.clone();
            project.baselines.push(baseline);
            project.current_baseline_id = Some(baseline_id);
            Ok(stored)
        })
    }

    /// Append a milestone, assigning its id
    pub fn add_milestone(
        &mut self,
        project_id: Id,
        dto: CreateMilestoneDto,
    ) -> PsaResult<Milestone> {
        let milestone_id = self.allocate_id();
        self.with_project_mut(project_id, |project| {
            let milestone = dto.into_milestone(milestone_id);
            let stored = milestone.clone();
            project.milestones.push(milestone);
            Ok(stored)
        })
    }

    /// Append a budget period
    pub fn add_budget_period(
        &mut self,
        project_id: Id,
        period: BudgetPeriod,
    ) -> PsaResult<BudgetPeriod> {
        self.with_project_mut(project_id, |project| {
            let stored = period.clone();
            project.budget_periods.push(period);
            Ok(stored)
        })
    }

    /// Append a task request
    pub fn add_task_request(
        &mut self,
        project_id: Id,
        request: TaskRequest,
    ) -> PsaResult<TaskRequest> {
        self.with_project_mut(project_id, |project| {
            let stored = request.clone();
            project.task_requests.push(request);
            Ok(stored)
        })
    }

    /// Append a baseline request
    pub fn add_baseline_request(
        &mut self,
        project_id: Id,
        request: BaselineRequest,
    ) -> PsaResult<BaselineRequest> {
        self.with_project_mut(project_id, |project| {
            let stored = request.clone();
            project.baseline_requests.push(request);
            Ok(stored)
        })
    }

    /// Partial update of a task's mutable fields (status, lock, end date)
    pub fn update_task_fields(
        &mut self,
        project_id: Id,
        task_id: Id,
        update: TaskFieldsUpdate,
    ) -> PsaResult<Task> {
        self.with_project_mut(project_id, |project| {
            let task = project
                .task_mut(task_id)
                .ok_or_else(|| PsaError::not_found(Task::TYPE_NAME, "id", task_id))?;
            update.apply_to(task);
            task.updated_at = Some(Utc::now());
            Ok(task.clone())
        })
    }

    /// Increment a task's booked hours; the timesheet path is the only
    /// mutator of actual_hours
    pub fn add_actual_hours(
        &mut self,
        project_id: Id,
        task_id: Id,
        hours: f64,
    ) -> PsaResult<Task> {
        self.with_project_mut(project_id, |project| {
            let task = project
                .task_mut(task_id)
                .ok_or_else(|| PsaError::not_found(Task::TYPE_NAME, "id", task_id))?;
            task.actual_hours += hours;
            task.updated_at = Some(Utc::now());
            Ok(task.clone())
        })
    }
}
