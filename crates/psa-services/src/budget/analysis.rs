//! Member and task cost analysis
//!
//! Read-only projections over a project; nothing here is stored.

use psa_core::traits::Id;
use psa_core::types::safe_ratio;
use psa_models::project::Project;
use serde::Serialize;

/// Per-member profitability row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCostRow {
    pub username: String,
    pub labour_category: String,
    /// Sum of estimated hours across the member's assigned tasks
    pub allocated_hours: f64,
    pub actual_hours: f64,
    pub actual_cost: f64,
    pub revenue: f64,
    pub profit: f64,
    /// actual / allocated hours, as a percentage (0 when unallocated)
    pub efficiency_percentage: f64,
}

/// Per-task spend row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCostRow {
    pub task_id: Id,
    pub task_name: String,
    pub estimated_hours: f64,
    pub actual_hours: f64,
    pub estimated_cost: f64,
    pub actual_cost: f64,
    /// actual / estimated cost, as a percentage (0 when unestimated)
    pub cost_utilization_percentage: f64,
}

pub fn member_cost_analysis(project: &Project) -> Vec<MemberCostRow> {
    project
        .members
        .iter()
        .map(|member| {
            let assigned = project
                .tasks
                .iter()
                .filter(|t| t.assigned_to.as_deref() == Some(member.username.as_str()));

            let mut allocated_hours = 0.0;
            let mut actual_hours = 0.0;
            for task in assigned {
                allocated_hours += task.estimated_hours;
                actual_hours += task.actual_hours;
            }

            let actual_cost = actual_hours * member.hourly_cost_rate;
            let revenue = actual_hours * member.client_billing_rate;

            MemberCostRow {
                username: member.username.clone(),
                labour_category: member.labour_category.clone(),
                allocated_hours,
                actual_hours,
                actual_cost,
                revenue,
                profit: revenue - actual_cost,
                efficiency_percentage: safe_ratio(actual_hours, allocated_hours) * 100.0,
            }
        })
        .collect()
}

pub fn task_cost_analysis(project: &Project) -> Vec<TaskCostRow> {
    project
        .tasks
        .iter()
        .map(|task| TaskCostRow {
            task_id: task.id,
            task_name: task.name.clone(),
            estimated_hours: task.estimated_hours,
            actual_hours: task.actual_hours,
            estimated_cost: task.estimated_cost,
            actual_cost: task.actual_cost(),
            cost_utilization_percentage: safe_ratio(task.actual_cost(), task.estimated_cost)
                * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use psa_models::member::{CreateMemberDto, Member};
    use psa_models::task::{CreateTaskDto, Task};

    fn member(username: &str, cost: f64, billing: f64) -> Member {
        Member::from(CreateMemberDto {
            username: username.to_string(),
            labour_category: "Consultant".to_string(),
            hourly_cost_rate: cost,
            client_billing_rate: billing,
            status: None,
        })
    }

    fn task(id: Id, hours: f64, rate: f64, assigned_to: Option<&str>) -> Task {
        Task::from(CreateTaskDto {
            id,
            name: format!("Task {}", id),
            estimated_hours: hours,
            cost_per_hour: rate,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            assigned_to: assigned_to.map(str::to_string),
            status: None,
        })
    }

    fn project() -> Project {
        let mut project = Project::new("ERP rollout", "Acme Corp");
        project.members.push(member("avery", 80.0, 150.0));
        project.members.push(member("blake", 90.0, 170.0));
        project.tasks.push(task(1, 10.0, 100.0, Some("avery")));
        project.tasks.push(task(2, 30.0, 100.0, Some("avery")));
        project.tasks.push(task(3, 20.0, 100.0, None));
        project.task_mut(1).unwrap().actual_hours = 8.0;
        project.task_mut(2).unwrap().actual_hours = 12.0;
        project
    }

    #[test]
    fn test_member_rows() {
        let project = project();
        let rows = member_cost_analysis(&project);
        assert_eq!(rows.len(), 2);

        let avery = rows.iter().find(|r| r.username == "avery").unwrap();
        assert_eq!(avery.allocated_hours, 40.0);
        assert_eq!(avery.actual_hours, 20.0);
        assert_eq!(avery.actual_cost, 1600.0);
        assert_eq!(avery.revenue, 3000.0);
        assert_eq!(avery.profit, 1400.0);
        assert!((avery.efficiency_percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_unallocated_member_has_zero_efficiency() {
        let project = project();
        let rows = member_cost_analysis(&project);
        let blake = rows.iter().find(|r| r.username == "blake").unwrap();
        assert_eq!(blake.allocated_hours, 0.0);
        assert_eq!(blake.efficiency_percentage, 0.0);
        assert!(!blake.efficiency_percentage.is_nan());
    }

    #[test]
    fn test_task_rows() {
        let project = project();
        let rows = task_cost_analysis(&project);
        assert_eq!(rows.len(), 3);

        let first = rows.iter().find(|r| r.task_id == 1).unwrap();
        assert_eq!(first.estimated_cost, 1000.0);
        assert_eq!(first.actual_cost, 800.0);
        assert!((first.cost_utilization_percentage - 80.0).abs() < 1e-9);
    }
}
