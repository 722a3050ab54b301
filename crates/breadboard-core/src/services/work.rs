//! Work: projects, tasks and the calendar.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::{client_name, PLACEHOLDER};
use crate::dataset::Dataset;
use crate::model::{CalendarEvent, ProjectStatus, TaskStatus};

/// Window used for "due this week".
const WEEK_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOverview {
    pub open_tasks: usize,
    pub blocked_tasks: usize,
    pub done_tasks: usize,
    pub due_this_week: usize,
    pub active_projects: usize,
    /// Mean project progress in `[0, 1]`, 0 without projects
    pub average_progress: f64,
}

pub fn overview(data: &Dataset, now: DateTime<Utc>) -> WorkOverview {
    let mut open_tasks = 0;
    let mut blocked_tasks = 0;
    let mut done_tasks = 0;
    let mut due_this_week = 0;
    let week_end = now + Duration::days(WEEK_DAYS);

    for task in &data.tasks {
        match task.status {
            TaskStatus::Open => open_tasks += 1,
            TaskStatus::Blocked => blocked_tasks += 1,
            TaskStatus::Done => done_tasks += 1,
        }
        if task.status != TaskStatus::Done && task.due >= now && task.due <= week_end {
            due_this_week += 1;
        }
    }

    let active_projects = data
        .projects
        .iter()
        .filter(|project| project.status == ProjectStatus::Doing)
        .count();
    let average_progress = if data.projects.is_empty() {
        0.0
    } else {
        data.projects.iter().map(|p| p.progress).sum::<f64>() / data.projects.len() as f64
    };

    WorkOverview {
        open_tasks,
        blocked_tasks,
        done_tasks,
        due_this_week,
        active_projects,
        average_progress,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRow {
    pub id: String,
    pub title: String,
    pub client_name: String,
    pub status: ProjectStatus,
    pub progress: f64,
    pub deadline: DateTime<Utc>,
    /// Negative once the deadline has passed
    pub days_left: i64,
}

pub fn projects(data: &Dataset, now: DateTime<Utc>) -> Vec<ProjectRow> {
    data.projects
        .iter()
        .map(|project| ProjectRow {
            id: project.id.clone(),
            title: project.title.clone(),
            client_name: client_name(data, Some(&project.client_id)),
            status: project.status,
            progress: project.progress,
            deadline: project.deadline,
            days_left: (project.deadline - now).num_days(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub due: DateTime<Utc>,
    pub client_name: String,
    pub project_title: String,
}

/// Tasks ordered by due date, optionally restricted to one status.
pub fn tasks(data: &Dataset, status: Option<TaskStatus>) -> Vec<TaskRow> {
    let mut rows: Vec<TaskRow> = data
        .tasks
        .iter()
        .filter(|task| status.map_or(true, |wanted| task.status == wanted))
        .map(|task| {
            let project_title = task
                .project_id
                .as_deref()
                .and_then(|id| data.projects.iter().find(|p| p.id == id))
                .map(|p| p.title.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            TaskRow {
                id: task.id.clone(),
                title: task.title.clone(),
                status: task.status,
                due: task.due,
                client_name: client_name(data, task.client_id.as_deref()),
                project_title,
            }
        })
        .collect();
    rows.sort_by_key(|row| row.due);
    rows
}

/// Calendar events in start order.
pub fn calendar(data: &Dataset) -> Vec<CalendarEvent> {
    let mut events = data.calendar.clone();
    events.sort_by_key(|event| event.start);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::build;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_overview_counts() {
        let now = anchor();
        let work = overview(&build(now), now);
        assert_eq!(work.open_tasks, 9);
        assert_eq!(work.blocked_tasks, 3);
        assert_eq!(work.done_tasks, 4);
        assert_eq!(work.active_projects, 3);
        assert!(work.average_progress > 0.0 && work.average_progress <= 1.0);
    }

    #[test]
    fn test_due_this_week_excludes_past_and_done() {
        let now = anchor();
        let data = build(now);
        let work = overview(&data, now);
        let expected = data
            .tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Done)
            .filter(|t| t.due >= now && t.due <= now + Duration::days(7))
            .count();
        assert_eq!(work.due_this_week, expected);
    }

    #[test]
    fn test_empty_overview() {
        let work = overview(&Dataset::default(), anchor());
        assert_eq!(work.average_progress, 0.0);
        assert_eq!(work.open_tasks, 0);
    }

    #[test]
    fn test_tasks_filter_and_order() {
        let data = build(anchor());
        let blocked = tasks(&data, Some(TaskStatus::Blocked));
        assert_eq!(blocked.len(), 3);
        let all = tasks(&data, None);
        assert!(all.windows(2).all(|w| w[0].due <= w[1].due));
        assert!(all.iter().all(|t| t.project_title != PLACEHOLDER));
    }

    #[test]
    fn test_calendar_sorted() {
        let events = calendar(&build(anchor()));
        assert!(events.windows(2).all(|w| w[0].start <= w[1].start));
    }
}
