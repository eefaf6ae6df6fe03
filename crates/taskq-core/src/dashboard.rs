//! Dashboard summaries built on top of the engine stages.

use crate::engine::{compute_stats, sort_tasks, TaskStats};
use crate::models::Task;
use crate::query::{SortKey, SortOrder};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    /// How many upcoming tasks to show
    pub upcoming_limit: usize,
    /// How many recurring tasks to show
    pub recurring_limit: usize,
    /// Window for the due-soon list, in days from now
    pub due_soon_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            upcoming_limit: 5,
            recurring_limit: 3,
            due_soon_days: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<'a> {
    pub stats: TaskStats,
    pub completion_percent: u8,
    pub upcoming: Vec<&'a Task>,
    pub due_soon: Vec<&'a Task>,
    pub high_priority: Vec<&'a Task>,
    pub recurring: Vec<&'a Task>,
}

impl<'a> Dashboard<'a> {
    pub fn build(tasks: &'a [Task], now: DateTime<Utc>, config: &DashboardConfig) -> Self {
        let stats = compute_stats(tasks, now);
        Self {
            stats,
            completion_percent: stats.completion_percent(),
            upcoming: upcoming(tasks, config.upcoming_limit),
            due_soon: due_soon(tasks, now, config.due_soon_days),
            high_priority: high_priority(tasks),
            recurring: recurring(tasks, config.recurring_limit),
        }
    }
}

fn pending_with_due_date(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| !task.completed && task.due_instant().is_some())
        .collect()
}

/// Incomplete tasks that have a due date, soonest first.
pub fn upcoming(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let candidates = pending_with_due_date(tasks);
    let mut ordered = sort_tasks(&candidates, SortKey::DueDate, SortOrder::Asc);
    ordered.truncate(limit);
    ordered
}

/// Incomplete tasks due within `days_ahead` days of `now`, soonest first.
/// Overdue tasks are included.
pub fn due_soon(tasks: &[Task], now: DateTime<Utc>, days_ahead: i64) -> Vec<&Task> {
    // A window past the end of time keeps every dated task.
    let limit = Duration::try_days(days_ahead)
        .and_then(|window| now.checked_add_signed(window))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    let candidates: Vec<&Task> = pending_with_due_date(tasks)
        .into_iter()
        .filter(|task| task.due_instant().is_some_and(|due| due <= limit))
        .collect();
    sort_tasks(&candidates, SortKey::DueDate, SortOrder::Asc)
}

pub fn high_priority(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|task| task.is_high_priority()).collect()
}

pub fn recurring(tasks: &[Task], limit: usize) -> Vec<&Task> {
    tasks.iter().filter(|task| task.recurring).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskPriority, Timestamp};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap()
    }

    fn due_in(id: i64, days: i64) -> Task {
        let mut task = Task::new(id, format!("task {id}"), now() - Duration::days(30));
        task.due_date = Some(Timestamp::Valid(now() + Duration::days(days)));
        task
    }

    #[test]
    fn test_upcoming_orders_by_due_and_truncates() {
        let mut done = due_in(9, 0);
        done.completed = true;
        let tasks = vec![
            due_in(1, 4),
            due_in(2, 1),
            done,
            Task::new(3, "no due", now()),
            due_in(4, 2),
        ];
        let ids: Vec<i64> = upcoming(&tasks, 2).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_due_soon_includes_overdue_and_respects_window() {
        let tasks = vec![due_in(1, 5), due_in(2, -1), due_in(3, 3), due_in(4, 1)];
        let ids: Vec<i64> = due_soon(&tasks, now(), 3).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4, 3]);
    }

    #[test]
    fn test_due_soon_with_huge_window_keeps_every_dated_task() {
        let tasks = vec![due_in(1, 400), due_in(2, -1), Task::new(3, "no due", now())];
        let ids: Vec<i64> = due_soon(&tasks, now(), i64::MAX).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);

        let config = DashboardConfig {
            due_soon_days: 1_000_000_000,
            ..DashboardConfig::default()
        };
        let dashboard = Dashboard::build(&tasks, now(), &config);
        assert_eq!(dashboard.due_soon.len(), 2);
    }

    #[test]
    fn test_recurring_keeps_input_order() {
        let mut tasks: Vec<Task> = (1..=5).map(|id| due_in(id, id)).collect();
        for task in tasks.iter_mut().filter(|t| t.id != 2) {
            task.recurring = true;
        }
        let ids: Vec<i64> = recurring(&tasks, 3).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_build_bundles_everything() {
        let mut urgent = due_in(1, -2);
        urgent.priority = Some(TaskPriority::Urgent);
        let mut finished = due_in(2, 1);
        finished.completed = true;
        let tasks = vec![urgent, finished];

        let dashboard = Dashboard::build(&tasks, now(), &DashboardConfig::default());
        assert_eq!(dashboard.stats.total, 2);
        assert_eq!(dashboard.stats.overdue, 1);
        assert_eq!(dashboard.completion_percent, 50);
        assert_eq!(dashboard.high_priority.len(), 1);
        assert_eq!(dashboard.upcoming.len(), 1);
        assert!(dashboard.recurring.is_empty());
    }
}
