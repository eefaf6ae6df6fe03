//! Statistics-aggregation stage.

use crate::models::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary counts over a whole task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    pub high_priority: usize,
}

impl TaskStats {
    /// Rounded share of completed tasks, 0 for an empty collection.
    pub fn completion_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
    }
}

/// Counts are taken over every task given, regardless of any filter.
/// `now` is supplied by the caller.
pub fn compute_stats(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };

    for task in tasks {
        if task.completed {
            stats.completed += 1;
        }
        if task.is_overdue(now) {
            stats.overdue += 1;
        }
        if task.is_high_priority() {
            stats.high_priority += 1;
        }
    }

    stats.pending = stats.total - stats.completed;
    stats
}
