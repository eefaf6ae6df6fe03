//! The task query engine.
//!
//! [`apply`] runs the three stages in order: [`filter`] selects the tasks
//! matching a [`FilterSpec`], [`sort`] orders them, and [`stats`] summarises
//! the *unfiltered* collection. Nothing here performs I/O, reads a clock or
//! mutates its inputs, so the engine can be re-run on every state change.

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::{filter_tasks, matches};
pub use sort::{comparator, sort_tasks, TaskComparator};
pub use stats::{compute_stats, TaskStats};

use crate::models::Task;
use crate::query::FilterSpec;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of one engine run. Tasks are borrowed from the input collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome<'a> {
    pub tasks: Vec<&'a Task>,
    pub stats: TaskStats,
}

impl QueryOutcome<'_> {
    pub fn ids(&self) -> Vec<i64> {
        self.tasks.iter().map(|task| task.id).collect()
    }
}

pub fn apply<'a>(tasks: &'a [Task], spec: &FilterSpec, now: DateTime<Utc>) -> QueryOutcome<'a> {
    let filtered = filter_tasks(tasks, spec);
    let ordered = sort_tasks(&filtered, spec.sort_by, spec.sort_order);
    let stats = compute_stats(tasks, now);

    tracing::debug!(
        input = tasks.len(),
        active_predicates = spec.active_predicates(),
        matched = ordered.len(),
        sort_by = %spec.sort_by,
        sort_order = %spec.sort_order,
        "applied task query"
    );

    QueryOutcome {
        tasks: ordered,
        stats,
    }
}
