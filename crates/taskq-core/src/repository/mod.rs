use crate::dashboard::{Dashboard, DashboardConfig};
use crate::engine::{self, QueryOutcome, TaskStats};
use crate::error::CoreError;
use crate::models::Task;
use crate::query::FilterSpec;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub mod json;

pub use json::{parse_tasks_document, JsonFileSource};

/// Anything that can hand over the current task collection, typically a
/// persistence service. The engine never talks to it directly: callers fetch,
/// then query the resulting [`TaskSnapshot`].
pub trait TaskSource {
    fn fetch_tasks(&self) -> Result<Vec<Task>, CoreError>;
}

/// Supplies the reference instant for overdue computation.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Immutable, ordered view over a task collection.
///
/// Clones share the same storage. There is no way to mutate the tasks
/// through a snapshot; after a create/update/delete the caller fetches a new
/// one and re-runs its queries.
#[derive(Debug, Clone)]
pub struct TaskSnapshot {
    tasks: Arc<[Task]>,
}

impl TaskSnapshot {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into(),
        }
    }

    pub fn fetch(source: &impl TaskSource) -> Result<Self, CoreError> {
        let tasks = source.fetch_tasks()?;
        tracing::debug!(count = tasks.len(), "fetched task snapshot");
        Ok(Self::new(tasks))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn query(&self, spec: &FilterSpec, now: DateTime<Utc>) -> QueryOutcome<'_> {
        engine::apply(&self.tasks, spec, now)
    }

    pub fn stats(&self, now: DateTime<Utc>) -> TaskStats {
        engine::compute_stats(&self.tasks, now)
    }

    pub fn dashboard(&self, now: DateTime<Utc>, config: &DashboardConfig) -> Dashboard<'_> {
        Dashboard::build(&self.tasks, now, config)
    }
}

impl From<Vec<Task>> for TaskSnapshot {
    fn from(tasks: Vec<Task>) -> Self {
        Self::new(tasks)
    }
}
