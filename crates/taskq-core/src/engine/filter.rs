//! Predicate-combination stage.

use crate::models::{Task, TaskPriority};
use crate::query::{CompletionFilter, FilterSpec};
use chrono::{DateTime, Utc};

/// Keeps the tasks that satisfy every active predicate of `spec`, in input
/// order.
pub fn filter_tasks<'a>(tasks: &'a [Task], spec: &FilterSpec) -> Vec<&'a Task> {
    // matches_search expects a lowercase needle.
    let needle = spec.search_needle().map(str::to_lowercase);
    tasks
        .iter()
        .filter(|task| matches_with_needle(task, spec, needle.as_deref()))
        .collect()
}

/// Whether a single task satisfies every active predicate of `spec`.
pub fn matches(task: &Task, spec: &FilterSpec) -> bool {
    let needle = spec.search_needle().map(str::to_lowercase);
    matches_with_needle(task, spec, needle.as_deref())
}

fn matches_with_needle(task: &Task, spec: &FilterSpec, needle: Option<&str>) -> bool {
    matches_completion(task, spec.completed)
        && matches_priority(task, spec.priority)
        && matches_tags(task, &spec.tags)
        && needle.map_or(true, |needle| matches_search(task, needle))
        && matches_due_from(task, spec.due_date_from)
        && matches_due_to(task, spec.due_date_to)
}

fn matches_completion(task: &Task, filter: CompletionFilter) -> bool {
    match filter {
        CompletionFilter::Any => true,
        CompletionFilter::Only(completed) => task.completed == completed,
    }
}

fn matches_priority(task: &Task, wanted: Option<TaskPriority>) -> bool {
    match wanted {
        None => true,
        Some(TaskPriority::Unrecognized) => false,
        Some(wanted) => task.priority == Some(wanted),
    }
}

fn matches_tags(task: &Task, wanted: &[String]) -> bool {
    wanted.is_empty() || task.tags.iter().any(|tag| wanted.contains(tag))
}

/// `needle` must already be lowercase.
fn matches_search(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle)
        || task
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
}

fn matches_due_from(task: &Task, bound: Option<DateTime<Utc>>) -> bool {
    match bound {
        None => true,
        Some(bound) => task.due_instant().is_some_and(|due| due >= bound),
    }
}

fn matches_due_to(task: &Task, bound: Option<DateTime<Utc>>) -> bool {
    match bound {
        None => true,
        Some(bound) => task.due_instant().is_some_and(|due| due <= bound),
    }
}
