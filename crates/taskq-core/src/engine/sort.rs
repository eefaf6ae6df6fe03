//! Comparator-construction stage.
//!
//! Each sort key has its own comparator. Absent values (no due date, no
//! priority, malformed timestamps) are modelled as `None` and compared through
//! `Option`'s ordering, so they always sort lowest and never collide with a
//! real instant such as the Unix epoch.

use crate::models::Task;
use crate::query::{SortKey, SortOrder};
use std::cmp::Ordering;

pub type TaskComparator = fn(&Task, &Task) -> Ordering;

/// Returns a new, stably ordered sequence; the input slice is untouched.
pub fn sort_tasks<'a>(tasks: &[&'a Task], sort_by: SortKey, sort_order: SortOrder) -> Vec<&'a Task> {
    let compare = comparator(sort_by);
    let mut sorted = tasks.to_vec();
    // `sort_by` is stable; reversing only flips the sign so ties stay ties.
    sorted.sort_by(|a, b| match sort_order {
        SortOrder::Asc => compare(*a, *b),
        SortOrder::Desc => compare(*a, *b).reverse(),
    });
    sorted
}

pub fn comparator(sort_by: SortKey) -> TaskComparator {
    match sort_by {
        SortKey::CreatedAt => compare_created_at,
        SortKey::DueDate => compare_due_date,
        SortKey::Priority => compare_priority,
        SortKey::Title => compare_title,
    }
}

fn compare_created_at(a: &Task, b: &Task) -> Ordering {
    a.created_instant().cmp(&b.created_instant())
}

fn compare_due_date(a: &Task, b: &Task) -> Ordering {
    a.due_instant().cmp(&b.due_instant())
}

fn compare_priority(a: &Task, b: &Task) -> Ordering {
    let rank = |task: &Task| task.priority.and_then(|p| p.rank());
    rank(a).cmp(&rank(b))
}

/// Case-sensitive, byte-wise.
fn compare_title(a: &Task, b: &Task) -> Ordering {
    a.title.cmp(&b.title)
}
