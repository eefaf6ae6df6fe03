//! # Taskq Core Library
//!
//! A pure query engine over task collections: filtering, stable sorting and
//! dashboard statistics, with no I/O and no ambient clock.
//!
//! ## Core Modules
//!
//! - [`models`]: Task records, priority and recurrence vocabularies, timestamps
//! - [`query`]: The declarative [`query::FilterSpec`]
//! - [`engine`]: Predicate, comparator and aggregation stages plus [`engine::apply`]
//! - [`dashboard`]: Upcoming, due-soon, high-priority and recurring summaries
//! - [`repository`]: Immutable task snapshots and the task source / clock seams
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use taskq_core::{
//!     engine,
//!     models::{Task, TaskPriority},
//!     query::{FilterSpec, SortKey, SortOrder},
//! };
//!
//! let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
//! let mut report = Task::new(1, "Write report", created);
//! report.priority = Some(TaskPriority::High);
//! let tasks = vec![report, Task::new(2, "Buy groceries", created)];
//!
//! let spec = FilterSpec::new()
//!     .with_completed(false)
//!     .sorted_by(SortKey::Priority, SortOrder::Desc);
//! let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
//!
//! let outcome = engine::apply(&tasks, &spec, now);
//! assert_eq!(outcome.ids(), vec![1, 2]);
//! assert_eq!(outcome.stats.high_priority, 1);
//! ```

pub mod dashboard;
pub mod engine;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;
