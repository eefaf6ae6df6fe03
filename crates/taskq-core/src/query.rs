use crate::models::TaskPriority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Completion dimension of a filter. `Any` means the dimension is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    #[default]
    Any,
    Only(bool),
}

impl CompletionFilter {
    pub fn is_active(self) -> bool {
        matches!(self, CompletionFilter::Only(_))
    }
}

impl From<Option<bool>> for CompletionFilter {
    fn from(value: Option<bool>) -> Self {
        value.map_or(CompletionFilter::Any, CompletionFilter::Only)
    }
}

// On the wire the completion filter is a nullable boolean.
impl Serialize for CompletionFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CompletionFilter::Any => serializer.serialize_none(),
            CompletionFilter::Only(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de> Deserialize<'de> for CompletionFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<bool>::deserialize(deserializer).map(CompletionFilter::from)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    CreatedAt,
    DueDate,
    Priority,
    Title,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::CreatedAt => write!(f, "created_at"),
            SortKey::DueDate => write!(f, "due_date"),
            SortKey::Priority => write!(f, "priority"),
            SortKey::Title => write!(f, "title"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid sort key: {0} (expected created_at, due_date, priority or title)")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "created_at" | "created" => Ok(SortKey::CreatedAt),
            "due_date" | "due" => Ok(SortKey::DueDate),
            "priority" => Ok(SortKey::Priority),
            "title" => Ok(SortKey::Title),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid sort order: {0} (expected asc or desc)")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// Declarative description of which tasks to include and how to order them.
///
/// Every filter dimension is independent; a task must satisfy all active
/// ones. Empty `tags` and empty `search_query` count as inactive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub completed: CompletionFilter,
    pub priority: Option<TaskPriority>,
    /// Matches when a task carries at least one of these tags.
    pub tags: Vec<String>,
    pub due_date_from: Option<DateTime<Utc>>,
    pub due_date_to: Option<DateTime<Utc>>,
    pub search_query: Option<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = CompletionFilter::Only(completed);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn with_due_range(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.due_date_from = from;
        self.due_date_to = to;
        self
    }

    pub fn sorted_by(mut self, sort_by: SortKey, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// The search needle, if the search predicate is active.
    pub fn search_needle(&self) -> Option<&str> {
        self.search_query.as_deref().filter(|q| !q.is_empty())
    }

    pub fn active_predicates(&self) -> usize {
        [
            self.completed.is_active(),
            self.priority.is_some(),
            !self.tags.is_empty(),
            self.search_needle().is_some(),
            self.due_date_from.is_some(),
            self.due_date_to.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}
