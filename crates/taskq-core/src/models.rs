use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, DefaultOnNull};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
    /// A stored value outside the priority vocabulary.
    #[serde(other)]
    Unrecognized,
}

impl TaskPriority {
    /// Explicit sort rank. Unrecognized values have no rank and sort with
    /// tasks that carry no priority at all.
    pub fn rank(self) -> Option<u8> {
        match self {
            TaskPriority::Low => Some(0),
            TaskPriority::Medium => Some(1),
            TaskPriority::High => Some(2),
            TaskPriority::Urgent => Some(3),
            TaskPriority::Unrecognized => None,
        }
    }

    pub fn is_high(self) -> bool {
        matches!(self, TaskPriority::High | TaskPriority::Urgent)
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
            TaskPriority::Urgent => write!(f, "urgent"),
            TaskPriority::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task priority: {0}")]
pub struct ParseTaskPriorityError(String);

impl FromStr for TaskPriority {
    type Err = ParseTaskPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            "urgent" => Ok(TaskPriority::Urgent),
            _ => Err(ParseTaskPriorityError(s.to_string())),
        }
    }
}

/// Recurrence label. Only used for classification; no occurrences are
/// ever generated from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrencePattern::Daily => write!(f, "daily"),
            RecurrencePattern::Weekly => write!(f, "weekly"),
            RecurrencePattern::Monthly => write!(f, "monthly"),
            RecurrencePattern::Yearly => write!(f, "yearly"),
            RecurrencePattern::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid recurrence pattern: {0}")]
pub struct ParseRecurrencePatternError(String);

impl FromStr for RecurrencePattern {
    type Err = ParseRecurrencePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(RecurrencePattern::Daily),
            "weekly" => Ok(RecurrencePattern::Weekly),
            "monthly" => Ok(RecurrencePattern::Monthly),
            "yearly" => Ok(RecurrencePattern::Yearly),
            _ => Err(ParseRecurrencePatternError(s.to_string())),
        }
    }
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A timestamp as stored on a task record.
///
/// Task data comes from outside the engine and may contain values that do
/// not parse. Those are kept verbatim as `Malformed` so one corrupt record
/// cannot fail deserialization of the whole collection; every date
/// comparison treats a malformed value exactly like an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    Valid(DateTime<Utc>),
    Malformed(String),
}

impl Timestamp {
    /// Parses RFC 3339, naive date-times (read as UTC) and bare dates
    /// (midnight UTC). Never fails.
    pub fn parse(raw: &str) -> Self {
        match Self::parse_instant(raw) {
            Some(instant) => Timestamp::Valid(instant),
            None => {
                tracing::warn!(raw = %raw, "unparseable timestamp, treating as absent");
                Timestamp::Malformed(raw.to_string())
            }
        }
    }

    /// Same formats as [`Timestamp::parse`], without keeping the raw text.
    pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
        let trimmed = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(dt.with_timezone(&Utc));
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    }

    /// The instant on the time axis, or `None` for malformed data.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Valid(dt) => Some(*dt),
            Timestamp::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Timestamp::Malformed(_))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Valid(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Valid(dt) => write!(f, "{}", dt.to_rfc3339()),
            Timestamp::Malformed(raw) => write!(f, "{}", raw),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(raw) => Ok(Timestamp::parse(&raw)),
            other => {
                tracing::warn!(raw = %other, "non-string timestamp, treating as absent");
                Ok(Timestamp::Malformed(other.to_string()))
            }
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub completed: bool,
    /// Absent priority stays absent here; the `medium` default is applied
    /// by whoever creates tasks, never by the query engine.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Insertion order is kept and duplicates are tolerated.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub recurrence_pattern: Option<RecurrencePattern>,
    #[serde(default)]
    pub parent_task_id: Option<i64>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Task {
    pub fn new(id: i64, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            completed: false,
            priority: None,
            tags: Vec::new(),
            due_date: None,
            recurring: false,
            recurrence_pattern: None,
            parent_task_id: None,
            created_at: Timestamp::Valid(created_at),
            updated_at: None,
        }
    }

    pub fn due_instant(&self) -> Option<DateTime<Utc>> {
        self.due_date.as_ref().and_then(Timestamp::instant)
    }

    pub fn created_instant(&self) -> Option<DateTime<Utc>> {
        self.created_at.instant()
    }

    /// Incomplete and due strictly before `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_instant().is_some_and(|due| due < now)
    }

    /// Incomplete with a high or urgent priority.
    pub fn is_high_priority(&self) -> bool {
        !self.completed && self.priority.is_some_and(TaskPriority::is_high)
    }

    /// The recurrence label, only when the task is flagged as recurring.
    pub fn recurrence(&self) -> Option<RecurrencePattern> {
        if self.recurring {
            self.recurrence_pattern
        } else {
            None
        }
    }
}
