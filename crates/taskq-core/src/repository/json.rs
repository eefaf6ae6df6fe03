use super::TaskSource;
use crate::error::CoreError;
use crate::models::Task;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Reads tasks from a JSON file holding either a bare array of tasks or an
/// API-style `{ "tasks": [...] }` envelope.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskSource for JsonFileSource {
    fn fetch_tasks(&self) -> Result<Vec<Task>, CoreError> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_tasks_document(&content)
    }
}

pub fn parse_tasks_document(content: &str) -> Result<Vec<Task>, CoreError> {
    let document: Value = serde_json::from_str(content)?;
    let list = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("tasks") {
            Some(tasks @ Value::Array(_)) => tasks,
            Some(other) => return Err(CoreError::InvalidTasksDocument(kind(&other).to_string())),
            None => return Err(CoreError::InvalidTasksDocument("an object without \"tasks\"".to_string())),
        },
        other => return Err(CoreError::InvalidTasksDocument(kind(&other).to_string())),
    };

    let tasks: Vec<Task> = serde_json::from_value(list)?;
    let malformed = tasks
        .iter()
        .filter(|task| {
            task.created_at.is_malformed()
                || task.due_date.as_ref().is_some_and(|due| due.is_malformed())
        })
        .count();
    if malformed > 0 {
        tracing::warn!(malformed, "tasks with unparseable timestamps loaded");
    }
    Ok(tasks)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
