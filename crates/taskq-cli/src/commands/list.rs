use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use taskq_core::query::{CompletionFilter, FilterSpec};

use crate::cli::ListCommand;
use crate::config::Config;
use crate::parser::parse_when;
use crate::util::{load_snapshot, resolve_clock};
use crate::views::table::{display_stats, display_tasks};

pub fn list_tasks(command: ListCommand, config: &Config) -> Result<()> {
    let snapshot = load_snapshot(&command.snapshot, config)?;
    let now = resolve_clock(&command.snapshot)?.now();
    let spec = build_filter_spec(&command, config, now)?;

    let outcome = snapshot.query(&spec, now);

    if command.snapshot.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        display_tasks(&outcome.tasks, now);
        display_stats(&outcome.stats);
    }

    Ok(())
}

/// Flags win over configured defaults; empty values leave a dimension inactive.
pub fn build_filter_spec(command: &ListCommand, config: &Config, now: DateTime<Utc>) -> Result<FilterSpec> {
    let due_date_from = command
        .due_from
        .as_deref()
        .map(|raw| parse_when(raw, now))
        .transpose()
        .context("Invalid --due-from value")?;
    let due_date_to = command
        .due_to
        .as_deref()
        .map(|raw| parse_when(raw, now))
        .transpose()
        .context("Invalid --due-to value")?;

    Ok(FilterSpec {
        completed: CompletionFilter::from(command.completed),
        priority: command.priority,
        tags: command.tag.clone(),
        due_date_from,
        due_date_to,
        search_query: command.search.clone().filter(|q| !q.is_empty()),
        sort_by: command.sort_by.unwrap_or(config.default_sort_by),
        sort_order: command.order.unwrap_or(config.default_sort_order),
    })
}
