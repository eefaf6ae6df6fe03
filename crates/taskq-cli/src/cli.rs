use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taskq_core::models::TaskPriority;
use taskq_core::query::{SortKey, SortOrder};

/// Query, sort and summarise task collections
#[derive(Parser, Debug)]
#[command(name = "taskq", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to ./taskq.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List tasks matching a filter, in the requested order
    List(ListCommand),
    /// Show summary counts for the whole collection
    Stats(StatsCommand),
    /// Show the dashboard: stats, upcoming, due soon, high priority and recurring tasks
    Dashboard(DashboardCommand),
}

/// Where the tasks come from and which instant counts as "now"
#[derive(Args, Debug, Clone, Default)]
pub struct SnapshotArgs {
    /// JSON file holding the task collection
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Reference instant for overdue computation (e.g. "2024-02-01", "tomorrow")
    #[arg(long)]
    pub now: Option<String>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Only completed (true) or only pending (false) tasks
    #[arg(long, action = clap::ArgAction::Set)]
    pub completed: Option<bool>,
    /// Exact priority match (low, medium, high, urgent)
    #[arg(short, long)]
    pub priority: Option<TaskPriority>,
    /// Keep tasks carrying at least one of these tags
    #[arg(short, long, num_args = 1..)]
    pub tag: Vec<String>,
    /// Case-insensitive text to look for in title or description
    #[arg(short, long)]
    pub search: Option<String>,
    /// Earliest due date, inclusive
    #[arg(long)]
    pub due_from: Option<String>,
    /// Latest due date, inclusive
    #[arg(long)]
    pub due_to: Option<String>,
    /// Sort key (created_at, due_date, priority, title)
    #[arg(long)]
    pub sort_by: Option<SortKey>,
    /// Sort direction (asc, desc)
    #[arg(long)]
    pub order: Option<SortOrder>,
}

#[derive(Parser, Debug, Clone)]
pub struct StatsCommand {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct DashboardCommand {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::try_parse_from([
            "taskq", "list", "--file", "tasks.json", "--completed", "false", "--priority", "HIGH",
            "--tag", "work", "urgent", "--sort-by", "due_date", "--order", "desc",
        ])
        .unwrap();

        let Commands::List(list) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(list.completed, Some(false));
        assert_eq!(list.priority, Some(TaskPriority::High));
        assert_eq!(list.tag, vec!["work", "urgent"]);
        assert_eq!(list.sort_by, Some(SortKey::DueDate));
        assert_eq!(list.order, Some(SortOrder::Desc));
    }

    #[test]
    fn test_rejects_unknown_priority() {
        assert!(Cli::try_parse_from(["taskq", "list", "--priority", "critical"]).is_err());
    }
}
