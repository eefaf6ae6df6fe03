use anyhow::Result;
use owo_colors::OwoColorize;

use crate::cli::DashboardCommand;
use crate::config::Config;
use crate::util::{load_snapshot, resolve_clock};
use crate::views::table::{display_stats, display_tasks};

pub fn show_dashboard(command: DashboardCommand, config: &Config) -> Result<()> {
    let snapshot = load_snapshot(&command.snapshot, config)?;
    let now = resolve_clock(&command.snapshot)?.now();
    let dashboard = snapshot.dashboard(now, &config.dashboard);

    if command.snapshot.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    display_stats(&dashboard.stats);

    let sections = [
        ("Upcoming", &dashboard.upcoming),
        ("Due soon", &dashboard.due_soon),
        ("High priority", &dashboard.high_priority),
        ("Recurring", &dashboard.recurring),
    ];
    for (heading, tasks) in sections {
        println!();
        println!("{}", heading.bold().underline());
        display_tasks(tasks, now);
    }

    Ok(())
}
