use anyhow::Result;

use crate::cli::StatsCommand;
use crate::config::Config;
use crate::util::{load_snapshot, resolve_clock};
use crate::views::table::display_stats;

pub fn show_stats(command: StatsCommand, config: &Config) -> Result<()> {
    let snapshot = load_snapshot(&command.snapshot, config)?;
    let now = resolve_clock(&command.snapshot)?.now();
    let stats = snapshot.stats(now);

    if command.snapshot.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display_stats(&stats);
    }

    Ok(())
}
