use anyhow::{Context, Result};
use taskq_core::repository::{Clock, FixedClock, JsonFileSource, SystemClock, TaskSnapshot};

use crate::cli::SnapshotArgs;
use crate::config::Config;
use crate::parser::parse_when;

pub fn load_snapshot(args: &SnapshotArgs, config: &Config) -> Result<TaskSnapshot> {
    let path = args.file.as_ref().unwrap_or(&config.tasks_file);
    let source = JsonFileSource::new(path);
    TaskSnapshot::fetch(&source)
        .with_context(|| format!("Failed to load tasks from '{}'", path.display()))
}

/// The clock supplying "now": pinned by `--now` (parsed relative to the
/// system clock), otherwise the system clock.
pub fn resolve_clock(args: &SnapshotArgs) -> Result<Box<dyn Clock>> {
    match args.now.as_deref() {
        Some(raw) => {
            let pinned = parse_when(raw, SystemClock.now()).context("Invalid --now value")?;
            Ok(Box::new(FixedClock(pinned)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}
