use clap::Parser;
use owo_colors::{OwoColorize, Style};
use taskq_core::error::CoreError;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

fn main() {
    let cli = cli::Cli::parse();

    let (config, config_error) = match config::Config::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e)),
    };
    init_logging(&config.log_level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "invalid configuration, falling back to defaults");
    }

    let result = match cli.command {
        cli::Commands::List(command) => commands::list::list_tasks(command, &config),
        cli::Commands::Stats(command) => commands::stats::show_stats(command, &config),
        cli::Commands::Dashboard(command) => {
            commands::dashboard::show_dashboard(command, &config)
        }
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

/// TASKQ_LOG takes precedence over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("TASKQ_LOG")
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();
    let core_error = err.chain().find_map(|e| e.downcast_ref::<CoreError>());

    match core_error {
        Some(CoreError::Io(io)) => {
            eprintln!("{} {}: {}", "Error:".style(error_style), err, io);
        }
        Some(json @ CoreError::Json(_)) => {
            eprintln!(
                "{} {}: {}",
                "Error:".style(error_style),
                err,
                json.to_string().yellow()
            );
        }
        Some(document @ CoreError::InvalidTasksDocument(_)) => {
            eprintln!("{} {}: {}", "Error:".style(error_style), err, document);
        }
        None => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
