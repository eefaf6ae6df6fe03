use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taskq_core::dashboard::DashboardConfig;
use taskq_core::query::{SortKey, SortOrder};

const DEFAULT_CONFIG_FILE: &str = "taskq.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Task collection used when `--file` is not given
    pub tasks_file: PathBuf,
    pub default_sort_by: SortKey,
    pub default_sort_order: SortOrder,
    /// Log filter used when TASKQ_LOG is unset
    pub log_level: String,
    pub dashboard: DashboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from("tasks.json"),
            default_sort_by: SortKey::default(),
            default_sort_order: SortOrder::default(),
            log_level: "warn".to_string(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Config {
    /// Defaults, then the TOML file, then `TASKQ_*` environment variables.
    /// Nested keys use a double underscore, e.g. `TASKQ_DASHBOARD__UPCOMING_LIMIT`.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }

    fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("TASKQ_").split("__").ignore(&["log"]))
    }
}
