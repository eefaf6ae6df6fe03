use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary task fixture
pub struct CliTestHarness {
    temp_dir: TempDir,
    tasks_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with the given JSON written as the task file
    pub fn with_tasks(json: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let tasks_path = temp_dir.path().join("tasks.json");
        std::fs::write(&tasks_path, json).expect("Failed to write task fixture");

        Self {
            temp_dir,
            tasks_path,
        }
    }

    /// Create a harness holding the standard fixture
    pub fn new() -> Self {
        Self::with_tasks(TestFixtures::sample_tasks_json())
    }

    /// Get a Command instance running inside the temp directory, so no stray
    /// taskq.toml is picked up
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskq").expect("Failed to find taskq binary");
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("TASKQ_LOG");
        cmd
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn tasks_path(&self) -> &Path {
        &self.tasks_path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Run a command with `--json` and parse its stdout
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full: Vec<&str> = args.to_vec();
        full.push("--json");
        let output = self.command().args(&full).output().expect("Failed to run taskq");
        assert!(
            output.status.success(),
            "taskq {:?} failed: {}",
            full,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Six tasks covering every optional field being present, absent or broken
    pub fn sample_tasks_json() -> &'static str {
        r#"[
  {"id": 1, "title": "Prepare slides", "priority": "high", "tags": ["work"],
   "due_date": "2024-02-15", "created_at": "2024-01-05T09:00:00Z"},
  {"id": 2, "title": "Renew passport", "completed": true, "priority": "low",
   "due_date": "2024-01-01", "created_at": "2024-01-01T09:00:00Z"},
  {"id": 3, "title": "Buy groceries", "description": "milk, eggs", "priority": "medium",
   "tags": ["personal", "errand"], "created_at": "2024-01-03T09:00:00Z"},
  {"id": 4, "title": "Fix prod outage", "priority": "urgent", "tags": ["work", "urgent"],
   "due_date": "2024-01-20T17:30:00", "created_at": "2024-01-04T09:00:00Z"},
  {"id": 5, "title": "Water plants", "recurring": true, "recurrence_pattern": "weekly",
   "tags": null, "created_at": "2024-01-02T09:00:00Z"},
  {"id": 6, "title": "Corrupt record", "due_date": "31/31/2024", "priority": "critical",
   "created_at": "2024-01-06T09:00:00Z"}
]"#
    }
}

/// Extract task ids from a `{"tasks": [...]}` JSON payload
pub fn task_ids(value: &serde_json::Value, key: &str) -> Vec<i64> {
    value[key]
        .as_array()
        .expect("expected an array of tasks")
        .iter()
        .map(|task| task["id"].as_i64().expect("task without id"))
        .collect()
}
