//! Planner settings, read from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::planner::constants::DEFAULT_FREE_PLAN_LIMIT;

/// Store value that selects the in-memory store.
pub const MEMORY_STORE: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Free-tier generations per weekly period.
    pub free_plan_limit: u32,
    /// JSON store file, or `:memory:`.
    pub store_path: PathBuf,
    /// Saved plans listed by `history` when no limit is given.
    pub history_limit: usize,
    /// Tracing filter used when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            free_plan_limit: DEFAULT_FREE_PLAN_LIMIT,
            store_path: PathBuf::from("meal_plans.json"),
            history_limit: 10,
            log_filter: "warn".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Load from `path`, or defaults when no path is given. A path that was
    /// given but cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml(&fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_store_path(mut self, store_path: Option<PathBuf>) -> Self {
        if let Some(path) = store_path {
            self.store_path = path;
        }
        self
    }

    pub fn uses_memory_store(&self) -> bool {
        self.store_path.as_os_str() == MEMORY_STORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = PlannerConfig::from_toml("free_plan_limit = 5\n").unwrap();
        assert_eq!(config.free_plan_limit, 5);
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.store_path, PathBuf::from("meal_plans.json"));
    }

    #[test]
    fn test_bad_toml_errors() {
        assert!(PlannerConfig::from_toml("free_plan_limit = \"many\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        assert!(PlannerConfig::load(Some(Path::new("/nonexistent/planner.toml"))).is_err());
        assert_eq!(PlannerConfig::load(None).unwrap(), PlannerConfig::default());
    }

    #[test]
    fn test_store_override() {
        let config = PlannerConfig::default().with_store_path(Some(PathBuf::from(MEMORY_STORE)));
        assert!(config.uses_memory_store());
    }
}
