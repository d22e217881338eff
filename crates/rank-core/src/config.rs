//! Configuration for the ranking runner.
//!
//! Settings are read from a single JSON file with a `logging` block and a
//! `selection` block. Every field is optional; accessors supply defaults.
//!
//! # Example config
//!
//! ```json
//! {
//!   "logging": { "module_name": "rank", "log_path": "/tmp/rank", "log_level": "info" },
//!   "selection": { "dataset": "scores.json", "count": 10, "axis": 0, "order": "descend" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RankError;
use crate::order::Order;

/// Top-level application config, deserialized from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging metadata (module name, log directory, level).
    #[serde(default)]
    pub logging: LoggingConfig,

    /// What to rank and how.
    #[serde(default)]
    pub selection: SelectionConfig,
}

/// Logging block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Used as the log file stem.
    pub module_name: Option<String>,
    /// Directory for the log file; console only when absent.
    pub log_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl LoggingConfig {
    /// Returns the module name, defaulting to `"process"`.
    pub fn module_name(&self) -> &str {
        self.module_name.as_deref().unwrap_or("process")
    }

    /// Returns the log level, defaulting to `"info"`.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

/// Selection block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionConfig {
    /// Path to a JSON object mapping keys to arrays of numbers.
    pub dataset: Option<PathBuf>,

    /// Number of keys to return (default: 10).
    #[serde(alias = "n")]
    pub count: Option<usize>,

    /// Record field to rank by (default: 0).
    pub axis: Option<usize>,

    /// `"descend"` for the largest values, `"ascend"` for the smallest.
    pub order: Option<String>,
}

impl SelectionConfig {
    pub fn count(&self) -> usize {
        self.count.unwrap_or(10)
    }

    pub fn axis(&self) -> usize {
        self.axis.unwrap_or(0)
    }

    /// Returns the parsed order, defaulting to descending.
    pub fn order(&self) -> Result<Order, RankError> {
        self.order
            .as_deref()
            .map_or(Ok(Order::Descending), str::parse::<Order>)
    }
}

/// Load and parse a JSON config file.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let json = r#"{
            "logging": { "module_name": "rank", "log_path": "/tmp/rank", "log_level": "debug" },
            "selection": { "dataset": "d.json", "n": 3, "axis": 1, "order": "ascend" }
        }"#;
        let cfg: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.logging.module_name(), "rank");
        assert_eq!(cfg.logging.log_level(), "debug");
        assert_eq!(cfg.logging.log_path.as_deref(), Some(Path::new("/tmp/rank")));
        assert_eq!(cfg.selection.count(), 3);
        assert_eq!(cfg.selection.axis(), 1);
        assert_eq!(cfg.selection.order().unwrap(), Order::Ascending);
    }

    #[test]
    fn defaults() {
        let cfg: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.logging.module_name(), "process");
        assert_eq!(cfg.logging.log_level(), "info");
        assert!(cfg.logging.log_path.is_none());
        assert_eq!(cfg.selection.count(), 10);
        assert_eq!(cfg.selection.axis(), 0);
        assert_eq!(cfg.selection.order().unwrap(), Order::Descending);
    }

    #[test]
    fn bad_order_surfaces_error() {
        let cfg: AppConfig =
            serde_json::from_str(r#"{ "selection": { "order": "zigzag" } }"#).unwrap();
        assert!(matches!(
            cfg.selection.order(),
            Err(RankError::UnsupportedOrder(_))
        ));
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_config(Path::new("/nonexistent/rank-config.json")).is_err());
    }
}
