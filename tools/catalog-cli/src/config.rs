//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog_core::CatalogLimits;
use serde::{Deserialize, Serialize};

/// CLI configuration file (`catalog.toml` or `catalog.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the catalog comes from.
    #[serde(default)]
    pub store: StoreConfig,

    /// Per-query settings.
    #[serde(default)]
    pub query: QueryConfig,

    /// Result caps.
    #[serde(default)]
    pub limits: CatalogLimits,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Snapshot file to load.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

/// Query settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Deadline for each query in milliseconds; unset means no deadline.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let config: CliConfig = toml::from_str(
            r#"
[store]
snapshot = "data/catalog.json"

[query]
timeout_ms = 2500

[limits]
search_results = 20

[limits.data_counts]
products = 100

[log]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.store.snapshot, Some(PathBuf::from("data/catalog.json")));
        assert_eq!(config.query.timeout_ms, Some(2500));
        assert_eq!(config.limits.search_results, 20);
        assert_eq!(config.limits.page_size, 1000);
        assert_eq!(config.limits.data_counts.products, 100);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_empty_config() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert!(config.store.snapshot.is_none());
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.limits, CatalogLimits::default());
    }
}
