//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use catalog_core::{Catalog, QueryContext};
use catalog_store::{MemoryStore, Table};

use crate::config::CliConfig;
use crate::output::{format_elapsed, Output};

/// Config file names looked up in the working directory and its parents.
const CONFIG_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => match Self::find_config(&cwd) {
                Some(path) => {
                    output.debug(&format!("Using config {}", path.display()));
                    CliConfig::load(&path.to_string_lossy())?
                }
                None => CliConfig::default(),
            },
        };

        Ok(Self { config, output, cwd })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .flat_map(|dir| CONFIG_NAMES.iter().map(move |name| dir.join(name)))
            .find(|path| path.is_file())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the configured snapshot into a catalog.
    pub fn catalog(&self) -> Result<Catalog<MemoryStore>> {
        let snapshot = self
            .config
            .store
            .snapshot
            .as_deref()
            .context("No snapshot configured; pass --snapshot or set [store] snapshot")?;
        let path = self.resolve_path(snapshot);

        let spinner = self.output.spinner(&format!("Loading {}", path.display()));
        let started = std::time::Instant::now();
        let store = MemoryStore::open(&path)
            .with_context(|| format!("Failed to load snapshot: {}", path.display()));
        spinner.finish_and_clear();
        let store = store?;

        self.output.debug(&format!(
            "Loaded {} products in {}",
            store.len(Table::Products),
            format_elapsed(started.elapsed())
        ));

        Ok(Catalog::new(Arc::new(store)).with_limits(self.config.limits.clone()))
    }

    /// Query timeout from config.
    pub fn timeout(&self) -> Option<Duration> {
        self.config.query.timeout_ms.map(Duration::from_millis)
    }

    /// A fresh query context honouring the configured timeout.
    pub fn query(&self) -> QueryContext {
        match self.timeout() {
            Some(timeout) => QueryContext::with_timeout(timeout),
            None => QueryContext::unbounded(),
        }
    }
}
