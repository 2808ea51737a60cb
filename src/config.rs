//! YAML configuration for generation runs.
//!
//! Supports a seed, a pinned clock anchor, auto-fill batch sizes and per-table
//! row counts. Command-line flags override anything set here.

use crate::generator::{FillBatches, TIMESTAMP_FORMAT};
use crate::schema::Table;
use anyhow::Context;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-table settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Row count for this table (overrides the default)
    pub rows: Option<usize>,
    /// Leave this table out of `all`
    pub skip: bool,
}

/// Default settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultConfig {
    /// Row count for tables without their own setting
    pub rows: Option<usize>,
    /// Auto-fill batch size
    pub batch: Option<usize>,
    /// Auto-fill batch size for brands
    pub brand_batch: Option<usize>,
}

/// Complete YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub seed: Option<u64>,
    /// Clock anchor, `YYYY-MM-DD HH:MM:SS`
    pub clock: Option<String>,
    pub auto_fill: Option<bool>,
    pub defaults: DefaultConfig,
    /// Per-table settings, keyed by plural or singular table name
    pub tables: HashMap<String, TableConfig>,
}

impl GenerateConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse and validate YAML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: GenerateConfig = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else the per-user default file if it exists.
    ///
    /// Returns the path of the per-user file when that is what got loaded.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Option<(Self, Option<PathBuf>)>> {
        match path {
            Some(p) => Ok(Some((Self::load(p)?, None))),
            None => match default_path() {
                Some(p) if p.is_file() => Ok(Some((Self::load(&p)?, Some(p)))),
                _ => Ok(None),
            },
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        for name in self.tables.keys() {
            name.parse::<Table>().map_err(|e| anyhow::anyhow!("{}", e))?;
        }
        self.clock()?;
        if self.defaults.batch == Some(0) || self.defaults.brand_batch == Some(0) {
            anyhow::bail!("Auto-fill batch sizes must be greater than 0");
        }
        if self.defaults.rows == Some(0) {
            anyhow::bail!("defaults.rows must be greater than 0");
        }
        for (name, table) in &self.tables {
            if table.rows == Some(0) {
                anyhow::bail!("tables.{}.rows must be greater than 0", name);
            }
        }
        Ok(())
    }

    /// Settings for a table, matching plural or singular keys
    pub fn table_config(&self, table: Table) -> Option<&TableConfig> {
        self.tables
            .iter()
            .find(|(k, _)| k.parse::<Table>().ok() == Some(table))
            .map(|(_, v)| v)
    }

    pub fn should_skip(&self, table: Table) -> bool {
        self.table_config(table).map(|c| c.skip).unwrap_or(false)
    }

    /// Row count for a table (table-specific or default)
    pub fn rows_for(&self, table: Table) -> Option<usize> {
        self.table_config(table)
            .and_then(|c| c.rows)
            .or(self.defaults.rows)
    }

    /// Parsed clock anchor, if one is set
    pub fn clock(&self) -> anyhow::Result<Option<NaiveDateTime>> {
        self.clock
            .as_deref()
            .map(|s| {
                NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).with_context(|| {
                    format!("Invalid clock '{}': expected YYYY-MM-DD HH:MM:SS", s)
                })
            })
            .transpose()
    }

    /// Auto-fill batch sizes, falling back to the built-in defaults
    pub fn batches(&self) -> FillBatches {
        let defaults = FillBatches::default();
        FillBatches {
            default: self.defaults.batch.unwrap_or(defaults.default),
            brands: self.defaults.brand_batch.unwrap_or(defaults.brands),
        }
    }
}

/// Per-user config file location (`<config dir>/shop-datagen/config.yaml`)
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("shop-datagen").join("config.yaml"))
}
