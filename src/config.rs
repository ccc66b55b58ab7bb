// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::extract::{ModelClient, PromptExtractor};
use crate::model::PriorityTable;
use crate::storage::LocalStorage;
use crate::timeline::{DEFAULT_END_HOUR, DEFAULT_START_HOUR, TimelineAxis};
use anyhow::{Error, Result};
use chrono::NaiveDate;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

fn default_target_year() -> i32 {
    2025
}
fn default_start_hour() -> u32 {
    DEFAULT_START_HOUR
}
fn default_end_hour() -> u32 {
    DEFAULT_END_HOUR
}
fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Year every extracted date is moved into.
    #[serde(default = "default_target_year")]
    pub target_year: i32,

    #[serde(default = "default_start_hour")]
    pub timeline_start_hour: u32,
    #[serde(default = "default_end_hour")]
    pub timeline_end_hour: u32,

    /// Extra or replacement category ranks, merged over the built-in table.
    #[serde(default)]
    pub priority_overrides: HashMap<String, u32>,
    /// Rank for unknown categories. Defaults to one past the largest rank.
    #[serde(default)]
    pub fallback_rank: Option<u32>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Day the timeline opens on. Defaults to the first day with events.
    #[serde(default)]
    pub default_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_year: default_target_year(),
            timeline_start_hour: DEFAULT_START_HOUR,
            timeline_end_hour: DEFAULT_END_HOUR,
            priority_overrides: HashMap::new(),
            fallback_rank: None,
            log_level: default_log_level(),
            default_date: None,
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        // Reject an unusable hour range up front rather than at first draw.
        config.timeline_axis().map_err(|e| {
            anyhow::anyhow!("Invalid config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(cfg) => Ok(cfg),
            Err(e) if Self::is_missing_config_error(&e) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Whether an error from `load` means the file was simply absent.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    /// Extractor over `client` that moves dates into `target_year`.
    pub fn extractor<C: ModelClient>(&self, client: C) -> PromptExtractor<C> {
        PromptExtractor::new(client, self.target_year)
    }

    /// The built-in table with this configuration's overrides applied.
    pub fn priority_table(&self) -> PriorityTable {
        let table = PriorityTable::standard().with_overrides(&self.priority_overrides);
        match self.fallback_rank {
            Some(rank) => table.with_fallback(rank),
            None => table,
        }
    }

    pub fn timeline_axis(&self) -> Result<TimelineAxis> {
        TimelineAxis::new(self.timeline_start_hour, self.timeline_end_hour)
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
