//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration is layered: built-in defaults, optional config files, then
//! environment variables with the `PARKING` prefix.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::FeeSchedule;
use crate::ParkingResult;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub schedule: FeeSchedule,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default level for the workspace crates when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// How the session summary is rendered
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// Report configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
}

impl AppConfig {
    /// Load configuration from defaults, optional config files and environment
    ///
    /// The resulting schedule is validated before it is returned.
    pub fn load() -> ParkingResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Self::with_defaults(Config::builder())?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Self::env_source())
            .build()?;

        Self::finish(config)
    }

    /// Load configuration from a specific file, still honoring the environment
    pub fn from_file(path: &str) -> ParkingResult<Self> {
        let config = Self::with_defaults(Config::builder())?
            .add_source(File::with_name(path))
            .add_source(Self::env_source())
            .build()?;

        Self::finish(config)
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ParkingResult<config::ConfigBuilder<config::builder::DefaultState>> {
        // Schedule fields fall back to FeeSchedule::default() through serde
        Ok(builder
            .set_default("logging.level", default_log_level())?
            .set_default("logging.json", false)?
            .set_default("report.format", "table")?)
    }

    /// Environment variables with PARKING prefix, e.g.
    /// `PARKING__SCHEDULE__PROGRESSIVE_TIERS=2,3,0`
    fn env_source() -> Environment {
        Environment::with_prefix("PARKING")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("schedule.progressive_tiers")
            .with_list_parse_key("schedule.progressive_rates")
            .try_parsing(true)
    }

    fn finish(config: Config) -> ParkingResult<Self> {
        let app: AppConfig = config.try_deserialize()?;
        app.schedule.validate()?;
        Ok(app)
    }
}
