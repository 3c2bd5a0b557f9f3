//! Configuration management using the `config` crate for hierarchical
//! discovery and merging.
//!
//! ## Configuration sources (in precedence order, highest to lowest):
//! 1. **CLI flags** - highest precedence (merged in [`merge_config`])
//! 2. **Environment variables** - middle precedence (via `COVTRACK_*` prefix)
//! 3. **Config files** - lowest precedence
//!
//! ## Config file discovery (in merge order, later overrides earlier):
//! 1. `~/.config/covtrack/config.toml` (user config directory)
//! 2. `./covtrack.toml` in the current directory
//! 3. Explicit `--config` path (if provided and it exists)

use crate::MergedConfig;
use crate::api::disease_sh::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::api::Metric;
use crate::cli::args::Args;
use crate::utils::error::TrackerError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure loaded from config files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// General dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_metric")]
    pub metric: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            metric: default_metric(),
        }
    }
}

/// Statistics API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_days")]
    pub history_days: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            history_days: default_days(),
        }
    }
}

/// Panel layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_true")]
    pub map: bool,
    #[serde(default = "default_true")]
    pub graph: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            map: true,
            graph: true,
        }
    }
}

fn default_metric() -> String {
    "cases".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_days() -> usize {
    120
}

fn default_rows() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn discover_config_paths(explicit_path: &PathBuf) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // User config (lowest precedence)
    if let Some(user_config) = get_user_config_path() {
        paths.push(user_config);
    }

    // Current directory config
    let current_dir_config = PathBuf::from("covtrack.toml");
    if current_dir_config.exists() {
        paths.push(current_dir_config);
    }

    // Explicit --config path (highest precedence)
    if explicit_path != &PathBuf::from("covtrack.toml") && explicit_path.exists() {
        paths.push(explicit_path.clone());
    }

    paths
}

fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|config_dir| config_dir.join("covtrack").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load configuration from discovered config files and environment variables.
pub fn load(args: &Args) -> Result<Config> {
    let mut builder = config::Config::builder();

    for config_path in discover_config_paths(&args.config) {
        builder = builder.add_source(config::File::from(config_path));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("COVTRACK")
            .separator("_")
            .try_parsing(true),
    );

    let settings = builder.build().context("Failed to build configuration")?;

    settings
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

/// Merge file/env configuration with CLI flags into the final
/// [`MergedConfig`]. Flags win whenever they were given.
pub fn merge_config(args: &Args, config: Config) -> Result<MergedConfig, TrackerError> {
    let metric: Metric = args
        .metric
        .as_deref()
        .unwrap_or(&config.general.metric)
        .parse()?;

    let days = args.days.unwrap_or(config.api.history_days);
    if days == 0 || days > 3650 {
        return Err(TrackerError::invalid_days(days));
    }

    let country = match args.country.to_ascii_lowercase().as_str() {
        "worldwide" => None,
        _ => Some(args.country.clone()),
    };

    Ok(MergedConfig {
        country,
        metric,
        rows: args.rows.unwrap_or(config.display.rows),
        days,
        format: args.format,
        watch: args.watch.map(Duration::from_secs),
        endpoint: args
            .endpoint
            .clone()
            .unwrap_or(config.api.endpoint),
        timeout: Duration::from_secs(args.timeout.unwrap_or(config.api.timeout_secs)),
        show_map: config.display.map && !args.no_map,
        show_graph: config.display.graph && !args.no_graph,
        verbose: args.verbose,
        quiet: args.quiet,
    })
}
