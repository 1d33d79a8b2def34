//! Configuration file loading with precedence handling.

use crate::model::{CANNED_RESPONSES, DEFAULT_GREETING};
use crate::state::DEFAULT_EMOJI_PALETTE;
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "CHATBOX_CONFIG";

/// Environment variable overriding the reply delay in milliseconds.
pub const REPLY_DELAY_ENV: &str = "CHATBOX_REPLY_DELAY_MS";

/// Accepted reply delays in milliseconds.
pub const REPLY_DELAY_RANGE_MS: RangeInclusive<u64> = 1..=10_000;

/// Reply delay used when nothing overrides it.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 500;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but its value is out of bounds.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name as written in the file or environment.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/chatbox/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Delay before the bot replies, in milliseconds.
    #[serde(default)]
    pub reply_delay_ms: Option<u64>,

    /// Bot message the conversation opens with. Empty for none.
    #[serde(default)]
    pub greeting: Option<String>,

    /// Replies the bot picks from.
    #[serde(default)]
    pub responses: Option<Vec<String>>,

    /// Emoji offered by the picker.
    #[serde(default)]
    pub emoji_palette: Option<Vec<String>>,

    /// Show the search bar on startup.
    #[serde(default)]
    pub show_search_bar: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Reply delay in milliseconds.
    pub reply_delay_ms: u64,
    /// Opening bot message.
    pub greeting: String,
    /// Bot reply pool.
    pub responses: Vec<String>,
    /// Emoji picker palette.
    pub emoji_palette: Vec<String>,
    /// Search bar visible on startup.
    pub show_search_bar: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Fixed RNG seed for reproducible replies. CLI only.
    pub seed: Option<u64>,
}

impl ResolvedConfig {
    /// Reply delay as a duration.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            greeting: DEFAULT_GREETING.to_string(),
            responses: CANNED_RESPONSES.iter().map(|s| s.to_string()).collect(),
            emoji_palette: DEFAULT_EMOJI_PALETTE.iter().map(|s| s.to_string()).collect(),
            show_search_bar: false,
            log_file_path: default_log_path(),
            seed: None,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/chatbox/chatbox.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("chatbox").join("chatbox.log"),
        None => PathBuf::from("chatbox.log"),
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/chatbox/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chatbox").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    debug!(path = %path.display(), "Loaded config file");
    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CHATBOX_CONFIG` environment variable
/// 3. Default path `~/.config/chatbox/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `CHATBOX_CONFIG` is set to a non-UTF-8 value.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_PATH_ENV) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        reply_delay_ms: config.reply_delay_ms.unwrap_or(defaults.reply_delay_ms),
        greeting: config.greeting.unwrap_or(defaults.greeting),
        responses: config.responses.unwrap_or(defaults.responses),
        emoji_palette: config.emoji_palette.unwrap_or(defaults.emoji_palette),
        show_search_bar: config.show_search_bar.unwrap_or(defaults.show_search_bar),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        seed: defaults.seed,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CHATBOX_REPLY_DELAY_MS`: Override reply delay
///
/// # Errors
///
/// [`ConfigError::InvalidValue`] if the variable is set but not a number.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(REPLY_DELAY_ENV) {
        config.reply_delay_ms = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            field: REPLY_DELAY_ENV,
            reason: format!("expected milliseconds, got {raw:?}"),
        })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    reply_delay_override: Option<u64>,
    seed_override: Option<u64>,
) -> ResolvedConfig {
    if let Some(delay) = reply_delay_override {
        config.reply_delay_ms = delay;
    }

    if let Some(seed) = seed_override {
        config.seed = Some(seed);
    }

    config
}

/// Check values that parse but cannot be used.
///
/// # Errors
///
/// [`ConfigError::InvalidValue`] for a reply delay outside
/// [`REPLY_DELAY_RANGE_MS`], an empty or blank response list, or a blank
/// emoji.
pub fn validate(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if !REPLY_DELAY_RANGE_MS.contains(&config.reply_delay_ms) {
        return Err(ConfigError::InvalidValue {
            field: "reply_delay_ms",
            reason: format!(
                "{} is outside {}..={}",
                config.reply_delay_ms,
                REPLY_DELAY_RANGE_MS.start(),
                REPLY_DELAY_RANGE_MS.end()
            ),
        });
    }

    if config.responses.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "responses",
            reason: "at least one response is required".to_string(),
        });
    }

    if let Some(i) = config.responses.iter().position(|r| r.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: "responses",
            reason: format!("entry {i} is blank"),
        });
    }

    if let Some(i) = config.emoji_palette.iter().position(|e| e.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: "emoji_palette",
            reason: format!("entry {i} is blank"),
        });
    }

    Ok(config)
}

/// Run the full precedence chain and validate the result.
///
/// # Errors
///
/// Any error from loading, environment parsing or validation.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    reply_delay_override: Option<u64>,
    seed_override: Option<u64>,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let merged = apply_env_overrides(merge_config(file))?;
    validate(apply_cli_overrides(merged, reply_delay_override, seed_override))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
