//! Configuration module.
//!
//! Settings resolve through Defaults → config file → environment → CLI.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, resolve_config, validate,
    ConfigError, ConfigFile, ResolvedConfig, CONFIG_PATH_ENV, DEFAULT_REPLY_DELAY_MS,
    REPLY_DELAY_ENV, REPLY_DELAY_RANGE_MS,
};
