//! Mediashare configuration.
//!
//! TOML-based settings with serde defaults on every section, validation,
//! default-file creation and live reload. Partial configs work out of the box.

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{
    IdentityConfig, LogLevel, LoggingConfig, MediaShareConfig, ModuleSettings, RelayConfig,
};
pub use watcher::ConfigWatcher;

use mediashare_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<MediaShareConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MediaShareConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
