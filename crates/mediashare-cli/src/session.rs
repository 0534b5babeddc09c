//! Turning the loaded config plus CLI overrides into a relay session.

use std::path::PathBuf;
use std::time::Duration;

use mediashare_common::{new_id, ActiveSceneContext, ConfigError};
use mediashare_config::{toml_loader, validation, MediaShareConfig};
use mediashare_sync::RelayClientConfig;

use crate::cli::Args;

/// Load the config named on the command line, or the default file.
pub fn load(args: &Args) -> Result<MediaShareConfig, ConfigError> {
    match &args.config {
        Some(path) => {
            let config = toml_loader::load_from_path(&PathBuf::from(path))?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => mediashare_config::load_config(),
    }
}

/// Identity for this run. An unset user id gets a random one.
pub fn context(config: &MediaShareConfig, args: &Args) -> ActiveSceneContext {
    let user_id = args
        .user
        .clone()
        .filter(|u| !u.is_empty())
        .or_else(|| Some(config.identity.user_id.clone()).filter(|u| !u.is_empty()))
        .unwrap_or_else(new_id);
    ActiveSceneContext::new(user_id, config.identity.is_gm)
}

pub fn relay_config(
    config: &MediaShareConfig,
    args: &Args,
    ctx: &ActiveSceneContext,
) -> RelayClientConfig {
    let url = args.relay.clone().unwrap_or_else(|| config.relay.url.clone());
    RelayClientConfig {
        connect_timeout_secs: u64::from(config.relay.connect_timeout_secs),
        reconnect_delay_secs: u64::from(config.relay.reconnect_delay_secs),
        max_reconnect_delay_secs: u64::from(config.relay.max_reconnect_delay_secs),
        ..RelayClientConfig::new(url, ctx.user_id.clone())
    }
}

pub fn connect_timeout(config: &MediaShareConfig) -> Duration {
    Duration::from_secs(u64::from(config.relay.connect_timeout_secs))
}
