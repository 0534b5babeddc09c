//! Configuration validation.
//!
//! Collects every violated constraint into a single `ConfigError`.

mod helpers;


use crate::schema::MediaShareConfig;
use helpers::validate_range;
use mediashare_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MediaShareConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_relay(&mut errors, config);
    validate_identity(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_relay(errors: &mut Vec<String>, config: &MediaShareConfig) {
    let relay = &config.relay;
    if !(relay.url.starts_with("ws://") || relay.url.starts_with("wss://")) {
        errors.push(format!("relay.url = {} must use ws:// or wss://", relay.url));
    }
    validate_range(
        errors,
        "relay.connect_timeout_secs",
        relay.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "relay.reconnect_delay_secs",
        relay.reconnect_delay_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "relay.max_reconnect_delay_secs",
        relay.max_reconnect_delay_secs,
        relay.reconnect_delay_secs,
        600,
    );
}

fn validate_identity(errors: &mut Vec<String>, config: &MediaShareConfig) {
    if config.identity.user_id.chars().any(char::is_whitespace) {
        errors.push("identity.user_id must not contain whitespace".into());
    }
}
