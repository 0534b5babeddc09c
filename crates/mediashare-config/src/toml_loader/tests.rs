//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_mediashare_config.toml"));
    assert!(matches!(
        result,
        Err(mediashare_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[identity]
user_id = "player-2"

[relay]
url = "ws://tabletop.local:9000"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.identity.user_id, "player-2");
    assert_eq!(config.relay.url, "ws://tabletop.local:9000");
    assert_eq!(config.relay.connect_timeout_secs, 15);
    assert!(config.settings.enable_tile_hud_button);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(mediashare_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[relay]
connect_timeout_secs = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.relay.connect_timeout_secs, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mediashare").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.relay.url, "ws://127.0.0.1:8787");
    assert!(!config.settings.disable_context_options);
}

#[test]
fn default_config_path_ends_with_module_dir() {
    let path = default_config_path().unwrap();
    assert!(path.ends_with("mediashare/config.toml"));
}
