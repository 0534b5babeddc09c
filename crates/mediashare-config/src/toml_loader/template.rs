//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> String {
    r#"# Mediashare Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[settings]
# enable_token_hud_button = true
# enable_tile_hud_button = true
# disable_context_options = false

[identity]
# user_id = ""
# display_name = "Player"
# is_gm = false

[relay]
# url = "ws://127.0.0.1:8787"
# connect_timeout_secs = 15       # 1-120
# reconnect_delay_secs = 1        # 1-60
# max_reconnect_delay_secs = 30   # >= reconnect_delay_secs, <= 600

[logging]
# level = "INFO"                  # DEBUG, INFO, WARNING, ERROR
"#
    .to_string()
}
