//! Module settings that gate the UI glue.

use serde::{Deserialize, Serialize};

/// Toggles for HUD buttons and directory context menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSettings {
    /// Show the share button on the token HUD (GM only).
    pub enable_token_hud_button: bool,
    /// Show the share button on the tile HUD (GM only).
    pub enable_tile_hud_button: bool,
    /// Hide the share entries in actor/item directory context menus.
    pub disable_context_options: bool,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            enable_token_hud_button: true,
            enable_tile_hud_button: true,
            disable_context_options: false,
        }
    }
}
