//! Visibility rules for the sharing controls the host UI offers.
//!
//! Only the gating lives here; building buttons and menus is the host's
//! business.

use mediashare_common::{ActiveSceneContext, TileDocument};
use mediashare_config::ModuleSettings;

/// Host sidebar directories that get "share" context entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarDirectory {
    Actors,
    Items,
}

impl SidebarDirectory {
    pub fn as_str(self) -> &'static str {
        match self {
            SidebarDirectory::Actors => "actors",
            SidebarDirectory::Items => "items",
        }
    }
}

/// The share tool in the scene controls bar.
pub fn scene_controls_visible(ctx: &ActiveSceneContext) -> bool {
    ctx.is_gm
}

pub fn token_hud_button_visible(ctx: &ActiveSceneContext, settings: &ModuleSettings) -> bool {
    ctx.is_gm && settings.enable_token_hud_button
}

/// A tile that is already bounding, or has no texture to share, gets no
/// button.
pub fn tile_hud_button_visible(
    ctx: &ActiveSceneContext,
    settings: &ModuleSettings,
    tile: &TileDocument,
) -> bool {
    ctx.is_gm
        && settings.enable_tile_hud_button
        && !tile.is_bounding()
        && tile.texture_src.as_deref().is_some_and(|src| !src.is_empty())
}

/// Share entries in a directory's context menu. Not GM-gated: the entries
/// themselves only open media for the local user.
pub fn context_entries_enabled(directory: SidebarDirectory, settings: &ModuleSettings) -> bool {
    let enabled = !settings.disable_context_options;
    tracing::trace!(directory = directory.as_str(), enabled, "Context entries check");
    enabled
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediashare_common::{SceneId, TileId, TileMediaFlags};

    fn tile(texture: Option<&str>, bounding: bool) -> TileDocument {
        TileDocument {
            id: TileId::from("t1"),
            scene: SceneId::from("s1"),
            texture_src: texture.map(str::to_string),
            flags: bounding.then(|| TileMediaFlags {
                is_bounding: true,
                name: "A".into(),
            }),
        }
    }

    #[test]
    fn players_see_no_gm_controls() {
        let player = ActiveSceneContext::new("p1", false);
        let settings = ModuleSettings::default();
        assert!(!scene_controls_visible(&player));
        assert!(!token_hud_button_visible(&player, &settings));
        assert!(!tile_hud_button_visible(&player, &settings, &tile(Some("a.png"), false)));
        assert!(context_entries_enabled(SidebarDirectory::Actors, &settings));
    }

    #[test]
    fn gm_sees_defaults() {
        let gm = ActiveSceneContext::new("gm", true);
        let settings = ModuleSettings::default();
        assert!(scene_controls_visible(&gm));
        assert!(token_hud_button_visible(&gm, &settings));
        assert!(tile_hud_button_visible(&gm, &settings, &tile(Some("a.png"), false)));
        assert!(context_entries_enabled(SidebarDirectory::Items, &settings));
    }

    #[test]
    fn settings_hide_buttons() {
        let gm = ActiveSceneContext::new("gm", true);
        let settings = ModuleSettings {
            enable_token_hud_button: false,
            enable_tile_hud_button: false,
            disable_context_options: true,
        };
        assert!(!token_hud_button_visible(&gm, &settings));
        assert!(!tile_hud_button_visible(&gm, &settings, &tile(Some("a.png"), false)));
        assert!(!context_entries_enabled(SidebarDirectory::Actors, &settings));
        assert!(!context_entries_enabled(SidebarDirectory::Items, &settings));
    }

    #[test]
    fn tile_button_needs_plain_textured_tile() {
        let gm = ActiveSceneContext::new("gm", true);
        let settings = ModuleSettings::default();
        assert!(!tile_hud_button_visible(&gm, &settings, &tile(Some("a.png"), true)));
        assert!(!tile_hud_button_visible(&gm, &settings, &tile(None, false)));
        assert!(!tile_hud_button_visible(&gm, &settings, &tile(Some(""), false)));
    }
}
