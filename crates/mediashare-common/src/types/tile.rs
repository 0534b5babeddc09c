use serde::{Deserialize, Serialize};

use super::core::{SceneId, TileId};

/// This module's flags on a tile document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileMediaFlags {
    #[serde(default)]
    pub is_bounding: bool,
    /// Placement name in the parent scene's media map.
    #[serde(default)]
    pub name: String,
}

/// Snapshot of a tile document as delivered with a host notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileDocument {
    pub id: TileId,
    /// Parent scene.
    pub scene: SceneId,
    pub texture_src: Option<String>,
    pub flags: Option<TileMediaFlags>,
}

impl TileDocument {
    /// The placement name if this tile is a bounding tile.
    pub fn bounding_name(&self) -> Option<&str> {
        self.flags
            .as_ref()
            .filter(|f| f.is_bounding && !f.name.is_empty())
            .map(|f| f.name.as_str())
    }

    pub fn is_bounding(&self) -> bool {
        self.flags.as_ref().is_some_and(|f| f.is_bounding)
    }
}
