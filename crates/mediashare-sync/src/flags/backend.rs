use mediashare_common::{HostError, SceneId, TileDocument, TileId, TileMediaFlags};
use serde_json::{Map, Value};

/// The host's document persistence, scoped to this module's flag namespace.
///
/// Writes are diffs in the host's patch protocol; see
/// [`TOMBSTONE_PREFIX`](super::TOMBSTONE_PREFIX). Replication of persisted
/// writes to other clients, and the change notifications that follow, are
/// the host's responsibility.
pub trait FlagBackend {
    /// This module's flags on `scene` as last persisted, if the scene exists.
    fn scene_flags(&self, scene: &SceneId) -> Option<Map<String, Value>>;

    /// A single flag on `scene`.
    fn scene_flag(&self, scene: &SceneId, key: &str) -> Option<Value> {
        self.scene_flags(scene)?.remove(key)
    }

    /// Persist a diff of this module's scene flags.
    fn update_scene_flags(
        &mut self,
        scene: &SceneId,
        patch: Map<String, Value>,
    ) -> Result<(), HostError>;

    fn tile(&self, tile: &TileId) -> Option<TileDocument>;

    /// Replace this module's flags on a tile.
    fn update_tile_flags(&mut self, tile: &TileId, flags: TileMediaFlags)
        -> Result<(), HostError>;
}
