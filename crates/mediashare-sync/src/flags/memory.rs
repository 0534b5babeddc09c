//! In-process host document store.
//!
//! Holds scenes and tiles in memory, applies diffs with the host's merge
//! rules and publishes the resulting change notifications on an
//! [`EventBus`], so several local clients observe one canonical state.

use std::collections::{BTreeMap, HashMap};

use mediashare_common::{
    new_id, EventBus, HostError, HostEvent, SceneChanges, SceneId, TileDocument, TileId,
    TileMediaFlags,
};
use serde_json::{Map, Value};
use tokio::sync::broadcast;
use tracing::debug;

use super::backend::FlagBackend;
use super::change::merge_patch;

#[derive(Debug, Default)]
struct MemoryScene {
    flags: Map<String, Value>,
    darkness: f64,
}

pub struct MemoryHost {
    scenes: HashMap<SceneId, MemoryScene>,
    tiles: BTreeMap<TileId, TileDocument>,
    bus: EventBus,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            tiles: BTreeMap::new(),
            bus: EventBus::default(),
        }
    }

    /// Subscribe a client to this host's change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<HostEvent> {
        self.bus.subscribe()
    }

    pub fn add_scene(&mut self, scene: impl Into<SceneId>) -> SceneId {
        let scene = scene.into();
        self.scenes.entry(scene.clone()).or_default();
        scene
    }

    /// Create a plain tile on `scene`.
    pub fn add_tile(
        &mut self,
        scene: &SceneId,
        texture_src: Option<String>,
    ) -> Result<TileId, HostError> {
        if !self.scenes.contains_key(scene) {
            return Err(HostError::SceneNotFound(scene.to_string()));
        }
        let id = TileId::new(new_id());
        self.tiles.insert(
            id.clone(),
            TileDocument {
                id: id.clone(),
                scene: scene.clone(),
                texture_src,
                flags: None,
            },
        );
        Ok(id)
    }

    pub fn delete_tile(&mut self, tile: &TileId) -> Result<TileDocument, HostError> {
        let doc = self
            .tiles
            .remove(tile)
            .ok_or_else(|| HostError::TileNotFound(tile.to_string()))?;
        debug!(tile = %tile, scene = %doc.scene, "Tile deleted");
        self.bus.publish(HostEvent::TileDeleted { tile: doc.clone() });
        Ok(doc)
    }

    pub fn set_darkness(&mut self, scene: &SceneId, level: f64) -> Result<(), HostError> {
        let doc = self
            .scenes
            .get_mut(scene)
            .ok_or_else(|| HostError::SceneNotFound(scene.to_string()))?;
        doc.darkness = level;
        self.bus.publish(HostEvent::SceneUpdated {
            scene: scene.clone(),
            changes: SceneChanges {
                flags: None,
                darkness_level: Some(level),
            },
        });
        Ok(())
    }

    pub fn darkness(&self, scene: &SceneId) -> Option<f64> {
        self.scenes.get(scene).map(|s| s.darkness)
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagBackend for MemoryHost {
    fn scene_flags(&self, scene: &SceneId) -> Option<Map<String, Value>> {
        self.scenes.get(scene).map(|s| s.flags.clone())
    }

    fn scene_flag(&self, scene: &SceneId, key: &str) -> Option<Value> {
        self.scenes.get(scene)?.flags.get(key).cloned()
    }

    fn update_scene_flags(
        &mut self,
        scene: &SceneId,
        patch: Map<String, Value>,
    ) -> Result<(), HostError> {
        let doc = self
            .scenes
            .get_mut(scene)
            .ok_or_else(|| HostError::SceneNotFound(scene.to_string()))?;
        merge_patch(&mut doc.flags, &patch);
        self.bus.publish(HostEvent::SceneUpdated {
            scene: scene.clone(),
            changes: SceneChanges {
                flags: Some(patch),
                darkness_level: None,
            },
        });
        Ok(())
    }

    fn tile(&self, tile: &TileId) -> Option<TileDocument> {
        self.tiles.get(tile).cloned()
    }

    fn update_tile_flags(
        &mut self,
        tile: &TileId,
        flags: TileMediaFlags,
    ) -> Result<(), HostError> {
        let doc = self
            .tiles
            .get_mut(tile)
            .ok_or_else(|| HostError::TileNotFound(tile.to_string()))?;
        doc.flags = Some(flags);
        let snapshot = doc.clone();
        self.bus.publish(HostEvent::TileUpdated { tile: snapshot });
        Ok(())
    }
}
