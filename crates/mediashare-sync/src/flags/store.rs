use mediashare_common::{HostError, SceneId};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::backend::FlagBackend;
use super::change::{FlagChange, TOMBSTONE_PREFIX};
use crate::placement::{MediaPlacement, SceneMediaMap};

/// Typed access to the per-scene media map.
///
/// No caching: every read goes to the backend, so it reflects the last
/// persisted state. Callers only write from GM contexts.
pub struct MediaFlagStore<B> {
    backend: B,
}

impl<B: FlagBackend> MediaFlagStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The placement `name` on `scene`. Records that fail to decode are
    /// reported and treated as absent.
    pub fn get(&self, scene: &SceneId, name: &str) -> Option<MediaPlacement> {
        let value = self.backend.scene_flag(scene, name)?;
        decode_placement(name, value)
    }

    pub fn contains(&self, scene: &SceneId, name: &str) -> bool {
        self.get(scene, name).is_some()
    }

    /// Every decodable placement on `scene`.
    pub fn all(&self, scene: &SceneId) -> SceneMediaMap {
        self.backend
            .scene_flags(scene)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(name, value)| {
                let placement = decode_placement(&name, value)?;
                Some((name, placement))
            })
            .collect()
    }

    pub fn set(
        &mut self,
        scene: &SceneId,
        name: &str,
        placement: &MediaPlacement,
    ) -> Result<(), HostError> {
        validate_name(name)?;
        let value = serde_json::to_value(placement).map_err(|e| HostError::InvalidFlag {
            key: name.to_string(),
            reason: e.to_string(),
        })?;
        let mut patch = Map::new();
        patch.insert(name.to_string(), value);
        debug!(scene = %scene, name, "Setting media flag");
        self.backend.update_scene_flags(scene, patch)
    }

    pub fn unset(&mut self, scene: &SceneId, name: &str) -> Result<(), HostError> {
        let mut patch = Map::new();
        patch.insert(FlagChange::tombstone_key(name), Value::Null);
        debug!(scene = %scene, name, "Unsetting media flag");
        self.backend.update_scene_flags(scene, patch)
    }
}

/// A placement name must survive the host's patch protocol as a plain key.
fn validate_name(name: &str) -> Result<(), HostError> {
    let reason = if name.is_empty() {
        "placement name must not be empty"
    } else if name.starts_with(TOMBSTONE_PREFIX) {
        "placement name must not start with the deletion prefix"
    } else {
        return Ok(());
    };
    Err(HostError::InvalidFlag {
        key: name.to_string(),
        reason: reason.into(),
    })
}

fn decode_placement(name: &str, value: Value) -> Option<MediaPlacement> {
    match serde_json::from_value(value) {
        Ok(placement) => Some(placement),
        Err(e) => {
            warn!(name, error = %e, "Ignoring malformed media flag");
            None
        }
    }
}
