//! Typed host change notifications.
//!
//! The host announces document mutations as events; each kind carries a
//! precisely-typed payload and is routed by a single exhaustive `match`
//! in the reconciler.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{SceneId, TileDocument};

/// The changed fields of one scene update, as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneChanges {
    /// This module's flag namespace from the update diff. Keys prefixed with
    /// `-=` are deletions in the host's patch protocol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<serde_json::Map<String, serde_json::Value>>,
    /// New `environment.darknessLevel`, when the update touched it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub darkness_level: Option<f64>,
}

impl SceneChanges {
    pub fn is_empty(&self) -> bool {
        self.flags.is_none() && self.darkness_level.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostEvent {
    SceneUpdated {
        scene: SceneId,
        changes: SceneChanges,
    },
    TileUpdated {
        tile: TileDocument,
    },
    TileDeleted {
        tile: TileDocument,
    },
    CanvasReady {
        scene: SceneId,
    },
    #[serde(other)]
    Unknown,
}

impl HostEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            HostEvent::SceneUpdated { .. } => "scene_updated",
            HostEvent::TileUpdated { .. } => "tile_updated",
            HostEvent::TileDeleted { .. } => "tile_deleted",
            HostEvent::CanvasReady { .. } => "canvas_ready",
            HostEvent::Unknown => "unknown",
        }
    }
}

/// Fan-out of host events to every connected client's handler.
pub struct EventBus {
    sender: broadcast::Sender<HostEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HostEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: HostEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
