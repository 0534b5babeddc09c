//! Sprite Reconciler: keeps the local [`SpriteRegistry`] consistent with
//! the scene's media flags by reacting to host change notifications.

mod handlers;


use mediashare_common::{ActiveSceneContext, HostEvent, MediaShareError};
use tracing::debug;

use crate::flags::{FlagBackend, MediaFlagStore};
use crate::presentation::{FullscreenLayer, MediaPopout, Presentation};
use crate::registry::{SpriteLayer, SpriteRegistry};

pub struct Reconciler<L: SpriteLayer> {
    registry: SpriteRegistry<L>,
}

impl<L: SpriteLayer> Reconciler<L> {
    pub fn new(layer: L) -> Self {
        Self {
            registry: SpriteRegistry::new(layer),
        }
    }

    pub fn registry(&self) -> &SpriteRegistry<L> {
        &self.registry
    }

    /// Route one host notification to its handler.
    ///
    /// Only a GM-side flag write can fail; every other path is a pure
    /// local mutation.
    pub fn dispatch<B, F, P>(
        &mut self,
        event: &HostEvent,
        ctx: &ActiveSceneContext,
        store: &mut MediaFlagStore<B>,
        presentation: &mut Presentation<F, P>,
    ) -> Result<(), MediaShareError>
    where
        B: FlagBackend,
        F: FullscreenLayer,
        P: MediaPopout,
    {
        match event {
            HostEvent::SceneUpdated { scene, changes } => {
                if let Some(flags) = &changes.flags {
                    self.on_scene_flags(scene, flags, ctx, store);
                }
                if let Some(level) = changes.darkness_level {
                    handlers::on_darkness(scene, level, ctx, presentation);
                }
            }
            HostEvent::TileUpdated { tile } => self.on_tile_updated(tile, ctx, store),
            HostEvent::TileDeleted { tile } => handlers::on_tile_deleted(tile, ctx, store)?,
            HostEvent::CanvasReady { scene } => self.on_canvas_ready(scene, ctx, store),
            HostEvent::Unknown => debug!("Ignoring unrecognized host event"),
        }
        Ok(())
    }
}
