use mediashare_common::{ActiveSceneContext, HostError, SceneId, TileDocument};
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::Reconciler;
use crate::flags::{FlagBackend, FlagChange, MediaFlagStore};
use crate::placement::SpriteParams;
use crate::presentation::{FullscreenLayer, MediaPopout, Presentation};
use crate::registry::SpriteLayer;

impl<L: SpriteLayer> Reconciler<L> {
    pub(super) fn on_scene_flags<B: FlagBackend>(
        &mut self,
        scene: &SceneId,
        delta: &Map<String, Value>,
        ctx: &ActiveSceneContext,
        store: &MediaFlagStore<B>,
    ) {
        if !ctx.is_viewing(scene) {
            debug!(scene = %scene, "Flag change on another scene, skipped");
            return;
        }

        for change in FlagChange::decode(delta) {
            match change {
                FlagChange::Delete { name } => {
                    self.registry.delete(&name);
                }
                // The diff may be partial: render from the stored record.
                FlagChange::Upsert { name, .. } => self.refresh(scene, &name, store),
            }
        }
    }

    pub(super) fn on_tile_updated<B: FlagBackend>(
        &mut self,
        tile: &TileDocument,
        ctx: &ActiveSceneContext,
        store: &MediaFlagStore<B>,
    ) {
        let Some(name) = tile.bounding_name() else {
            return;
        };
        if !ctx.is_viewing(&tile.scene) {
            return;
        }
        self.refresh(&tile.scene, name, store);
    }

    pub(super) fn on_canvas_ready<B: FlagBackend>(
        &mut self,
        scene: &SceneId,
        ctx: &ActiveSceneContext,
        store: &MediaFlagStore<B>,
    ) {
        if !ctx.is_viewing(scene) {
            debug!(scene = %scene, "Canvas ready for a scene not being viewed, skipped");
            return;
        }
        let placements = store.all(scene);
        self.registry.reseed(scene.clone(), &placements);
    }

    fn refresh<B: FlagBackend>(&mut self, scene: &SceneId, name: &str, store: &MediaFlagStore<B>) {
        match store.get(scene, name) {
            Some(placement) => {
                self.registry
                    .create_or_update(name, SpriteParams::from(&placement));
            }
            None => debug!(scene = %scene, name, "Placement no longer stored, skipped"),
        }
    }
}

/// GM only: a deleted bounding tile takes its placement with it. The
/// resulting flag update reaches every client, including this one.
pub(super) fn on_tile_deleted<B: FlagBackend>(
    tile: &TileDocument,
    ctx: &ActiveSceneContext,
    store: &mut MediaFlagStore<B>,
) -> Result<(), HostError> {
    if !ctx.is_gm {
        return Ok(());
    }
    let Some(name) = tile.bounding_name() else {
        return Ok(());
    };
    if !ctx.is_viewing(&tile.scene) || !store.contains(&tile.scene, name) {
        return Ok(());
    }
    info!(tile = %tile.id, name, "Bounding tile deleted, removing placement");
    store.unset(&tile.scene, name)
}

pub(super) fn on_darkness<F: FullscreenLayer, P: MediaPopout>(
    scene: &SceneId,
    level: f64,
    ctx: &ActiveSceneContext,
    presentation: &mut Presentation<F, P>,
) {
    if ctx.is_active(scene) {
        presentation.update_darkness(level);
    }
}
