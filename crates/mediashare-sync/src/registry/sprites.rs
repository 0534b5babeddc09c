use std::collections::HashMap;

use mediashare_common::SceneId;
use tracing::{debug, info};

use super::types::{BoundedSprite, SpriteChange, SpriteLayer};
use crate::placement::{SceneMediaMap, SpriteParams};

/// Live sprites on the current canvas, keyed by placement name.
///
/// Owns nothing persistent: every entry is derived from the scene's
/// media flags and can be rebuilt from them at any time.
pub struct SpriteRegistry<L: SpriteLayer> {
    layer: L,
    scene: Option<SceneId>,
    sprites: HashMap<String, BoundedSprite<L::Handle>>,
}

impl<L: SpriteLayer> SpriteRegistry<L> {
    pub fn new(layer: L) -> Self {
        Self {
            layer,
            scene: None,
            sprites: HashMap::new(),
        }
    }

    /// Create the sprite for `name`, or update it in place if it exists.
    ///
    /// Identical parameters leave the sprite untouched.
    pub fn create_or_update(&mut self, name: &str, params: SpriteParams) -> SpriteChange {
        if let Some(sprite) = self.sprites.get_mut(name) {
            if sprite.params == params {
                return SpriteChange::Unchanged;
            }
            self.layer.update(&mut sprite.handle, &params);
            sprite.params = params;
            debug!(name, "Bounded sprite updated");
            return SpriteChange::Updated;
        }

        let handle = self.layer.create(name, &params);
        self.sprites
            .insert(name.to_string(), BoundedSprite { handle, params });
        debug!(name, "Bounded sprite created");
        SpriteChange::Created
    }

    /// Remove the sprite for `name`. Returns false if there was none.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.sprites.remove(name) {
            Some(sprite) => {
                self.layer.destroy(sprite.handle);
                debug!(name, "Bounded sprite deleted");
                true
            }
            None => false,
        }
    }

    /// Tear down every sprite and rebuild from `placements` for `scene`.
    pub fn reseed(&mut self, scene: SceneId, placements: &SceneMediaMap) {
        self.teardown();
        for (name, placement) in placements {
            self.create_or_update(name, SpriteParams::from(placement));
        }
        info!(scene = %scene, sprites = self.sprites.len(), "Sprite registry reseeded");
        self.scene = Some(scene);
    }

    /// Destroy every live sprite.
    pub fn teardown(&mut self) {
        for (_, sprite) in self.sprites.drain() {
            self.layer.destroy(sprite.handle);
        }
        self.scene = None;
    }

    pub fn scene(&self) -> Option<&SceneId> {
        self.scene.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<&SpriteParams> {
        self.sprites.get(name).map(|s| &s.params)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sprites.contains_key(name)
    }

    /// Placement names with a live sprite, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sprites.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }
}
