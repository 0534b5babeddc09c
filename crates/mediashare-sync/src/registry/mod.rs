//! Bounded Sprite Registry: the live set of rendered sprites on the
//! current canvas.

mod sprites;
mod types;

#[cfg(test)]
mod tests;

pub use sprites::SpriteRegistry;
pub use types::{BoundedSprite, SpriteChange, SpriteLayer};
