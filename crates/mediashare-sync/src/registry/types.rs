use crate::placement::SpriteParams;

/// The canvas drawing service bounded sprites are rendered with.
///
/// The registry only holds the opaque handles this returns.
pub trait SpriteLayer {
    type Handle;

    /// Instantiate a sprite and add it to the current canvas.
    fn create(&mut self, name: &str, params: &SpriteParams) -> Self::Handle;

    /// Swap resource and parameters of a live sprite in place.
    fn update(&mut self, handle: &mut Self::Handle, params: &SpriteParams);

    /// Remove a sprite from the canvas.
    fn destroy(&mut self, handle: Self::Handle);
}

/// A live sprite: the renderer's handle plus the parameters last applied.
#[derive(Debug)]
pub struct BoundedSprite<H> {
    pub handle: H,
    pub params: SpriteParams,
}

/// What `create_or_update` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteChange {
    Created,
    Updated,
    Unchanged,
}
