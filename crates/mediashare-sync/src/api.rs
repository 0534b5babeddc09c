//! Entry points for the host's UI glue: sharing buttons, tile toggles and
//! directory context entries all end up here.

use mediashare_common::{
    ActiveSceneContext, HostError, Result, TileId, TileMediaFlags, UserId,
};
use tracing::{info, warn};

use crate::broadcast::{BroadcastCoordinator, PeerTransport};
use crate::flags::{FlagBackend, MediaFlagStore};
use crate::placement::{MediaPlacement, MediaType};

pub struct MediaShareApi<T> {
    coordinator: BroadcastCoordinator<T>,
    ctx: ActiveSceneContext,
}

impl<T: PeerTransport> MediaShareApi<T> {
    pub fn new(transport: T, ctx: ActiveSceneContext) -> Self {
        Self {
            coordinator: BroadcastCoordinator::new(transport),
            ctx,
        }
    }

    pub fn transport(&self) -> &T {
        self.coordinator.transport()
    }

    pub fn context(&self) -> &ActiveSceneContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut ActiveSceneContext {
        &mut self.ctx
    }

    pub async fn share_popout(&self, url: &str, recipients: &[UserId], loop_: bool) -> Result<()> {
        self.coordinator.share_popout(url, recipients, loop_).await?;
        Ok(())
    }

    pub async fn share_fullscreen(
        &self,
        url: &str,
        recipients: &[UserId],
        media_type: MediaType,
        loop_: bool,
    ) -> Result<()> {
        self.coordinator
            .share_fullscreen(url, recipients, media_type, loop_)
            .await?;
        Ok(())
    }

    pub async fn dismiss_fullscreen(&self) -> Result<()> {
        self.coordinator.dismiss_fullscreen().await?;
        Ok(())
    }

    /// Turn `tile` into the anchor of placement `name` on its scene.
    ///
    /// Writes the placement first, then flags the tile, so the tile update
    /// finds the record when clients re-resolve it. A name the store
    /// rejects leaves the tile untouched.
    pub fn make_bounding<B: FlagBackend>(
        &self,
        store: &mut MediaFlagStore<B>,
        tile: &TileId,
        name: &str,
        placement: &MediaPlacement,
    ) -> Result<()> {
        if !self.ctx.is_gm {
            warn!(user = %self.ctx.user_id, tile = %tile, "Only a GM can create bounding tiles");
            return Ok(());
        }
        let doc = store
            .backend()
            .tile(tile)
            .ok_or_else(|| HostError::TileNotFound(tile.to_string()))?;

        store.set(&doc.scene, name, placement)?;
        store.backend_mut().update_tile_flags(
            tile,
            TileMediaFlags {
                is_bounding: true,
                name: name.to_string(),
            },
        )?;
        info!(tile = %tile, scene = %doc.scene, name, "Tile is now bounding");
        Ok(())
    }

    /// Detach `tile` from its placement and remove the placement.
    pub fn release_bounding<B: FlagBackend>(
        &self,
        store: &mut MediaFlagStore<B>,
        tile: &TileId,
    ) -> Result<()> {
        if !self.ctx.is_gm {
            warn!(user = %self.ctx.user_id, tile = %tile, "Only a GM can release bounding tiles");
            return Ok(());
        }
        let doc = store
            .backend()
            .tile(tile)
            .ok_or_else(|| HostError::TileNotFound(tile.to_string()))?;
        let Some(name) = doc.bounding_name().map(str::to_string) else {
            return Ok(());
        };

        store.backend_mut().update_tile_flags(tile, TileMediaFlags::default())?;
        if store.contains(&doc.scene, &name) {
            store.unset(&doc.scene, &name)?;
        }
        info!(tile = %tile, scene = %doc.scene, name = %name, "Bounding tile released");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::LocalHub;
    use crate::flags::MemoryHost;
    use crate::protocol::PeerMessage;
    use mediashare_common::{HostEvent, MediaShareError, SceneId};

    fn store() -> (MediaFlagStore<MemoryHost>, SceneId, TileId) {
        let mut host = MemoryHost::new();
        let scene = host.add_scene("s1");
        let tile = host.add_tile(&scene, Some("tiles/frame.png".into())).unwrap();
        (MediaFlagStore::new(host), scene, tile)
    }

    async fn api(is_gm: bool) -> MediaShareApi<crate::broadcast::LocalTransport> {
        let (transport, _rx) = LocalHub::new().join("gm").await;
        MediaShareApi::new(transport, ActiveSceneContext::new("gm", is_gm).on_scene("s1"))
    }

    #[tokio::test]
    async fn make_bounding_writes_placement_then_tile() {
        let (mut store, scene, tile) = store();
        let mut events = store.backend().subscribe();
        let api = api(true).await;

        api.make_bounding(&mut store, &tile, "A", &MediaPlacement::image("u1"))
            .unwrap();

        assert_eq!(store.get(&scene, "A").unwrap().url, "u1");
        assert_eq!(store.backend().tile(&tile).unwrap().bounding_name(), Some("A"));
        assert!(matches!(events.try_recv().unwrap(), HostEvent::SceneUpdated { .. }));
        assert!(matches!(events.try_recv().unwrap(), HostEvent::TileUpdated { .. }));
    }

    #[tokio::test]
    async fn tombstone_like_name_is_rejected_without_side_effects() {
        let (mut store, scene, tile) = store();
        let other = store
            .backend_mut()
            .add_tile(&scene, Some("tiles/other.png".into()))
            .unwrap();
        let api = api(true).await;
        api.make_bounding(&mut store, &tile, "A", &MediaPlacement::image("u1"))
            .unwrap();

        let err = api
            .make_bounding(&mut store, &other, "-=A", &MediaPlacement::image("u2"))
            .unwrap_err();

        assert!(matches!(err, MediaShareError::Host(HostError::InvalidFlag { .. })));
        assert_eq!(store.get(&scene, "A").unwrap().url, "u1");
        assert!(!store.backend().tile(&other).unwrap().is_bounding());
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let (mut store, _, tile) = store();
        let err = api(true)
            .await
            .make_bounding(&mut store, &tile, "", &MediaPlacement::image("u1"))
            .unwrap_err();
        assert!(matches!(err, MediaShareError::Host(HostError::InvalidFlag { .. })));
    }

    #[tokio::test]
    async fn player_cannot_make_bounding() {
        let (mut store, scene, tile) = store();
        let api = api(false).await;

        api.make_bounding(&mut store, &tile, "A", &MediaPlacement::image("u1"))
            .unwrap();

        assert!(!store.contains(&scene, "A"));
        assert!(!store.backend().tile(&tile).unwrap().is_bounding());
    }

    #[tokio::test]
    async fn make_bounding_unknown_tile_fails() {
        let (mut store, _, _) = store();
        let api = api(true).await;

        let err = api
            .make_bounding(&mut store, &TileId::from("nope"), "A", &MediaPlacement::image("u1"))
            .unwrap_err();
        assert!(matches!(err, MediaShareError::Host(HostError::TileNotFound(_))));
    }

    #[tokio::test]
    async fn release_bounding_clears_tile_and_placement() {
        let (mut store, scene, tile) = store();
        let api = api(true).await;
        api.make_bounding(&mut store, &tile, "A", &MediaPlacement::image("u1"))
            .unwrap();

        api.release_bounding(&mut store, &tile).unwrap();

        assert!(!store.contains(&scene, "A"));
        assert!(!store.backend().tile(&tile).unwrap().is_bounding());
    }

    #[tokio::test]
    async fn dismiss_goes_out_through_transport() {
        let hub = LocalHub::new();
        let (transport, mut gm_rx) = hub.join("gm").await;
        let api = MediaShareApi::new(transport, ActiveSceneContext::new("gm", true));

        api.dismiss_fullscreen().await.unwrap();
        assert_eq!(gm_rx.try_recv().unwrap(), PeerMessage::DismissFullscreenMedia);
    }
}
