//! One connected participant: its scene context, sprite reconciler and
//! presentation surfaces.

use mediashare_common::{ActiveSceneContext, HostEvent, Result, SceneId};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};

use crate::flags::{FlagBackend, MediaFlagStore};
use crate::presentation::{FullscreenLayer, MediaPopout, Presentation};
use crate::protocol::PeerMessage;
use crate::reconciler::Reconciler;
use crate::registry::{SpriteLayer, SpriteRegistry};

pub struct MediaShareClient<L: SpriteLayer, F, P> {
    ctx: ActiveSceneContext,
    reconciler: Reconciler<L>,
    presentation: Presentation<F, P>,
}

impl<L, F, P> MediaShareClient<L, F, P>
where
    L: SpriteLayer,
    F: FullscreenLayer,
    P: MediaPopout,
{
    pub fn new(ctx: ActiveSceneContext, layer: L, presentation: Presentation<F, P>) -> Self {
        Self {
            ctx,
            reconciler: Reconciler::new(layer),
            presentation,
        }
    }

    /// Handle one host notification. Handlers run to completion in
    /// delivery order.
    pub fn handle_host_event<B: FlagBackend>(
        &mut self,
        event: &HostEvent,
        store: &mut MediaFlagStore<B>,
    ) -> Result<()> {
        debug!(user = %self.ctx.user_id, event = event.kind(), "Host event");
        if let HostEvent::CanvasReady { scene } = event {
            self.ctx.viewed_scene = Some(scene.clone());
        }
        self.reconciler
            .dispatch(event, &self.ctx, store, &mut self.presentation)
    }

    /// Handle every queued notification. Returns how many were handled.
    ///
    /// Missed notifications cannot be replayed, so a lagging receiver
    /// resyncs the whole canvas from the store instead.
    pub fn drain_host_events<B: FlagBackend>(
        &mut self,
        events: &mut broadcast::Receiver<HostEvent>,
        store: &mut MediaFlagStore<B>,
    ) -> Result<usize> {
        let mut handled = 0;
        loop {
            match events.try_recv() {
                Ok(event) => {
                    self.handle_host_event(&event, store)?;
                    handled += 1;
                }
                Err(TryRecvError::Lagged(missed)) => {
                    warn!(user = %self.ctx.user_id, missed, "Host events lagged, resyncing canvas");
                    if let Some(scene) = self.ctx.viewed_scene.clone() {
                        self.switch_scene(scene, store)?;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return Ok(handled),
            }
        }
    }

    /// Draw `scene` on this client's canvas.
    pub fn switch_scene<B: FlagBackend>(
        &mut self,
        scene: SceneId,
        store: &mut MediaFlagStore<B>,
    ) -> Result<()> {
        self.handle_host_event(&HostEvent::CanvasReady { scene }, store)
    }

    pub fn set_active_scene(&mut self, scene: Option<SceneId>) {
        self.ctx.active_scene = scene;
    }

    /// Execute a command received from another participant.
    pub fn handle_peer_message(&mut self, message: &PeerMessage) {
        self.presentation.apply(message);
    }

    pub fn context(&self) -> &ActiveSceneContext {
        &self.ctx
    }

    pub fn registry(&self) -> &SpriteRegistry<L> {
        self.reconciler.registry()
    }

    pub fn presentation(&self) -> &Presentation<F, P> {
        &self.presentation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MediaShareApi;
    use crate::broadcast::LocalHub;
    use crate::flags::MemoryHost;
    use crate::placement::{MediaPlacement, MediaType};
    use crate::presentation::{HeadlessFullscreen, HeadlessPopouts};
    use crate::testing::RecordingLayer;

    type TestClient = MediaShareClient<RecordingLayer, HeadlessFullscreen, HeadlessPopouts>;

    fn client(user: &str, is_gm: bool) -> TestClient {
        MediaShareClient::new(
            ActiveSceneContext::new(user, is_gm),
            RecordingLayer::default(),
            Presentation::default(),
        )
    }

    #[tokio::test]
    async fn bounding_tile_lifecycle_converges_on_every_client() {
        let mut host = MemoryHost::new();
        let scene = host.add_scene("s1");
        let tile = host.add_tile(&scene, Some("frame.png".into())).unwrap();
        let mut store = MediaFlagStore::new(host);

        let mut clients = vec![client("gm", true), client("p1", false), client("p2", false)];
        let mut inboxes: Vec<_> = clients.iter().map(|_| store.backend().subscribe()).collect();
        for c in clients.iter_mut() {
            c.switch_scene(scene.clone(), &mut store).unwrap();
            c.set_active_scene(Some(scene.clone()));
        }

        let (transport, _rx) = LocalHub::new().join("gm").await;
        let api = MediaShareApi::new(transport, clients[0].context().clone());
        api.make_bounding(&mut store, &tile, "A", &MediaPlacement::image("u1"))
            .unwrap();

        for (c, rx) in clients.iter_mut().zip(inboxes.iter_mut()) {
            c.drain_host_events(rx, &mut store).unwrap();
            assert_eq!(c.registry().names(), vec!["A"]);
        }

        store.backend_mut().delete_tile(&tile).unwrap();
        for (c, rx) in clients.iter_mut().zip(inboxes.iter_mut()) {
            c.drain_host_events(rx, &mut store).unwrap();
        }

        assert!(!store.contains(&scene, "A"));
        for c in &clients {
            assert!(c.registry().is_empty(), "{} kept a sprite", c.context().user_id);
            assert_eq!(c.registry().layer().live(), 0);
        }
    }

    #[test]
    fn scene_switch_reseeds_from_new_scene() {
        let mut host = MemoryHost::new();
        let s1 = host.add_scene("s1");
        let s2 = host.add_scene("s2");
        let mut store = MediaFlagStore::new(host);
        store.set(&s1, "A", &MediaPlacement::image("a.png")).unwrap();
        store.set(&s2, "B", &MediaPlacement::image("b.png")).unwrap();

        let mut c = client("p1", false);
        c.switch_scene(s1, &mut store).unwrap();
        assert_eq!(c.registry().names(), vec!["A"]);

        c.switch_scene(s2.clone(), &mut store).unwrap();
        assert_eq!(c.registry().names(), vec!["B"]);
        assert_eq!(c.context().viewed_scene, Some(s2));
    }

    #[test]
    fn darkness_follows_active_scene_not_viewed_scene() {
        let mut host = MemoryHost::new();
        let s1 = host.add_scene("s1");
        let s2 = host.add_scene("s2");
        let mut store = MediaFlagStore::new(host);
        let mut rx = store.backend().subscribe();

        let mut gm = client("gm", true);
        gm.switch_scene(s2.clone(), &mut store).unwrap();
        gm.set_active_scene(Some(s1.clone()));

        store.backend_mut().set_darkness(&s2, 0.3).unwrap();
        store.backend_mut().set_darkness(&s1, 0.7).unwrap();
        gm.drain_host_events(&mut rx, &mut store).unwrap();

        assert_eq!(gm.presentation().fullscreen.darkness(), Some(0.7));
        assert_eq!(gm.presentation().popout.darkness(), Some(0.7));
    }

    #[test]
    fn peer_messages_reach_presentation() {
        let mut c = client("p1", false);
        c.handle_peer_message(&PeerMessage::ShareFullscreenMedia {
            url: "x.png".into(),
            media_type: MediaType::Image,
            loop_: false,
        });
        assert_eq!(c.presentation().fullscreen.current().unwrap().url, "x.png");

        c.handle_peer_message(&PeerMessage::DismissFullscreenMedia);
        assert!(c.presentation().fullscreen.current().is_none());
    }
}
