//! Scene media synchronization.
//!
//! Bounded sprites are derived from per-scene flags and converge through
//! the host's own replication; fullscreen and popout media are ephemeral
//! peer commands.

pub mod api;
pub mod broadcast;
pub mod client;
pub mod controls;
pub mod flags;
pub mod placement;
pub mod presentation;
pub mod protocol;
pub mod reconciler;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use api::MediaShareApi;
pub use broadcast::{
    BroadcastCoordinator, LocalHub, LocalTransport, PeerTransport, RelayClientConfig,
    RelayTransport,
};
pub use client::MediaShareClient;
pub use controls::SidebarDirectory;
pub use flags::{FlagBackend, FlagChange, MediaFlagStore, MemoryHost};
pub use placement::{MediaPlacement, MediaType, SceneMediaMap, SpriteParams};
pub use presentation::{
    DarknessAware, FullscreenLayer, FullscreenMedia, HeadlessFullscreen, HeadlessPopouts,
    MediaPopout, Presentation,
};
pub use protocol::{PeerMessage, Recipients};
pub use reconciler::Reconciler;
pub use registry::{SpriteChange, SpriteLayer, SpriteRegistry};

/// The display-less presentation used by headless participants.
pub type HeadlessPresentation = Presentation<HeadlessFullscreen, HeadlessPopouts>;
