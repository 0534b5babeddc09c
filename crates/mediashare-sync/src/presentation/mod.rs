//! Fullscreen/popout presentation boundary.
//!
//! Rendering lives outside this crate; these traits are the command
//! contract the reconciler and the broadcast receiver drive.

mod headless;
mod types;

pub use headless::{FullscreenMedia, HeadlessFullscreen, HeadlessPopouts, MAX_TRACKED_POPOUTS};
pub use types::{DarknessAware, FullscreenLayer, MediaPopout};

use tracing::debug;

use crate::protocol::PeerMessage;

/// The local client's fullscreen layer and popout presenter.
#[derive(Debug, Default)]
pub struct Presentation<F, P> {
    pub fullscreen: F,
    pub popout: P,
}

impl<F: FullscreenLayer, P: MediaPopout> Presentation<F, P> {
    pub fn new(fullscreen: F, popout: P) -> Self {
        Self { fullscreen, popout }
    }

    /// Forward ambient darkness to both surfaces.
    pub fn update_darkness(&mut self, level: f64) {
        self.fullscreen.update_darkness(level);
        self.popout.update_darkness(level);
    }

    /// Execute a received peer command verbatim.
    pub fn apply(&mut self, message: &PeerMessage) {
        debug!(message = message.event_name(), "Applying peer command");
        match message {
            PeerMessage::SharePopoutMedia { url, loop_ } => self.popout.handle_share(url, *loop_),
            PeerMessage::ShareFullscreenMedia {
                url,
                media_type,
                loop_,
            } => self.fullscreen.handle_share(url, *media_type, *loop_),
            PeerMessage::DismissFullscreenMedia => self.fullscreen.handle_dismiss(),
        }
    }
}
