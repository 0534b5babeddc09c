use mediashare_common::{new_correlation_id, TransportError, UserId};
use tracing::{debug, info};

use super::transport::PeerTransport;
use crate::placement::MediaType;
use crate::protocol::{PeerMessage, Recipients};

/// Issues fullscreen/popout commands to other participants.
///
/// Fire-and-forget: no acknowledgment, no retries. A command for
/// recipients that are not connected simply reaches nobody.
pub struct BroadcastCoordinator<T> {
    transport: T,
}

impl<T: PeerTransport> BroadcastCoordinator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Open a popout on each of `recipients`.
    pub async fn share_popout(
        &self,
        url: &str,
        recipients: &[UserId],
        loop_: bool,
    ) -> Result<(), TransportError> {
        let message = PeerMessage::SharePopoutMedia {
            url: url.to_string(),
            loop_,
        };
        self.send(Recipients::Users(recipients.to_vec()), message)
            .await
    }

    /// Show fullscreen media on each of `recipients`.
    pub async fn share_fullscreen(
        &self,
        url: &str,
        recipients: &[UserId],
        media_type: MediaType,
        loop_: bool,
    ) -> Result<(), TransportError> {
        let message = PeerMessage::ShareFullscreenMedia {
            url: url.to_string(),
            media_type,
            loop_,
        };
        self.send(Recipients::Users(recipients.to_vec()), message)
            .await
    }

    /// Clear fullscreen media on every participant.
    pub async fn dismiss_fullscreen(&self) -> Result<(), TransportError> {
        self.send(Recipients::Everyone, PeerMessage::DismissFullscreenMedia)
            .await
    }

    async fn send(
        &self,
        recipients: Recipients,
        message: PeerMessage,
    ) -> Result<(), TransportError> {
        if recipients.is_empty() {
            debug!(event = message.event_name(), "No recipients, nothing sent");
            return Ok(());
        }
        let cid = new_correlation_id();
        info!(cid = %cid, event = message.event_name(), ?recipients, "Dispatching media command");
        self.transport.dispatch(&recipients, &message).await?;
        debug!(cid = %cid, "Dispatch confirmed");
        Ok(())
    }
}
