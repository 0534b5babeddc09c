use async_trait::async_trait;
use mediashare_common::TransportError;

use crate::protocol::{PeerMessage, Recipients};

/// Peer messaging: point-to-point or broadcast delivery of commands to
/// named participants.
///
/// `dispatch` resolves once the transport has taken the command, not when
/// anyone rendered it. Recipients that are not connected are skipped
/// without error; an `Err` means the transport itself is unusable.
#[async_trait]
pub trait PeerTransport: Send + Sync {
    async fn dispatch(
        &self,
        recipients: &Recipients,
        message: &PeerMessage,
    ) -> Result<(), TransportError>;
}
