//! In-process transport: every participant is an mpsc inbox on a shared hub.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mediashare_common::{TransportError, UserId};
use tokio::sync::{mpsc, RwLock};
use tracing::debug;

use super::transport::PeerTransport;
use crate::protocol::{PeerMessage, Recipients};

/// Commands a participant may have queued before new ones are dropped.
pub const INBOX_CAPACITY: usize = 64;

/// Registry of connected participants' inboxes.
#[derive(Clone, Default)]
pub struct LocalHub {
    peers: Arc<RwLock<HashMap<UserId, mpsc::Sender<PeerMessage>>>>,
}

impl LocalHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect `user`. A second join under the same id replaces the first.
    pub async fn join(
        &self,
        user: impl Into<UserId>,
    ) -> (LocalTransport, mpsc::Receiver<PeerMessage>) {
        let user = user.into();
        let (tx, rx) = mpsc::channel(INBOX_CAPACITY);
        self.peers.write().await.insert(user.clone(), tx);
        debug!(user = %user, "Joined local hub");
        let transport = LocalTransport {
            user,
            hub: self.clone(),
        };
        (transport, rx)
    }

    pub async fn leave(&self, user: &UserId) {
        self.peers.write().await.remove(user);
    }

    pub async fn connected(&self) -> Vec<UserId> {
        let mut users: Vec<UserId> = self.peers.read().await.keys().cloned().collect();
        users.sort();
        users
    }
}

/// One participant's handle on a [`LocalHub`].
#[derive(Clone)]
pub struct LocalTransport {
    user: UserId,
    hub: LocalHub,
}

impl LocalTransport {
    pub fn user(&self) -> &UserId {
        &self.user
    }
}

#[async_trait]
impl PeerTransport for LocalTransport {
    async fn dispatch(
        &self,
        recipients: &Recipients,
        message: &PeerMessage,
    ) -> Result<(), TransportError> {
        let targets: Vec<(UserId, mpsc::Sender<PeerMessage>)> = self
            .hub
            .peers
            .read()
            .await
            .iter()
            .filter(|(user, _)| recipients.includes(user))
            .map(|(user, tx)| (user.clone(), tx.clone()))
            .collect();

        // At-most-once: a full or closed inbox loses the command.
        let mut delivered = 0usize;
        for (user, tx) in targets {
            match tx.try_send(message.clone()) {
                Ok(()) => delivered += 1,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    debug!(user = %user, "Inbox full, dropping command");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    debug!(user = %user, "Inbox closed, dropping command");
                }
            }
        }
        debug!(
            from = %self.user,
            event = message.event_name(),
            delivered,
            "Local dispatch"
        );
        Ok(())
    }
}
