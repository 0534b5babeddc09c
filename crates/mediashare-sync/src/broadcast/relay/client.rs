use std::time::Duration;

use async_trait::async_trait;
use mediashare_common::TransportError;
use tokio::sync::{mpsc, oneshot, watch};

use super::connection::connection_loop;
use super::types::{ClientFrame, RelayClientConfig, RelayCommand};
use crate::broadcast::transport::PeerTransport;
use crate::protocol::{PeerMessage, Recipients};

/// Handle on the background relay connection.
pub struct RelayTransport {
    command_tx: mpsc::Sender<RelayCommand>,
    connected: watch::Receiver<bool>,
}

impl RelayTransport {
    /// Start the background connection. Returns the handle and the inbox
    /// of commands addressed to this participant.
    pub fn connect(config: RelayClientConfig) -> (Self, mpsc::Receiver<PeerMessage>) {
        let (inbound_tx, inbound_rx) = mpsc::channel(256);
        let (command_tx, command_rx) = mpsc::channel(64);
        let (connected_tx, connected_rx) = watch::channel(false);

        tokio::spawn(connection_loop(config, connected_tx, inbound_tx, command_rx));

        let transport = Self {
            command_tx,
            connected: connected_rx,
        };
        (transport, inbound_rx)
    }

    pub fn is_connected(&self) -> bool {
        *self.connected.borrow()
    }

    /// Wait until the relay has registered this participant.
    pub async fn wait_connected(&self, timeout: Duration) -> bool {
        let mut connected = self.connected.clone();
        tokio::time::timeout(timeout, connected.wait_for(|c| *c))
            .await
            .is_ok_and(|r| r.is_ok())
    }

    pub async fn disconnect(&self) {
        let _ = self.command_tx.send(RelayCommand::Disconnect).await;
    }
}

#[async_trait]
impl PeerTransport for RelayTransport {
    async fn dispatch(
        &self,
        recipients: &Recipients,
        message: &PeerMessage,
    ) -> Result<(), TransportError> {
        if !self.is_connected() {
            return Err(TransportError::NotConnected);
        }
        let frame = serde_json::to_string(&ClientFrame::Deliver {
            recipients,
            message,
        })?;
        let (ack, ack_rx) = oneshot::channel();
        self.command_tx
            .send(RelayCommand::Send { frame, ack })
            .await
            .map_err(|_| TransportError::NotConnected)?;
        ack_rx.await.map_err(|_| TransportError::NotConnected)?
    }
}
