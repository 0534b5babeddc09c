//! Client configuration and wire frames for the relay connection.

use mediashare_common::{TransportError, UserId};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::protocol::{PeerMessage, Recipients};

#[derive(Debug, Clone)]
pub struct RelayClientConfig {
    /// `ws://` or `wss://` URL of the relay.
    pub url: String,
    /// Identity announced in the hello frame; routing key on the relay.
    pub user_id: UserId,
    pub connect_timeout_secs: u64,
    pub reconnect_delay_secs: u64,
    pub max_reconnect_delay_secs: u64,
}

impl RelayClientConfig {
    pub fn new(url: impl Into<String>, user_id: impl Into<UserId>) -> Self {
        Self {
            url: url.into(),
            user_id: user_id.into(),
            connect_timeout_secs: 15,
            reconnect_delay_secs: 1,
            max_reconnect_delay_secs: 30,
        }
    }
}

/// Frames this client sends.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ClientFrame<'a> {
    Hello {
        user_id: &'a UserId,
    },
    Deliver {
        recipients: &'a Recipients,
        message: &'a PeerMessage,
    },
}

/// Frames the relay sends.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ServerFrame {
    Welcome {
        user_id: String,
    },
    Message {
        from: String,
        message: serde_json::Value,
    },
    Error {
        message: String,
    },
}

/// Requests from the public handle to the connection task.
#[derive(Debug)]
pub(crate) enum RelayCommand {
    Send {
        frame: String,
        ack: oneshot::Sender<Result<(), TransportError>>,
    },
    Disconnect,
}
