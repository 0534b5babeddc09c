//! Peer transport configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the WebSocket relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub url: String,
    /// Timeout for a single connection attempt (1-120).
    pub connect_timeout_secs: u32,
    /// Base reconnect delay in seconds.
    pub reconnect_delay_secs: u32,
    /// Cap for the exponential reconnect backoff.
    pub max_reconnect_delay_secs: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:8787".into(),
            connect_timeout_secs: 15,
            reconnect_delay_secs: 1,
            max_reconnect_delay_secs: 30,
        }
    }
}
