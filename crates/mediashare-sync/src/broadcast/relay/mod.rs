//! WebSocket client for the mediashare relay.
//!
//! The relay routes each command to the named participants (or to every
//! connected participant) and never inspects payloads. The connection runs
//! in a background task with exponential-backoff reconnect.

mod client;
mod connection;
mod types;

pub use client::RelayTransport;
pub use types::RelayClientConfig;
