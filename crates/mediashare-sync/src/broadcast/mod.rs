//! Broadcast Coordinator: ephemeral fullscreen/popout commands over a
//! peer-messaging transport.

mod coordinator;
mod local;
pub mod relay;
mod transport;


pub use coordinator::BroadcastCoordinator;
pub use local::{LocalHub, LocalTransport};
pub use relay::{RelayClientConfig, RelayTransport};
pub use transport::PeerTransport;
