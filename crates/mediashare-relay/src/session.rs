//! Peer store: maps user ids to their connection's outbound channel.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};

use crate::protocol::Recipients;

struct Peer {
    conn_id: u64,
    tx: mpsc::Sender<String>,
}

/// Thread-safe registry of connected participants.
#[derive(Clone, Default)]
pub struct PeerStore {
    peers: Arc<RwLock<HashMap<String, Peer>>>,
    next_conn: Arc<AtomicU64>,
}

impl PeerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `user_id`. A reconnect under the same id replaces the
    /// previous connection. Returns the connection id to unregister with.
    pub async fn register(&self, user_id: &str, tx: mpsc::Sender<String>) -> u64 {
        let conn_id = self.next_conn.fetch_add(1, Ordering::Relaxed);
        let previous = self
            .peers
            .write()
            .await
            .insert(user_id.to_string(), Peer { conn_id, tx });
        if previous.is_some() {
            tracing::info!(user = %user_id, "Replacing previous connection");
        }
        conn_id
    }

    /// Remove `user_id` unless it has since reconnected on another
    /// connection.
    pub async fn unregister(&self, user_id: &str, conn_id: u64) -> bool {
        let mut map = self.peers.write().await;
        if map.get(user_id).is_some_and(|p| p.conn_id == conn_id) {
            map.remove(user_id);
            return true;
        }
        false
    }

    /// Outbound channels of every connected target. Unknown users are
    /// skipped.
    pub async fn targets(&self, recipients: &Recipients) -> Vec<(String, mpsc::Sender<String>)> {
        let map = self.peers.read().await;
        match recipients {
            Recipients::Everyone => map
                .iter()
                .map(|(user, peer)| (user.clone(), peer.tx.clone()))
                .collect(),
            Recipients::Users(users) => users
                .iter()
                .filter_map(|user| map.get(user).map(|peer| (user.clone(), peer.tx.clone())))
                .collect(),
        }
    }

    pub async fn count(&self) -> usize {
        self.peers.read().await.len()
    }
}
