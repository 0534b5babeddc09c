//! Per-connection handler: identify, register, then route deliver frames.

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{accept_async, WebSocketStream};

use crate::protocol::{ClientFrame, Recipients, RelayResponse};
use crate::session::PeerStore;

const HELLO_TIMEOUT: Duration = Duration::from_secs(10);

/// Frames queued per participant before further frames are dropped.
pub const OUTBOUND_CAPACITY: usize = 256;

type WsSink = SplitSink<WebSocketStream<TcpStream>, Message>;
type WsStream = SplitStream<WebSocketStream<TcpStream>>;

/// Accept connections forever.
pub async fn serve(listener: TcpListener, store: PeerStore) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let store = store.clone();
                tokio::spawn(async move {
                    match accept_async(stream).await {
                        Ok(ws) => handle_connection(ws, addr, store).await,
                        Err(e) => {
                            tracing::warn!(peer = %addr, error = %e, "WS handshake failed");
                        }
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "TCP accept error");
            }
        }
    }
}

/// Handle a single WebSocket connection.
pub async fn handle_connection(
    ws: WebSocketStream<TcpStream>,
    addr: SocketAddr,
    store: PeerStore,
) {
    let (mut sink, mut stream) = ws.split();

    let Some(user_id) = read_hello(&mut stream, addr).await else {
        return;
    };

    let (tx, mut rx) = mpsc::channel::<String>(OUTBOUND_CAPACITY);
    let conn_id = store.register(&user_id, tx).await;
    tracing::info!(peer = %addr, user = %user_id, "Participant registered");

    let welcome = RelayResponse::Welcome { user_id: &user_id }.to_json();
    if sink.send(Message::Text(welcome.into())).await.is_err() {
        store.unregister(&user_id, conn_id).await;
        return;
    }

    loop {
        tokio::select! {
            Some(msg) = rx.recv() => {
                if sink.send(Message::Text(msg.into())).await.is_err() {
                    break;
                }
            }

            frame = stream.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        route_frame(&text, &user_id, &store, &mut sink).await;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::debug!(peer = %addr, error = %e, "WS error");
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    tracing::info!(peer = %addr, user = %user_id, "Participant disconnected");
    store.unregister(&user_id, conn_id).await;
}

/// Forward one client frame to its targets.
async fn route_frame(text: &str, from: &str, store: &PeerStore, sink: &mut WsSink) {
    match serde_json::from_str::<ClientFrame>(text) {
        Ok(ClientFrame::Deliver {
            recipients,
            message,
        }) => {
            deliver(store, from, &recipients, &message).await;
        }
        Ok(ClientFrame::Hello { .. }) => {
            tracing::debug!(user = %from, "Ignoring repeated hello");
        }
        Err(e) => {
            tracing::warn!(user = %from, error = %e, "Invalid frame");
            let response = RelayResponse::Error {
                message: format!("invalid frame: {e}"),
            }
            .to_json();
            let _ = sink.send(Message::Text(response.into())).await;
        }
    }
}

/// Queue `message` for every connected target. Returns how many got it.
///
/// Never waits on a target: a stalled reader, possibly the sender's own
/// connection, just loses the frame.
async fn deliver(
    store: &PeerStore,
    from: &str,
    recipients: &Recipients,
    message: &serde_json::Value,
) -> usize {
    let json = RelayResponse::Message { from, message }.to_json();
    let targets = store.targets(recipients).await;
    let mut delivered = 0;
    for (user, tx) in &targets {
        match tx.try_send(json.clone()) {
            Ok(()) => delivered += 1,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::debug!(user = %user, "Target queue full, dropping frame");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                tracing::debug!(user = %user, "Target channel closed");
            }
        }
    }
    tracing::debug!(from = %from, targets = targets.len(), delivered, "Delivered command");
    delivered
}

/// Read and parse the first frame as a hello.
async fn read_hello(stream: &mut WsStream, addr: SocketAddr) -> Option<String> {
    let frame = tokio::time::timeout(HELLO_TIMEOUT, stream.next()).await;

    match frame {
        Ok(Some(Ok(Message::Text(text)))) => match serde_json::from_str::<ClientFrame>(&text) {
            Ok(ClientFrame::Hello { user_id }) if !user_id.trim().is_empty() => Some(user_id),
            Ok(_) => {
                tracing::warn!(peer = %addr, "First frame was not a valid hello");
                None
            }
            Err(e) => {
                tracing::warn!(peer = %addr, error = %e, "Invalid hello message");
                None
            }
        },
        Ok(Some(Ok(_))) => {
            tracing::warn!(peer = %addr, "Expected text hello, got binary");
            None
        }
        Ok(Some(Err(e))) => {
            tracing::warn!(peer = %addr, error = %e, "WS error during hello");
            None
        }
        Ok(None) => {
            tracing::debug!(peer = %addr, "Connection closed before hello");
            None
        }
        Err(_) => {
            tracing::warn!(peer = %addr, "Hello timeout ({}s)", HELLO_TIMEOUT.as_secs());
            None
        }
    }
}
