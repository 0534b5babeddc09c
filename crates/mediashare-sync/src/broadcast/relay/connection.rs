//! Background connection task with auto-reconnect.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use mediashare_common::TransportError;
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{debug, error, info, warn};

use super::types::{ClientFrame, RelayClientConfig, RelayCommand, ServerFrame};
use crate::protocol::PeerMessage;

/// Why a connected session ended.
enum SessionEnd {
    Dropped,
    Shutdown,
}

pub(crate) async fn connection_loop(
    config: RelayClientConfig,
    connected: watch::Sender<bool>,
    inbound_tx: mpsc::Sender<PeerMessage>,
    mut command_rx: mpsc::Receiver<RelayCommand>,
) {
    let mut reconnect_delay = config.reconnect_delay_secs.max(1);
    let timeout = Duration::from_secs(config.connect_timeout_secs.max(1));

    loop {
        info!(url = %config.url, user = %config.user_id, "Connecting to relay");

        match tokio::time::timeout(timeout, tokio_tungstenite::connect_async(config.url.as_str()))
            .await
        {
            Ok(Ok((ws_stream, _))) => {
                reconnect_delay = config.reconnect_delay_secs.max(1);
                let end = run_session(ws_stream, &config, &connected, &inbound_tx, &mut command_rx)
                    .await;
                let _ = connected.send(false);
                if matches!(end, SessionEnd::Shutdown) {
                    info!("Relay connection closed");
                    return;
                }
            }
            Ok(Err(e)) => error!(error = %e, "Failed to connect to relay"),
            Err(_) => error!(
                "Relay connection timed out after {}s",
                timeout.as_secs()
            ),
        }

        info!(delay = reconnect_delay, "Reconnecting in {} seconds", reconnect_delay);
        if backoff(Duration::from_secs(reconnect_delay), &mut command_rx).await {
            return;
        }
        reconnect_delay = (reconnect_delay * 2).min(config.max_reconnect_delay_secs.max(1));
    }
}

async fn run_session<S>(
    ws_stream: tokio_tungstenite::WebSocketStream<S>,
    config: &RelayClientConfig,
    connected: &watch::Sender<bool>,
    inbound_tx: &mpsc::Sender<PeerMessage>,
    command_rx: &mut mpsc::Receiver<RelayCommand>,
) -> SessionEnd
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    let (mut ws_write, mut ws_read) = ws_stream.split();

    let hello = match serde_json::to_string(&ClientFrame::Hello {
        user_id: &config.user_id,
    }) {
        Ok(json) => json,
        Err(e) => {
            error!(error = %e, "Failed to encode hello");
            return SessionEnd::Shutdown;
        }
    };
    if let Err(e) = ws_write.send(WsMessage::Text(hello.into())).await {
        warn!(error = %e, "Failed to send hello");
        return SessionEnd::Dropped;
    }

    loop {
        tokio::select! {
            frame = ws_read.next() => match frame {
                Some(Ok(WsMessage::Text(text))) => {
                    handle_server_frame(&text, connected, inbound_tx);
                }
                Some(Ok(WsMessage::Ping(data))) => {
                    let _ = ws_write.send(WsMessage::Pong(data)).await;
                }
                Some(Ok(WsMessage::Close(_))) | None => {
                    info!("Relay closed connection");
                    return SessionEnd::Dropped;
                }
                Some(Err(e)) => {
                    warn!(error = %e, "WebSocket error");
                    return SessionEnd::Dropped;
                }
                Some(Ok(_)) => {}
            },
            command = command_rx.recv() => match command {
                Some(RelayCommand::Send { frame, ack }) => {
                    let result = ws_write
                        .send(WsMessage::Text(frame.into()))
                        .await
                        .map_err(|e| TransportError::Send(e.to_string()));
                    let failed = result.is_err();
                    let _ = ack.send(result);
                    if failed {
                        return SessionEnd::Dropped;
                    }
                }
                Some(RelayCommand::Disconnect) | None => {
                    let _ = ws_write.send(WsMessage::Close(None)).await;
                    return SessionEnd::Shutdown;
                }
            },
        }
    }
}

fn handle_server_frame(
    text: &str,
    connected: &watch::Sender<bool>,
    inbound_tx: &mpsc::Sender<PeerMessage>,
) {
    let frame = match serde_json::from_str::<ServerFrame>(text) {
        Ok(frame) => frame,
        Err(_) => {
            debug!(text = %text, "Unrecognized frame from relay");
            return;
        }
    };

    match frame {
        ServerFrame::Welcome { user_id } => {
            info!(user = %user_id, "Registered with relay");
            let _ = connected.send(true);
        }
        ServerFrame::Message { from, message } => {
            match serde_json::from_value::<PeerMessage>(message) {
                Ok(msg) => {
                    debug!(from = %from, event = msg.event_name(), "Command received");
                    if inbound_tx.try_send(msg).is_err() {
                        debug!(from = %from, "Inbox full or closed, dropping command");
                    }
                }
                Err(e) => warn!(from = %from, error = %e, "Ignoring undecodable command"),
            }
        }
        ServerFrame::Error { message } => warn!(message = %message, "Relay error"),
    }
}

/// Sleep for `delay`, rejecting sends meanwhile. Returns true on shutdown.
async fn backoff(delay: Duration, command_rx: &mut mpsc::Receiver<RelayCommand>) -> bool {
    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return false,
            command = command_rx.recv() => match command {
                Some(RelayCommand::Send { ack, .. }) => {
                    let _ = ack.send(Err(TransportError::NotConnected));
                }
                Some(RelayCommand::Disconnect) | None => return true,
            },
        }
    }
}
