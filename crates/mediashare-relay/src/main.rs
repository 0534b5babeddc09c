//! mediashare-relay: WebSocket relay carrying media commands between
//! participants.
//!
//! Clients identify with a hello, then ask the relay to deliver commands
//! to named users or to everyone. Command payloads are forwarded
//! untouched; the relay never interprets them.

mod connection;
mod protocol;
mod session;

use clap::Parser;
use tokio::net::TcpListener;

use crate::connection::serve;
use crate::session::PeerStore;

#[derive(Parser)]
#[command(name = "mediashare-relay", version, about = "WebSocket relay for media sharing commands")]
struct Args {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 8787)]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let directive = args
        .log_level
        .as_deref()
        .map(|level| format!("mediashare_relay={level}"))
        .unwrap_or_else(|| "mediashare_relay=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| directive.into()),
        )
        .init();

    let addr = format!("{}:{}", args.host, args.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind TCP listener");
            std::process::exit(1);
        }
    };

    tracing::info!("mediashare-relay listening on {}", addr);
    serve(listener, PeerStore::new()).await;
}
