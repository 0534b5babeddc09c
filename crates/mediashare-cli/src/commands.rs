//! Subcommand implementations.

use std::path::PathBuf;

use mediashare_common::{MediaShareError, Result, TransportError, UserId};
use mediashare_config::{toml_loader, MediaShareConfig, ReloadManager};
use mediashare_sync::{HeadlessPresentation, MediaShareApi, PeerMessage, RelayTransport};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::cli::{Args, Command};
use crate::session;

pub async fn run(command: Command, config: MediaShareConfig, args: &Args) -> Result<()> {
    if let Command::Config = command {
        println!("{}", mediashare_config::config_to_json(&config));
        return Ok(());
    }

    let ctx = session::context(&config, args);
    let relay = session::relay_config(&config, args, &ctx);
    info!(user = %ctx.user_id, url = %relay.url, "Connecting");

    let (transport, inbox) = RelayTransport::connect(relay);
    if !transport.wait_connected(session::connect_timeout(&config)).await {
        transport.disconnect().await;
        return Err(TransportError::NotConnected.into());
    }

    if let Command::Listen = command {
        let reloads = watch_config(args).await;
        let result = listen(inbox, reloads, config).await;
        transport.disconnect().await;
        return result;
    }

    let api = MediaShareApi::new(transport, ctx);
    let result = match command {
        Command::Popout { url, to, loop_ } => api.share_popout(&url, &users(to), loop_).await,
        Command::Fullscreen {
            url,
            to,
            media_type,
            loop_,
        } => {
            api.share_fullscreen(&url, &users(to), media_type, loop_)
                .await
        }
        Command::Dismiss => api.dismiss_fullscreen().await,
        Command::Listen | Command::Config => Ok(()),
    };
    api.transport().disconnect().await;
    result
}

fn users(ids: Vec<String>) -> Vec<UserId> {
    ids.into_iter().map(UserId::from).collect()
}

/// Live config updates, when there is a config file to watch.
async fn watch_config(args: &Args) -> Option<watch::Receiver<MediaShareConfig>> {
    let path = match &args.config {
        Some(path) => PathBuf::from(path),
        None => toml_loader::default_config_path().ok()?,
    };
    let (_, rx) = ReloadManager::start(path).await;
    Some(rx)
}

/// Render every received command until the relay connection goes away
/// or the process is interrupted.
async fn listen(
    mut inbox: mpsc::Receiver<PeerMessage>,
    mut reloads: Option<watch::Receiver<MediaShareConfig>>,
    mut config: MediaShareConfig,
) -> Result<()> {
    let mut presentation = HeadlessPresentation::default();
    info!("Listening for media commands (Ctrl-C to stop)");

    loop {
        tokio::select! {
            message = inbox.recv() => match message {
                Some(message) => presentation.apply(&message),
                None => return Err(MediaShareError::Other("relay connection closed".into())),
            },
            changed = config_changed(&mut reloads) => {
                if let Some(next) = changed {
                    if next.relay != config.relay || next.identity != config.identity {
                        warn!("Relay or identity settings changed; restart to apply");
                    }
                    config = next;
                    info!(settings = ?config.settings, "Config reloaded");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                return Ok(());
            }
        }
    }
}

async fn config_changed(
    reloads: &mut Option<watch::Receiver<MediaShareConfig>>,
) -> Option<MediaShareConfig> {
    let Some(rx) = reloads else {
        return std::future::pending().await;
    };
    if rx.changed().await.is_err() {
        *reloads = None;
        return None;
    }
    let config = rx.borrow_and_update().clone();
    Some(config)
}
