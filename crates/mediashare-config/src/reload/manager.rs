use crate::schema::MediaShareConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use mediashare_common::ConfigError;
use std::path::PathBuf;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Publishes a fresh [`MediaShareConfig`] every time the file changes.
///
/// Consumers hold a `watch::Receiver` and read `borrow()` at the moment
/// they need a setting, so HUD gating always sees the current values.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config and spawn the watcher task.
    ///
    /// A missing or unreadable file yields defaults; the watcher still
    /// picks the file up once it appears.
    pub async fn start(config_path: PathBuf) -> (MediaShareConfig, watch::Receiver<MediaShareConfig>) {
        let initial = toml_loader::load_from_path(&config_path).unwrap_or_else(|e| {
            warn!("failed to load config: {e}, using defaults");
            MediaShareConfig::default()
        });

        let (config_tx, config_rx) = watch::channel(initial.clone());

        let manager = ReloadManager { config_path };
        tokio::spawn(async move { manager.run_watch_loop(config_tx).await });

        (initial, config_rx)
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<MediaShareConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match self.reload_config() {
                        Ok(config) => {
                            if config_tx.send(config).is_err() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => warn!("config reload failed: {e}"),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    /// Reload and validate; an invalid file keeps the previous config live.
    fn reload_config(&self) -> Result<MediaShareConfig, ConfigError> {
        let config = toml_loader::load_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
