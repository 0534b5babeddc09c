use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failures reported by the host's document store.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("scene not found: {0}")]
    SceneNotFound(String),

    #[error("tile not found: {0}")]
    TileNotFound(String),

    #[error("invalid flag '{key}': {reason}")]
    InvalidFlag { key: String, reason: String },
}

/// Failures of the peer-messaging transport itself (not of delivery).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("transport not connected")]
    NotConnected,

    #[error("send failed: {0}")]
    Send(String),

    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum MediaShareError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
