pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, HostError, MediaShareError, TransportError};
pub use events::{EventBus, HostEvent, SceneChanges};
pub use id::{new_correlation_id, new_id};
pub use types::{ActiveSceneContext, SceneId, TileDocument, TileId, TileMediaFlags, UserId};

/// Identifier of this module; used as the flag namespace on scene and tile documents.
pub const MODULE_ID: &str = "mediashare";

pub type Result<T> = std::result::Result<T, MediaShareError>;
