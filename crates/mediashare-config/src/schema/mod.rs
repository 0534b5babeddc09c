//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod relay;
mod settings;
mod system;

pub use relay::*;
pub use settings::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MediaShareConfig {
    pub settings: ModuleSettings,
    pub identity: IdentityConfig,
    pub relay: RelayConfig,
    pub logging: LoggingConfig,
}
