//! Peer command protocol for fullscreen and popout media.
//!
//! These commands are ephemeral: nothing is persisted, delivery is
//! at-most-once and best effort, and there is no acknowledgment.

use mediashare_common::UserId;
use serde::{Deserialize, Serialize};

use crate::placement::MediaType;

/// Command names on the wire.
pub mod events {
    pub const SHARE_POPOUT_MEDIA: &str = "share_popout_media";
    pub const SHARE_FULLSCREEN_MEDIA: &str = "share_fullscreen_media";
    pub const DISMISS_FULLSCREEN_MEDIA: &str = "dismiss_fullscreen_media";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PeerMessage {
    SharePopoutMedia {
        url: String,
        #[serde(rename = "loop", default)]
        loop_: bool,
    },
    ShareFullscreenMedia {
        url: String,
        #[serde(default)]
        media_type: MediaType,
        #[serde(rename = "loop", default)]
        loop_: bool,
    },
    DismissFullscreenMedia,
}

impl PeerMessage {
    pub fn event_name(&self) -> &'static str {
        match self {
            PeerMessage::SharePopoutMedia { .. } => events::SHARE_POPOUT_MEDIA,
            PeerMessage::ShareFullscreenMedia { .. } => events::SHARE_FULLSCREEN_MEDIA,
            PeerMessage::DismissFullscreenMedia => events::DISMISS_FULLSCREEN_MEDIA,
        }
    }
}

/// Who a command is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipients {
    Users(Vec<UserId>),
    Everyone,
}

impl Recipients {
    pub fn users<I, U>(users: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserId>,
    {
        Recipients::Users(users.into_iter().map(Into::into).collect())
    }

    pub fn includes(&self, user: &UserId) -> bool {
        match self {
            Recipients::Users(users) => users.contains(user),
            Recipients::Everyone => true,
        }
    }

    /// True when the command can reach nobody.
    pub fn is_empty(&self) -> bool {
        matches!(self, Recipients::Users(users) if users.is_empty())
    }
}
