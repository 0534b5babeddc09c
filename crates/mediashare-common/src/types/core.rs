use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Host identifier of a scene document.
    SceneId
);
string_id!(
    /// Host identifier of a tile document.
    TileId
);
string_id!(
    /// Host identifier of a connected participant.
    UserId
);

/// The local client's view of the host's "current scene" state.
///
/// `viewed_scene` is what this client's canvas is drawing; `active_scene` is
/// the scene activated for players. A GM previewing another scene has the
/// two differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSceneContext {
    pub user_id: UserId,
    pub is_gm: bool,
    pub viewed_scene: Option<SceneId>,
    pub active_scene: Option<SceneId>,
}

impl ActiveSceneContext {
    pub fn new(user_id: impl Into<UserId>, is_gm: bool) -> Self {
        Self {
            user_id: user_id.into(),
            is_gm,
            viewed_scene: None,
            active_scene: None,
        }
    }

    /// Builder: set both the viewed and the active scene.
    pub fn on_scene(mut self, scene: impl Into<SceneId>) -> Self {
        let scene = scene.into();
        self.viewed_scene = Some(scene.clone());
        self.active_scene = Some(scene);
        self
    }

    pub fn is_viewing(&self, scene: &SceneId) -> bool {
        self.viewed_scene.as_ref() == Some(scene)
    }

    pub fn is_active(&self, scene: &SceneId) -> bool {
        self.active_scene.as_ref() == Some(scene)
    }
}
