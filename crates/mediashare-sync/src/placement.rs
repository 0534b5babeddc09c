//! Media placement records stored in scene flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of shared media.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl MediaType {
    pub fn is_video(self) -> bool {
        self == MediaType::Video
    }
}

// Anything that is not "video" renders as an image.
impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw.eq_ignore_ascii_case("video") {
            MediaType::Video
        } else {
            MediaType::Image
        })
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => f.write_str("image"),
            MediaType::Video => f.write_str("video"),
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            other => Err(format!("unknown media type '{other}'")),
        }
    }
}

/// A bounded-sprite placement, keyed by name in the scene's media map.
///
/// `style` is opaque to this crate; it belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPlacement {
    pub url: String,
    #[serde(default)]
    pub style: serde_json::Value,
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    #[serde(rename = "loop", default)]
    pub loop_: bool,
    #[serde(default)]
    pub mute: bool,
}

impl MediaPlacement {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            style: serde_json::Value::Null,
            media_type: MediaType::Image,
            loop_: false,
            mute: false,
        }
    }

    pub fn video(url: impl Into<String>, loop_: bool, mute: bool) -> Self {
        Self {
            url: url.into(),
            style: serde_json::Value::Null,
            media_type: MediaType::Video,
            loop_,
            mute,
        }
    }

    pub fn with_style(mut self, style: serde_json::Value) -> Self {
        self.style = style;
        self
    }
}

/// Placement name to placement, as persisted on one scene.
pub type SceneMediaMap = BTreeMap<String, MediaPlacement>;

/// Rendering parameters of one bounded sprite, derived from a placement.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteParams {
    pub url: String,
    pub style: serde_json::Value,
    pub is_video: bool,
    pub loop_: bool,
    pub mute: bool,
}

impl From<&MediaPlacement> for SpriteParams {
    fn from(p: &MediaPlacement) -> Self {
        Self {
            url: p.url.clone(),
            style: p.style.clone(),
            is_video: p.media_type.is_video(),
            loop_: p.loop_,
            mute: p.mute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn placement_uses_host_field_names() {
        let p = MediaPlacement::video("clips/storm.webm", true, false);
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["type"], "video");
        assert_eq!(value["loop"], true);
        assert_eq!(value["mute"], false);
    }

    #[test]
    fn placement_fills_missing_fields() {
        let p: MediaPlacement = serde_json::from_value(json!({"url": "maps/a.png"})).unwrap();
        assert_eq!(p, MediaPlacement::image("maps/a.png"));
    }

    #[test]
    fn unknown_media_type_renders_as_image() {
        let p: MediaPlacement =
            serde_json::from_value(json!({"url": "x", "type": "gif"})).unwrap();
        assert_eq!(p.media_type, MediaType::Image);
    }

    #[test]
    fn media_type_parses_from_cli_strings() {
        assert_eq!("VIDEO".parse::<MediaType>().unwrap(), MediaType::Video);
        assert!("audio".parse::<MediaType>().is_err());
        assert_eq!(MediaType::Image.to_string(), "image");
    }

    #[test]
    fn sprite_params_follow_placement() {
        let p = MediaPlacement::video("v.mp4", true, true).with_style(json!({"x": 10}));
        let params = SpriteParams::from(&p);
        assert!(params.is_video);
        assert!(params.loop_);
        assert!(params.mute);
        assert_eq!(params.style["x"], 10);
    }
}
