//! Relay-level wire protocol. The relay parses the envelope only; the
//! `message` inside a deliver frame is forwarded as opaque JSON.

use serde::{Deserialize, Serialize};

/// Frames a client sends.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// First frame on every connection.
    Hello { user_id: String },
    Deliver {
        recipients: Recipients,
        message: serde_json::Value,
    },
}

/// Who a deliver frame is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipients {
    Users(Vec<String>),
    Everyone,
}

/// Frames the relay sends back.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayResponse<'a> {
    Welcome {
        user_id: &'a str,
    },
    Message {
        from: &'a str,
        message: &'a serde_json::Value,
    },
    Error {
        message: String,
    },
}

impl RelayResponse<'_> {
    pub fn to_json(&self) -> String {
        // Every field is a plain string or an already-valid JSON value.
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"type":"error"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_hello() {
        let frame: ClientFrame =
            serde_json::from_str(r#"{"type":"hello","user_id":"gm"}"#).unwrap();
        assert!(matches!(frame, ClientFrame::Hello { user_id } if user_id == "gm"));
    }

    #[test]
    fn parses_deliver_to_users_and_everyone() {
        let frame: ClientFrame = serde_json::from_value(json!({
            "type": "deliver",
            "recipients": {"users": ["u1", "u2"]},
            "message": {"type": "share_popout_media", "url": "a.png", "loop": false}
        }))
        .unwrap();
        match frame {
            ClientFrame::Deliver { recipients, message } => {
                assert_eq!(recipients, Recipients::Users(vec!["u1".into(), "u2".into()]));
                assert_eq!(message["url"], "a.png");
            }
            other => panic!("unexpected frame {other:?}"),
        }

        let frame: ClientFrame = serde_json::from_value(json!({
            "type": "deliver",
            "recipients": "everyone",
            "message": {"type": "dismiss_fullscreen_media"}
        }))
        .unwrap();
        assert!(matches!(
            frame,
            ClientFrame::Deliver { recipients: Recipients::Everyone, .. }
        ));
    }

    #[test]
    fn message_response_wraps_payload_verbatim() {
        let payload = json!({"type": "dismiss_fullscreen_media"});
        let json = RelayResponse::Message {
            from: "gm",
            message: &payload,
        }
        .to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            json!({"type": "message", "from": "gm", "message": {"type": "dismiss_fullscreen_media"}})
        );
    }
}
