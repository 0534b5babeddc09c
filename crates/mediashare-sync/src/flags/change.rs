//! Decoding of flag diffs into typed changes.
//!
//! The host's patch protocol marks key deletion by prefixing the key with
//! `-=` (`{"-=map": null}` deletes `map`). That convention is decoded here,
//! once, so nothing downstream inspects key prefixes.

use serde_json::{Map, Value};
use tracing::debug;

/// Key prefix that marks a deletion in the host's update diffs.
pub const TOMBSTONE_PREFIX: &str = "-=";

/// One entry of a scene flag diff.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagChange {
    /// The named placement was created or modified. `value` is the diff
    /// payload and may be partial.
    Upsert { name: String, value: Value },
    /// The named placement was removed.
    Delete { name: String },
}

impl FlagChange {
    /// Decode every key of a diff, in key order.
    pub fn decode(delta: &Map<String, Value>) -> Vec<FlagChange> {
        delta
            .iter()
            .filter_map(|(key, value)| match key.strip_prefix(TOMBSTONE_PREFIX) {
                Some("") => {
                    debug!(key = %key, "Ignoring tombstone without a name");
                    None
                }
                Some(name) => Some(FlagChange::Delete {
                    name: name.to_string(),
                }),
                None => Some(FlagChange::Upsert {
                    name: key.clone(),
                    value: value.clone(),
                }),
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        match self {
            FlagChange::Upsert { name, .. } | FlagChange::Delete { name } => name,
        }
    }

    /// The diff key that deletes `name`.
    pub fn tombstone_key(name: &str) -> String {
        format!("{TOMBSTONE_PREFIX}{name}")
    }
}

/// Apply a diff to a stored object the way the host merges updates:
/// nested objects merge recursively, tombstoned keys are removed and
/// everything else is replaced.
pub(crate) fn merge_patch(target: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, value) in patch {
        if let Some(name) = key.strip_prefix(TOMBSTONE_PREFIX) {
            target.remove(name);
            continue;
        }
        if let (Some(Value::Object(existing)), Value::Object(incoming)) =
            (target.get_mut(key), value)
        {
            merge_patch(existing, incoming);
            continue;
        }
        target.insert(key.clone(), value.clone());
    }
}
