use super::change::merge_patch;
use super::*;
use crate::placement::{MediaPlacement, MediaType};
use mediashare_common::{HostError, HostEvent, SceneId};
use serde_json::{json, Map, Value};

fn obj(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn store_with_scene() -> (MediaFlagStore<MemoryHost>, SceneId) {
    let mut host = MemoryHost::new();
    let scene = host.add_scene("scene-1");
    (MediaFlagStore::new(host), scene)
}

#[test]
fn decode_splits_upserts_and_tombstones() {
    let delta = obj(json!({
        "-=old": null,
        "map": {"url": "maps/a.png"},
    }));
    let changes = FlagChange::decode(&delta);
    assert_eq!(
        changes,
        vec![
            FlagChange::Delete { name: "old".into() },
            FlagChange::Upsert {
                name: "map".into(),
                value: json!({"url": "maps/a.png"}),
            },
        ]
    );
}

#[test]
fn decode_skips_nameless_tombstone() {
    let delta = obj(json!({"-=": null}));
    assert!(FlagChange::decode(&delta).is_empty());
}

#[test]
fn tombstone_key_round_trips_through_decode() {
    let mut delta = Map::new();
    delta.insert(FlagChange::tombstone_key("handout"), Value::Null);
    let changes = FlagChange::decode(&delta);
    assert_eq!(changes[0].name(), "handout");
    assert!(matches!(changes[0], FlagChange::Delete { .. }));
}

#[test]
fn merge_patch_merges_nested_objects() {
    let mut target = obj(json!({"map": {"url": "a.png", "style": {"x": 1, "y": 2}}}));
    let patch = obj(json!({"map": {"style": {"x": 5}}}));
    merge_patch(&mut target, &patch);
    assert_eq!(
        Value::Object(target),
        json!({"map": {"url": "a.png", "style": {"x": 5, "y": 2}}})
    );
}

#[test]
fn merge_patch_applies_nested_tombstones() {
    let mut target = obj(json!({"map": {"url": "a.png", "mute": true}}));
    let patch = obj(json!({"map": {"-=mute": null}, "-=gone": null}));
    merge_patch(&mut target, &patch);
    assert_eq!(Value::Object(target), json!({"map": {"url": "a.png"}}));
}

#[test]
fn set_then_get() {
    let (mut store, scene) = store_with_scene();
    let placement = MediaPlacement::video("clips/rain.webm", true, true);
    store.set(&scene, "rain", &placement).unwrap();

    assert_eq!(store.get(&scene, "rain"), Some(placement));
    assert!(store.contains(&scene, "rain"));
    assert_eq!(store.get(&scene, "missing"), None);
}

#[test]
fn unset_removes_placement() {
    let (mut store, scene) = store_with_scene();
    store
        .set(&scene, "map", &MediaPlacement::image("a.png"))
        .unwrap();
    store.unset(&scene, "map").unwrap();
    assert!(!store.contains(&scene, "map"));
    assert!(store.all(&scene).is_empty());
}

#[test]
fn all_skips_malformed_records() {
    let (mut store, scene) = store_with_scene();
    store
        .backend_mut()
        .update_scene_flags(&scene, obj(json!({"broken": 42, "ok": {"url": "b.png"}})))
        .unwrap();

    let all = store.all(&scene);
    assert_eq!(all.len(), 1);
    assert_eq!(all["ok"].media_type, MediaType::Image);
}

#[test]
fn writes_to_unknown_scene_fail() {
    let (mut store, _) = store_with_scene();
    let err = store
        .set(&SceneId::from("nope"), "map", &MediaPlacement::image("a.png"))
        .unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn writes_publish_scene_updates() {
    let (mut store, scene) = store_with_scene();
    let mut rx = store.backend().subscribe();

    store
        .set(&scene, "map", &MediaPlacement::image("a.png"))
        .unwrap();
    store.unset(&scene, "map").unwrap();

    match rx.try_recv().unwrap() {
        HostEvent::SceneUpdated { changes, .. } => {
            assert!(changes.flags.unwrap().contains_key("map"));
        }
        other => panic!("unexpected event {other:?}"),
    }
    match rx.try_recv().unwrap() {
        HostEvent::SceneUpdated { changes, .. } => {
            assert!(changes.flags.unwrap().contains_key("-=map"));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn names_that_collide_with_deletion_keys_are_rejected() {
    let (mut store, scene) = store_with_scene();
    store
        .set(&scene, "map", &MediaPlacement::image("a.png"))
        .unwrap();

    let err = store
        .set(&scene, "-=map", &MediaPlacement::image("b.png"))
        .unwrap_err();

    assert!(matches!(err, HostError::InvalidFlag { .. }));
    assert!(store.contains(&scene, "map"));
    assert_eq!(store.all(&scene).len(), 1);
}
