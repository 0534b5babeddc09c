use super::*;
use crate::placement::{MediaPlacement, SceneMediaMap, SpriteParams};
use crate::testing::{LayerOp, RecordingLayer};
use mediashare_common::SceneId;

fn params(url: &str) -> SpriteParams {
    SpriteParams::from(&MediaPlacement::image(url))
}

#[test]
fn create_then_identical_update_is_idempotent() {
    let mut registry = SpriteRegistry::new(RecordingLayer::default());

    assert_eq!(
        registry.create_or_update("map", params("a.png")),
        SpriteChange::Created
    );
    assert_eq!(
        registry.create_or_update("map", params("a.png")),
        SpriteChange::Unchanged
    );

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("map").unwrap().url, "a.png");
    assert_eq!(registry.layer().ops, vec![LayerOp::Create("map".into())]);
}

#[test]
fn changed_params_update_in_place() {
    let mut registry = SpriteRegistry::new(RecordingLayer::default());
    registry.create_or_update("map", params("a.png"));

    assert_eq!(
        registry.create_or_update("map", params("b.png")),
        SpriteChange::Updated
    );
    assert_eq!(registry.get("map").unwrap().url, "b.png");
    assert_eq!(
        registry.layer().ops,
        vec![LayerOp::Create("map".into()), LayerOp::Update("map".into())]
    );
    assert_eq!(registry.layer().live(), 1);
}

#[test]
fn delete_is_noop_when_absent() {
    let mut registry = SpriteRegistry::new(RecordingLayer::default());
    assert!(!registry.delete("ghost"));
    assert!(registry.layer().ops.is_empty());
}

#[test]
fn delete_twice_destroys_once() {
    let mut registry = SpriteRegistry::new(RecordingLayer::default());
    registry.create_or_update("map", params("a.png"));

    assert!(registry.delete("map"));
    assert!(!registry.delete("map"));
    assert_eq!(registry.layer().live(), 0);
    assert!(registry.is_empty());
}

#[test]
fn reseed_replaces_previous_scene() {
    let mut registry = SpriteRegistry::new(RecordingLayer::default());
    registry.create_or_update("stale", params("old.png"));

    let mut map = SceneMediaMap::new();
    map.insert("A".into(), MediaPlacement::image("u1"));
    map.insert("B".into(), MediaPlacement::video("u2", true, false));
    registry.reseed(SceneId::from("s2"), &map);

    assert_eq!(registry.names(), vec!["A", "B"]);
    assert_eq!(registry.scene(), Some(&SceneId::from("s2")));
    assert!(registry.get("B").unwrap().is_video);
    assert_eq!(registry.layer().live(), 2);
}

#[test]
fn teardown_destroys_everything() {
    let mut registry = SpriteRegistry::new(RecordingLayer::default());
    registry.create_or_update("a", params("a.png"));
    registry.create_or_update("b", params("b.png"));

    registry.teardown();
    assert!(registry.is_empty());
    assert_eq!(registry.layer().live(), 0);
    assert_eq!(registry.scene(), None);
}
