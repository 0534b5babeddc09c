//! Test doubles shared across module tests.

use crate::placement::SpriteParams;
use crate::registry::SpriteLayer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LayerOp {
    Create(String),
    Update(String),
    Destroy(String),
}

/// A sprite layer that draws nothing and records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingLayer {
    pub ops: Vec<LayerOp>,
}

impl RecordingLayer {
    /// Sprites created and not yet destroyed.
    pub fn live(&self) -> usize {
        self.ops.iter().fold(0usize, |live, op| match op {
            LayerOp::Create(_) => live + 1,
            LayerOp::Destroy(_) => live.saturating_sub(1),
            LayerOp::Update(_) => live,
        })
    }
}

impl SpriteLayer for RecordingLayer {
    type Handle = String;

    fn create(&mut self, name: &str, _params: &SpriteParams) -> String {
        self.ops.push(LayerOp::Create(name.to_string()));
        name.to_string()
    }

    fn update(&mut self, handle: &mut String, _params: &SpriteParams) {
        self.ops.push(LayerOp::Update(handle.clone()));
    }

    fn destroy(&mut self, handle: String) {
        self.ops.push(LayerOp::Destroy(handle));
    }
}
