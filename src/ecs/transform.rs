//! Transform component: position, rotation and scale of an entity.

use ultraviolet::Vec2;

use super::{Component, EntityId};

/// Component that holds position, rotation and scale of an entity.
///
/// Pure data holder: all lifecycle calls are no-ops.
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    owner: Option<EntityId>,
    position: Vec2,
    rotation: f32,
    scale: Vec2,
}

impl Transform {
    /// Creates identity transform: zero position and rotation, unit scale.
    pub fn new() -> Self {
        Self {
            owner: None,
            position: Vec2::zero(),
            rotation: 0.0,
            scale: Vec2::one(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position
    }

    /// Rotation angle in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = angle
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Transform {
    fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<EntityId>) {
        self.owner = owner
    }
}
