//! Shape component: drawable 2D shape of an entity.

use ultraviolet::Vec2;

use crate::error::ComponentError;
use crate::graphics::{Color, Primitive, RenderTarget, ShapeKind};

use super::{Component, EntityId};


/// Component that represents a drawable 2D shape.
///
/// Freshly constructed shape has no primitive and renders nothing:
/// call [`create_shape`](Shape::create_shape) to create one.
///
#[derive(Debug, Clone, Default)]
pub struct Shape {
    owner: Option<EntityId>,
    kind: ShapeKind,
    primitive: Option<Primitive>,
}

impl Shape {
    /// Creates shape component without primitive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates shape component with primitive of given kind.
    ///
    /// # Errors
    ///
    /// An error is returned if shape of this kind cannot be created.
    ///
    pub fn with_kind(kind: ShapeKind) -> Result<Self, ComponentError> {
        let mut shape = Self::new();
        shape.create_shape(kind)?;
        Ok(shape)
    }

    /// Creates primitive of given kind with default geometry, replacing the previous one.
    ///
    /// # Errors
    ///
    /// An error is returned if shape of this kind cannot be created.
    /// In that case component is left without any primitive.
    ///
    pub fn create_shape(&mut self, kind: ShapeKind) -> Result<(), ComponentError> {
        match Primitive::new(kind) {
            Ok(primitive) => {
                self.kind = kind;
                self.primitive = Some(primitive);
                Ok(())
            }
            Err(error) => {
                self.kind = ShapeKind::None;
                self.primitive = None;
                Err(error)
            }
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn primitive(&self) -> Option<&Primitive> {
        self.primitive.as_ref()
    }

    pub fn set_position(&mut self, x: f32, y: f32) -> Result<(), ComponentError> {
        self.set_position_vec(Vec2::new(x, y))
    }

    pub fn set_position_vec(&mut self, position: Vec2) -> Result<(), ComponentError> {
        self.primitive_mut("set position")?.set_position(position);
        Ok(())
    }

    pub fn set_fill_color(&mut self, color: Color) -> Result<(), ComponentError> {
        self.primitive_mut("set fill color")?.set_fill_color(color);
        Ok(())
    }

    /// Sets rotation of the shape in degrees.
    pub fn set_rotation(&mut self, angle: f32) -> Result<(), ComponentError> {
        self.primitive_mut("set rotation")?.set_rotation(angle);
        Ok(())
    }

    pub fn set_scale(&mut self, scale: Vec2) -> Result<(), ComponentError> {
        self.primitive_mut("set scale")?.set_scale(scale);
        Ok(())
    }

    fn primitive_mut(&mut self, operation: &'static str) -> Result<&mut Primitive, ComponentError> {
        self.primitive
            .as_mut()
            .ok_or(ComponentError::ShapeNotCreated { operation })
    }
}

impl Component for Shape {
    fn render(&self, target: &mut dyn RenderTarget) -> Result<(), ComponentError> {
        if let Some(primitive) = &self.primitive {
            target.draw(primitive);
        }
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), ComponentError> {
        self.primitive = None;
        self.kind = ShapeKind::None;
        Ok(())
    }

    fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<EntityId>) {
        self.owner = owner
    }
}
