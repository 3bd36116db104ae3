//! Drawable primitives which can be passed to the [`RenderTarget`](super::RenderTarget).

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use ultraviolet::Vec2;

use crate::error::ComponentError;

use super::{color, Color};

/// Radius of the circle created by default.
pub const DEFAULT_CIRCLE_RADIUS: f32 = 10.0;

/// Amount of boundary points used to approximate a circle.
pub const CIRCLE_POINT_COUNT: usize = 30;

/// Width and height of the rectangle created by default.
pub const DEFAULT_RECTANGLE_SIZE: (f32, f32) = (100.0, 50.0);

/// Outline of the triangle created by default.
pub const DEFAULT_TRIANGLE_POINTS: [(f32, f32); 3] = [(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)];

/// Outline of the polygon created by default.
pub const DEFAULT_POLYGON_POINTS: [(f32, f32); 5] = [
    (0.0, 0.0),
    (50.0, 100.0),
    (100.0, 0.0),
    (75.0, -50.0),
    (-25.0, -50.0),
];

/// Closed set of shape kinds supported by the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    /// No shape selected or created.
    None = 0,
    Circle = 1,
    Rectangle = 2,
    Triangle = 3,
    Polygon = 4,
}

impl ShapeKind {
    /// Name of the kind as used in configuration and messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
            Self::Polygon => "polygon",
        }
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for ShapeKind {
    type Error = ComponentError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Circle),
            2 => Ok(Self::Rectangle),
            3 => Ok(Self::Triangle),
            4 => Ok(Self::Polygon),
            code => Err(ComponentError::UnknownShapeKind(format!("code {}", code))),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ComponentError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let kind = match name.trim().to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "circle" => Self::Circle,
            "rectangle" => Self::Rectangle,
            "triangle" => Self::Triangle,
            "polygon" => Self::Polygon,
            _ => return Err(ComponentError::UnknownShapeKind(name.to_string())),
        };
        Ok(kind)
    }
}

/// Local geometry of the primitive, before any transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Circle { radius: f32 },
    Rectangle { size: Vec2 },
    Convex { points: Vec<Vec2> },
}

/// Backend-independent drawable shape.
///
/// Kind of the primitive never changes after creation:
/// create a new one to get another kind of shape.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    kind: ShapeKind,
    geometry: Geometry,
    position: Vec2,
    rotation: f32,
    scale: Vec2,
    fill_color: Color,
}

impl Primitive {
    /// Creates primitive of given kind with default geometry and white fill color.
    ///
    /// # Errors
    ///
    /// An error is returned if there is no geometry for the kind,
    /// which is the case for [`ShapeKind::None`].
    ///
    pub fn new(kind: ShapeKind) -> Result<Self, ComponentError> {
        let geometry = match kind {
            ShapeKind::Circle => Geometry::Circle {
                radius: DEFAULT_CIRCLE_RADIUS,
            },
            ShapeKind::Rectangle => {
                let (width, height) = DEFAULT_RECTANGLE_SIZE;
                Geometry::Rectangle {
                    size: Vec2::new(width, height),
                }
            }
            ShapeKind::Triangle => Geometry::Convex {
                points: to_points(&DEFAULT_TRIANGLE_POINTS),
            },
            ShapeKind::Polygon => Geometry::Convex {
                points: to_points(&DEFAULT_POLYGON_POINTS),
            },
            ShapeKind::None => return Err(ComponentError::UnknownShapeKind(kind.to_string())),
        };
        Ok(Self {
            kind,
            geometry,
            position: Vec2::zero(),
            rotation: 0.0,
            scale: Vec2::one(),
            fill_color: color::white(),
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position
    }

    /// Rotation of the primitive in degrees.
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

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color
    }

    /// Amount of points on the outline of the primitive.
    pub fn point_count(&self) -> usize {
        match &self.geometry {
            Geometry::Circle { .. } => CIRCLE_POINT_COUNT,
            Geometry::Rectangle { .. } => 4,
            Geometry::Convex { points } => points.len(),
        }
    }

    /// Outline of the primitive in local coordinates.
    ///
    /// Circle outline is approximated by [`CIRCLE_POINT_COUNT`] points
    /// starting from the top of its bounding box.
    ///
    pub fn points(&self) -> Vec<Vec2> {
        match &self.geometry {
            Geometry::Circle { radius } => (0..CIRCLE_POINT_COUNT)
                .map(|index| {
                    let angle = index as f32 * 2.0 * PI / CIRCLE_POINT_COUNT as f32 - PI / 2.0;
                    Vec2::new(radius + angle.cos() * radius, radius + angle.sin() * radius)
                })
                .collect(),
            Geometry::Rectangle { size } => vec![
                Vec2::zero(),
                Vec2::new(size.x, 0.0),
                *size,
                Vec2::new(0.0, size.y),
            ],
            Geometry::Convex { points } => points.clone(),
        }
    }
}

fn to_points(points: &[(f32, f32)]) -> Vec<Vec2> {
    points.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}
