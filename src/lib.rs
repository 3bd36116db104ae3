//! Simple 2D game engine built around entities which own their components.

pub use app::Application;

pub mod app;
pub mod config;
pub mod ecs;
pub mod error;
pub mod graphics;
pub mod logger;
pub mod window;

pub mod prelude {
    //! Types needed by most of games.

    pub use ultraviolet::Vec2;

    pub use crate::app::{Application, RunReport};
    pub use crate::config::Config;
    pub use crate::ecs::{Actor, Component, Entity, EntityId, EntityState, Shape, Transform, World};
    pub use crate::error::{ComponentError, EntityError, ErrorKind};
    pub use crate::graphics::{color, Color, HeadlessWindow, Primitive, RenderTarget, ShapeKind};
    pub use crate::window::{Event, Size};
}
