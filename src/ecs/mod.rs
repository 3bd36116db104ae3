//! Entity Component System (ECS) utilities for game engine.

pub use actor::Actor;
pub use component::{AsAny, Component, Components};
pub use entity::{Entity, EntityId, EntityState};
pub use shape::Shape;
pub use transform::Transform;
pub use world::World;

mod actor;
mod component;
mod entity;
mod shape;
mod transform;
mod world;
