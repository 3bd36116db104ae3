//! Utilities for storage of ECS.

use slotmap::HopSlotMap;

use crate::error::EntityError;
use crate::graphics::RenderTarget;

use super::{Entity, EntityId, EntityState};

/// Storage for all entities of the scene.
pub type EntityStorage = HopSlotMap<EntityId, Box<dyn Entity>>;

/// Error of the single entity caught by the [`World`].
pub type EntityFailure = (EntityId, EntityError);

/// Storage for entities of ECS.
///
/// World exclusively owns every entity spawned into it.
///
#[derive(Default)]
pub struct World {
    entities: EntityStorage,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self {
            entities: HopSlotMap::with_key(),
        }
    }

    /// Moves the entity into the world and assigns an ID to it.
    pub fn spawn<E>(&mut self, entity: E) -> EntityId
    where
        E: Entity,
    {
        self.spawn_boxed(Box::new(entity))
    }

    /// Same as [`spawn`](Self::spawn), but for already boxed entity.
    pub fn spawn_boxed(&mut self, entity: Box<dyn Entity>) -> EntityId {
        let id = self.entities.insert_with_key(|id| {
            let mut entity = entity;
            entity.set_id(id);
            entity
        });
        log::debug!("entity \"{}\" spawned as {:?}", self.entities[id].name(), id);
        id
    }

    /// Removes the entity from the world and returns it to the caller.
    pub fn take(&mut self, id: EntityId) -> Option<Box<dyn Entity>> {
        self.entities.remove(id)
    }

    /// Removes the entity from the world, destroying it first if needed.
    ///
    /// Returns `None` if there is no such entity.
    ///
    pub fn despawn(&mut self, id: EntityId) -> Option<Result<(), EntityError>> {
        let mut entity = self.entities.remove(id)?;
        if entity.state() == EntityState::Destroyed {
            return Some(Ok(()));
        }
        Some(entity.destroy())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn get(&self, id: EntityId) -> Option<&dyn Entity> {
        self.entities.get(id).map(|entity| &**entity)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut dyn Entity> {
        match self.entities.get_mut(id) {
            Some(entity) => Some(&mut **entity),
            None => None,
        }
    }

    /// Retrieves the entity with its concrete type.
    pub fn get_as<E>(&self, id: EntityId) -> Option<&E>
    where
        E: Entity,
    {
        self.get(id)?.downcast_ref()
    }

    /// Retrieves the entity with its concrete type.
    pub fn get_as_mut<E>(&mut self, id: EntityId) -> Option<&mut E>
    where
        E: Entity,
    {
        self.get_mut(id)?.downcast_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns immutable iterator over all entities with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &dyn Entity)> {
        self.entities.iter().map(|(id, entity)| (id, &**entity))
    }

    /// Initializes every entity which was not initialized yet.
    pub fn initialize(&mut self) -> Vec<EntityFailure> {
        self.entities
            .iter_mut()
            .filter(|(_, entity)| entity.state() == EntityState::Uninitialized)
            .filter_map(|(id, entity)| entity.initialize().err().map(|error| (id, error)))
            .collect()
    }

    /// Updates every active entity.
    pub fn update(&mut self, delta_time: f32) -> Vec<EntityFailure> {
        self.entities
            .iter_mut()
            .filter(|(_, entity)| entity.is_active())
            .filter_map(|(id, entity)| entity.update(delta_time).err().map(|error| (id, error)))
            .collect()
    }

    /// Renders every active entity onto the target.
    pub fn render(&self, target: &mut dyn RenderTarget) -> Vec<EntityFailure> {
        self.entities
            .iter()
            .filter(|(_, entity)| entity.is_active())
            .filter_map(|(id, entity)| entity.render(target).err().map(|error| (id, error)))
            .collect()
    }

    /// Destroys every entity which was not destroyed yet.
    ///
    /// Destroyed entities stay in the world until they are despawned or cleared.
    ///
    pub fn destroy(&mut self) -> Vec<EntityFailure> {
        self.entities
            .iter_mut()
            .filter(|(_, entity)| entity.state() != EntityState::Destroyed)
            .filter_map(|(id, entity)| entity.destroy().err().map(|error| (id, error)))
            .collect()
    }

    /// Drops every entity of the world.
    pub fn clear(&mut self) {
        self.entities.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{Actor, Component, Shape, Transform};
    use crate::graphics::{HeadlessWindow, ShapeKind};
    use crate::window::Size;

    fn actor_with_shape(name: &str) -> Actor {
        let mut actor = Actor::new(name);
        actor.add_component(Transform::new()).unwrap();
        actor.add_component(Shape::with_kind(ShapeKind::Circle).unwrap()).unwrap();
        actor
    }

    #[test]
    fn test_spawn() {
        let mut world = World::new();
        assert!(world.is_empty());

        let id = world.spawn(actor_with_shape("player"));
        assert!(world.contains(id));
        assert_eq!(world.len(), 1);

        let entity = world.get(id).unwrap();
        assert_eq!(entity.id(), id);
        assert_eq!(entity.name(), "player");

        let transform = entity.get_component::<Transform>().unwrap();
        assert_eq!(transform.owner(), Some(id));

        let actor = world.get_as::<Actor>(id).unwrap();
        assert_eq!(actor.component_count(), 2);
    }

    #[test]
    fn test_frame() {
        let mut world = World::new();
        let first = world.spawn(actor_with_shape("first"));
        let second = world.spawn(actor_with_shape("second"));
        let mut window = HeadlessWindow::new("test", Size::new(800, 600));

        assert!(world.initialize().is_empty());
        assert!(world.update(0.0).is_empty());
        assert!(world.render(&mut window).is_empty());
        assert_eq!(window.drawn().len(), 2);

        assert!(world.destroy().is_empty());
        assert_eq!(world.get(first).unwrap().state(), EntityState::Destroyed);
        assert_eq!(world.get(second).unwrap().state(), EntityState::Destroyed);

        // destroyed entities are skipped
        assert!(world.update(0.016).is_empty());
        assert!(world.destroy().is_empty());
    }

    #[test]
    fn test_update_before_initialize() {
        let mut world = World::new();
        let mut actor = Actor::new("broken");
        let shape = actor.add_component(Shape::new()).unwrap();
        assert!(shape.create_shape(ShapeKind::None).is_err());
        let id = world.spawn(actor);

        let entity = world.get_mut(id).unwrap();
        let failure = entity.update(0.0).unwrap_err();
        assert_eq!(
            failure,
            EntityError::InvalidState {
                operation: "update",
                state: EntityState::Uninitialized,
            },
        );
        assert!(world.initialize().is_empty());
        assert!(world.initialize().is_empty());
    }

    #[test]
    fn test_despawn() {
        let mut world = World::new();
        let id = world.spawn(actor_with_shape("temporary"));
        assert_eq!(world.despawn(id), Some(Ok(())));
        assert!(!world.contains(id));
        assert_eq!(world.despawn(id), None);

        let id = world.spawn(Actor::default());
        let actor = world.take(id).unwrap();
        assert_eq!(actor.name(), "Actor");
        assert!(world.is_empty());
    }
}
