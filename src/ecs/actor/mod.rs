//! The only concrete *entity* of the engine.

use crate::error::{ComponentFailure, EntityError};
use crate::graphics::RenderTarget;

use super::entity::attach;
use super::{Component, Components, Entity, EntityId, EntityState, Transform};


/// Name of the actor created without explicit name.
pub const DEFAULT_ACTOR_NAME: &str = "Actor";

/// Object which can be placed in the scene.
///
/// Behavior and data of the actor are defined by its components.
/// Lifecycle calls are passed to every component in order of their insertion.
///
pub struct Actor {
    id: EntityId,
    name: String,
    state: EntityState,
    components: Components,
}

impl Actor {
    /// Creates new uninitialized actor without components.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::default(),
            name: name.into(),
            state: EntityState::Uninitialized,
            components: Components::new(),
        }
    }

    /// Attaches the component to the end of the component sequence of this actor.
    ///
    /// Returns a mutable reference to just attached component.
    /// If the actor is already [active](EntityState::Active), the component is initialized first.
    ///
    /// # Errors
    ///
    /// An error is returned if the actor is [destroyed](EntityState::Destroyed)
    /// or if initialization of the component fails.
    ///
    pub fn add_component<T>(&mut self, component: T) -> Result<&mut T, EntityError>
    where
        T: Component,
    {
        let component = attach(&mut self.components, self.state, Box::new(component))?;
        let component = component
            .as_any_mut()
            .downcast_mut()
            .expect("component was just inserted with this type");
        Ok(component)
    }

    /// Retrieves the first component of type `T`, if any.
    pub fn get_component<T>(&self) -> Option<&T>
    where
        T: Component,
    {
        self.components.get()
    }

    /// Retrieves the first component of type `T`, if any.
    pub fn get_component_mut<T>(&mut self) -> Option<&mut T>
    where
        T: Component,
    {
        self.components.get_mut()
    }

    /// Returns `true` if the actor has a component of type `T`.
    pub fn has_component<T>(&self) -> bool
    where
        T: Component,
    {
        self.components.contains::<T>()
    }

    /// Detaches and returns the first component of type `T`, if any.
    pub fn remove_component<T>(&mut self) -> Option<T>
    where
        T: Component,
    {
        self.components.remove()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Transform of the actor, if it was attached.
    pub fn transform(&self) -> Option<&Transform> {
        self.get_component()
    }

    fn expect_state(
        &self,
        expected: &[EntityState],
        operation: &'static str,
    ) -> Result<(), EntityError> {
        if expected.contains(&self.state) {
            Ok(())
        } else {
            Err(EntityError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(DEFAULT_ACTOR_NAME)
    }
}

impl Entity for Actor {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
        self.components.set_owner(Some(id));
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> EntityState {
        self.state
    }

    fn components(&self) -> &Components {
        &self.components
    }

    fn components_mut(&mut self) -> &mut Components {
        &mut self.components
    }

    fn initialize(&mut self) -> Result<(), EntityError> {
        const OPERATION: &str = "initialize";
        self.expect_state(&[EntityState::Uninitialized], OPERATION)?;

        let failures = self.components.for_each_mut(|component| component.initialize());
        self.state = EntityState::Active;
        log::debug!("actor \"{}\" initialized", self.name);
        fan_out_result(OPERATION, failures)
    }

    fn update(&mut self, delta_time: f32) -> Result<(), EntityError> {
        const OPERATION: &str = "update";
        self.expect_state(&[EntityState::Active], OPERATION)?;

        let failures = self
            .components
            .for_each_mut(|component| component.update(delta_time));
        fan_out_result(OPERATION, failures)
    }

    fn render(&self, target: &mut dyn RenderTarget) -> Result<(), EntityError> {
        const OPERATION: &str = "render";
        self.expect_state(&[EntityState::Active], OPERATION)?;

        let failures = self.components.for_each(|component| component.render(target));
        fan_out_result(OPERATION, failures)
    }

    fn destroy(&mut self) -> Result<(), EntityError> {
        const OPERATION: &str = "destroy";
        self.expect_state(
            &[EntityState::Uninitialized, EntityState::Active],
            OPERATION,
        )?;

        let failures = self.components.for_each_mut(|component| component.destroy());
        self.components.clear();
        self.state = EntityState::Destroyed;
        log::debug!("actor \"{}\" destroyed", self.name);
        fan_out_result(OPERATION, failures)
    }
}

fn fan_out_result(
    operation: &'static str,
    failures: Vec<ComponentFailure>,
) -> Result<(), EntityError> {
    if failures.is_empty() {
        Ok(())
    } else {
        Err(EntityError::Components {
            operation,
            failures,
        })
    }
}
