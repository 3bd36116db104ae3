//! Utilities for *entities* in ECS.

use std::fmt;

use slotmap::new_key_type;

use crate::error::{ComponentFailure, EntityError};
use crate::graphics::RenderTarget;

use super::{AsAny, Component, Components};

new_key_type! {
    /// Unique identifier of the *entity* of ECS.
    pub struct EntityId;
}

/// Lifecycle state of an entity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EntityState {
    /// Entity was created, but not initialized yet.
    Uninitialized,
    /// Entity was initialized and takes part in frames.
    Active,
    /// Entity was destroyed. This state is terminal.
    Destroyed,
}

impl Default for EntityState {
    fn default() -> Self {
        Self::Uninitialized
    }
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Active => "active",
            Self::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}

/// Objects of this trait represent *entity* of ECS:
/// an owner of ordered sequence of components.
///
/// Typed component lookup is available on `dyn Entity` and on every implementor
/// through [`components`](Entity::components).
///
pub trait Entity: AsAny {
    /// Get ID of current entity. Null until entity is spawned into the [`World`](super::World).
    fn id(&self) -> EntityId;

    /// Assigns ID to the entity and to back references of all its components.
    fn set_id(&mut self, id: EntityId);

    /// Display name of the entity.
    fn name(&self) -> &str;

    fn state(&self) -> EntityState;

    fn is_active(&self) -> bool {
        self.state() == EntityState::Active
    }

    fn components(&self) -> &Components;

    fn components_mut(&mut self) -> &mut Components;

    /// Appends already boxed component, taking ownership of it.
    ///
    /// Component attached to an [active](EntityState::Active) entity is initialized immediately.
    ///
    /// # Errors
    ///
    /// An error is returned if entity is [destroyed](EntityState::Destroyed)
    /// or if initialization of the attached component fails.
    ///
    fn add_boxed_component(
        &mut self,
        component: Box<dyn Component>,
    ) -> Result<&mut dyn Component, EntityError> {
        let state = self.state();
        attach(self.components_mut(), state, component)
    }

    /// Initializes the entity and all of its components.
    ///
    /// # Errors
    ///
    /// An error is returned if entity is not [uninitialized](EntityState::Uninitialized)
    /// or if some components failed to initialize.
    ///
    fn initialize(&mut self) -> Result<(), EntityError>;

    /// Updates all components of the entity.
    fn update(&mut self, delta_time: f32) -> Result<(), EntityError>;

    /// Renders all components of the entity onto the target.
    fn render(&self, target: &mut dyn RenderTarget) -> Result<(), EntityError>;

    /// Destroys all components of the entity and releases them.
    fn destroy(&mut self) -> Result<(), EntityError>;
}

impl<'a> dyn Entity + 'a {
    /// Retrieves the first component of type `T`, if any.
    pub fn get_component<T>(&self) -> Option<&T>
    where
        T: Component,
    {
        self.components().get()
    }

    /// Retrieves the first component of type `T`, if any.
    pub fn get_component_mut<T>(&mut self) -> Option<&mut T>
    where
        T: Component,
    {
        self.components_mut().get_mut()
    }

    /// Downcasts the entity to its concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Entity,
    {
        self.as_any().downcast_ref()
    }

    /// Downcasts the entity to its concrete type.
    pub fn downcast_mut<E>(&mut self) -> Option<&mut E>
    where
        E: Entity,
    {
        self.as_any_mut().downcast_mut()
    }
}

/// Appends the component to the sequence of an entity in given state.
///
/// Component stays attached even if its late initialization fails.
///
pub(super) fn attach(
    components: &mut Components,
    state: EntityState,
    component: Box<dyn Component>,
) -> Result<&mut dyn Component, EntityError> {
    const OPERATION: &str = "add component";
    if state == EntityState::Destroyed {
        return Err(EntityError::InvalidState {
            operation: OPERATION,
            state,
        });
    }

    let index = components.len();
    let component = components.push_boxed(component);
    if state == EntityState::Active {
        if let Err(error) = component.initialize() {
            return Err(EntityError::Components {
                operation: OPERATION,
                failures: vec![ComponentFailure {
                    index,
                    type_name: (*component).type_name(),
                    error,
                }],
            });
        }
    }
    Ok(component)
}
