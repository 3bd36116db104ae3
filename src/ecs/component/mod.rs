//! Utilities for *components* in ECS.

use std::any::{self, Any};

use crate::error::{ComponentError, ComponentFailure};
use crate::graphics::RenderTarget;

use super::EntityId;

mod tests;

/// Helper trait to get [`Any`] out of component trait objects.
///
/// Implemented automatically for every `'static` type.
///
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Name of the concrete type behind the trait object.
    fn type_name(&self) -> &'static str;
}

impl<T> AsAny for T
where
    T: Any,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

/// Objects of this trait represent *component* of ECS.
///
/// Concrete type of the component is its capability:
/// entities look up components by it.
///
pub trait Component: AsAny {
    /// One-time setup before the first frame.
    fn initialize(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Per-frame logic; `delta_time` is measured in seconds.
    fn update(&mut self, _delta_time: f32) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Per-frame draw onto the render target.
    fn render(&self, _target: &mut dyn RenderTarget) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Releases resources owned by the component.
    fn destroy(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Get ID of entity that owns current component, if any.
    fn owner(&self) -> Option<EntityId>;

    fn set_owner(&mut self, owner: Option<EntityId>);
}

/// Ordered sequence of components exclusively owned by one entity.
#[derive(Default)]
pub struct Components {
    owner: Option<EntityId>,
    components: Vec<Box<dyn Component>>,
}

impl Components {
    /// Creates an empty component sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// ID of entity which owns all these components.
    pub fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    /// Changes the owner and updates back references of all components.
    pub fn set_owner(&mut self, owner: Option<EntityId>) {
        self.owner = owner;
        for component in &mut self.components {
            component.set_owner(owner);
        }
    }

    /// Appends the component to the end of the sequence, taking ownership of it.
    ///
    /// Returns a mutable reference to just inserted component.
    ///
    pub fn push<T>(&mut self, component: T) -> &mut T
    where
        T: Component,
    {
        self.push_boxed(Box::new(component))
            .as_any_mut()
            .downcast_mut()
            .expect("component was just inserted with this type")
    }

    /// Appends already boxed component to the end of the sequence.
    pub fn push_boxed(&mut self, mut component: Box<dyn Component>) -> &mut dyn Component {
        component.set_owner(self.owner);
        log::debug!(
            "component {} attached to {:?}",
            (*component).type_name(),
            self.owner,
        );
        self.components.push(component);
        let last = self.components.len() - 1;
        &mut *self.components[last]
    }

    /// Retrieves the first component of type `T` in insertion order.
    pub fn get<T>(&self) -> Option<&T>
    where
        T: Component,
    {
        self.components
            .iter()
            .find_map(|component| (**component).as_any().downcast_ref())
    }

    /// Retrieves the first component of type `T` in insertion order.
    pub fn get_mut<T>(&mut self) -> Option<&mut T>
    where
        T: Component,
    {
        self.components
            .iter_mut()
            .find_map(|component| (**component).as_any_mut().downcast_mut())
    }

    /// Returns `true` if there is at least one component of type `T`.
    pub fn contains<T>(&self) -> bool
    where
        T: Component,
    {
        self.get::<T>().is_some()
    }

    /// Removes the first component of type `T` and detaches it from the owner.
    ///
    /// Order of the remaining components is preserved.
    ///
    pub fn remove<T>(&mut self) -> Option<T>
    where
        T: Component,
    {
        let index = self
            .components
            .iter()
            .position(|component| (**component).as_any().is::<T>())?;
        let mut component = self.components.remove(index);
        component.set_owner(None);
        let component = component.into_any().downcast::<T>().ok()?;
        Some(*component)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns immutable iterator over all components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.iter().map(|component| &**component)
    }

    /// Drops every component.
    pub fn clear(&mut self) {
        self.components.clear()
    }

    /// Calls `f` for every component in insertion order.
    ///
    /// Failure of one component does not stop the others:
    /// all failures are collected and returned.
    ///
    pub fn for_each_mut<F>(&mut self, mut f: F) -> Vec<ComponentFailure>
    where
        F: FnMut(&mut dyn Component) -> Result<(), ComponentError>,
    {
        let mut failures = Vec::new();
        for (index, component) in self.components.iter_mut().enumerate() {
            if let Err(error) = f(&mut **component) {
                failures.push(ComponentFailure {
                    index,
                    type_name: (**component).type_name(),
                    error,
                });
            }
        }
        failures
    }

    /// Same as [`for_each_mut`](Self::for_each_mut), but with immutable access.
    pub fn for_each<F>(&self, mut f: F) -> Vec<ComponentFailure>
    where
        F: FnMut(&dyn Component) -> Result<(), ComponentError>,
    {
        let mut failures = Vec::new();
        for (index, component) in self.components.iter().enumerate() {
            if let Err(error) = f(&**component) {
                failures.push(ComponentFailure {
                    index,
                    type_name: (**component).type_name(),
                    error,
                });
            }
        }
        failures
    }
}
