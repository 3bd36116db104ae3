#![cfg(test)]

use slotmap::KeyData;

use super::*;
use crate::ecs::{Shape, Transform};

#[derive(Debug, Default)]
struct Health {
    owner: Option<EntityId>,
    value: u32,
}

impl Component for Health {
    fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<EntityId>) {
        self.owner = owner
    }
}

fn health(value: u32) -> Health {
    Health { owner: None, value }
}

#[test]
fn test_insertion() {
    let mut components = Components::new();
    assert!(components.is_empty());
    assert!(components.get::<Health>().is_none());

    let inserted = components.push(health(42));
    inserted.value += 1;
    assert_eq!(components.len(), 1);
    assert_eq!(components.get::<Health>().unwrap().value, 43);
    assert!(components.contains::<Health>());
    assert!(!components.contains::<Transform>());
}

#[test]
fn test_first_match_wins() {
    let mut components = Components::new();
    components.push(Transform::new());
    components.push(health(1));
    components.push(health(2));

    assert_eq!(components.get::<Health>().unwrap().value, 1);
    components.get_mut::<Health>().unwrap().value = 10;

    let values: Vec<_> = components
        .iter()
        .filter_map(|component| component.as_any().downcast_ref::<Health>())
        .map(|health| health.value)
        .collect();
    assert_eq!(values, [10, 2]);
}

#[test]
fn test_remove() {
    let mut components = Components::new();
    components.push(health(1));
    components.push(Transform::new());
    components.push(health(2));

    let removed = components.remove::<Health>().unwrap();
    assert_eq!(removed.value, 1);
    assert_eq!(removed.owner, None);
    assert_eq!(components.len(), 2);
    assert_eq!(components.get::<Health>().unwrap().value, 2);

    let names: Vec<_> = components.iter().map(|component| component.type_name()).collect();
    assert!(names[0].ends_with("Transform"));
    assert!(names[1].ends_with("Health"));

    assert!(components.remove::<Shape>().is_none());
}

#[test]
fn test_owner() {
    let owner = EntityId::from(KeyData::from_ffi(1 << 32 | 1));
    let mut components = Components::new();
    components.push(health(0));
    assert_eq!(components.get::<Health>().unwrap().owner, None);

    components.set_owner(Some(owner));
    assert_eq!(components.owner(), Some(owner));
    assert_eq!(components.get::<Health>().unwrap().owner(), Some(owner));

    components.push(Transform::new());
    assert_eq!(components.get::<Transform>().unwrap().owner(), Some(owner));
}

#[test]
fn test_fan_out_collects_failures() {
    let mut components = Components::new();
    components.push(Shape::new());
    components.push(health(0));
    components.push(Shape::new());

    let failures = components.for_each_mut(|component| {
        match component.as_any_mut().downcast_mut::<Shape>() {
            Some(shape) => shape.set_rotation(90.0),
            None => Ok(()),
        }
    });
    let indices: Vec<_> = failures.iter().map(|failure| failure.index).collect();
    assert_eq!(indices, [0, 2]);
    assert!(failures[0].type_name.ends_with("Shape"));
    assert_eq!(
        failures[1].error,
        ComponentError::ShapeNotCreated {
            operation: "set rotation",
        },
    );
}
