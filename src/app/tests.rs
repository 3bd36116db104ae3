#![cfg(test)]

use super::*;
use crate::ecs::{Actor, EntityState, Shape, Transform};
use crate::error::ComponentError;
use crate::graphics::{color, HeadlessWindow, ShapeKind};
use crate::window::{Event, Size};

fn application(frame_limit: u64) -> Application<HeadlessWindow> {
    let config = Config::default()
        .with_window_size((400, 300))
        .with_clear_color(color::blue());
    let window = HeadlessWindow::from_config(&config).with_frame_limit(frame_limit);
    Application::new(config, window)
}

fn triangle() -> Actor {
    let mut actor = Actor::new("triangle");
    actor.add_component(Transform::new()).unwrap();
    let shape = actor.add_component(Shape::with_kind(ShapeKind::Triangle).unwrap()).unwrap();
    shape.set_fill_color(color::yellow()).unwrap();
    actor
}

#[test]
fn test_run_until_closed() {
    let mut app = application(3);
    let id = app.world_mut().spawn(triangle());

    let report = app.run();
    assert_eq!(report.frames, 3);
    assert!(report.is_clean());

    let window = app.target();
    assert!(!window.is_open());
    assert_eq!(window.frames(), 3);
    assert_eq!(window.draw_calls(), 3);
    assert_eq!(window.clear_color(), color::blue());
    assert_eq!(window.size(), Size::new(400, 300));

    let entity = app.world().get(id).unwrap();
    assert_eq!(entity.state(), EntityState::Destroyed);
}

#[test]
fn test_zero_frame_limit() {
    let mut app = application(0);
    let id = app.world_mut().spawn(triangle());
    assert!(!app.target().is_open());

    let report = app.run();
    assert_eq!(report.frames, 0);
    assert!(report.is_clean());
    assert_eq!(app.target().draw_calls(), 0);
    assert_eq!(app.world().get(id).unwrap().state(), EntityState::Destroyed);

    let config = Config::default().with_frame_limit(Some(0));
    assert!(!HeadlessWindow::from_config(&config).is_open());
}

#[test]
fn test_closed_event() {
    let mut app = application(100);
    app.world_mut().spawn(triangle());
    app.target_mut().push_event(Event::Resized(Size::new(1280, 720)));
    app.target_mut().push_event(Event::Closed);

    let report = app.run();
    assert_eq!(report.frames, 0);
    assert!(report.is_clean());
    assert_eq!(app.target().size(), Size::new(1280, 720));
    assert_eq!(app.target().draw_calls(), 0);
}

/// Component which always fails to update.
struct Faulty {
    owner: Option<EntityId>,
}

impl crate::ecs::Component for Faulty {
    fn update(&mut self, _delta_time: f32) -> Result<(), ComponentError> {
        Err(ComponentError::ShapeNotCreated { operation: "update" })
    }

    fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<EntityId>) {
        self.owner = owner
    }
}

#[test]
fn test_failures_are_reported() {
    let mut app = application(2);
    let mut faulty = triangle();
    faulty.add_component(Faulty { owner: None }).unwrap();
    let faulty = app.world_mut().spawn(faulty);
    let healthy = app.world_mut().spawn(triangle());

    let report = app.run();
    assert_eq!(report.frames, 2);
    assert_eq!(report.failures.len(), 2);
    for (frame, failure) in report.failures.iter().enumerate() {
        assert_eq!(failure.entity, faulty);
        assert_eq!(failure.phase, Phase::Update);
        assert_eq!(failure.frame, Some(frame as u64));
        assert_eq!(failure.error.failures()[0].index, 2);
    }
    // other entities are still rendered
    assert_eq!(app.target().draw_calls(), 4);
    assert!(app.world().get(healthy).unwrap().components().is_empty());
}
