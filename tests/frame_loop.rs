use xlr8::app::Phase;
use xlr8::prelude::*;

fn config(frame_limit: u64) -> Config {
    Config::new("frame loop".to_string(), semver::Version::new(1, 2, 3))
        .with_window_size((800, 600))
        .with_frame_limit(Some(frame_limit))
        .with_clear_color(color::black())
}

#[test]
fn demo_scene_is_drawn_every_frame() {
    let config = config(5);
    let mut world = World::new();

    let mut triangle = Actor::new("Triangle");
    triangle.add_component(Transform::new()).unwrap();
    let shape = triangle.add_component(Shape::new()).unwrap();
    shape.create_shape(ShapeKind::Triangle).unwrap();
    shape.set_fill_color(color::yellow()).unwrap();
    shape.set_position(200.0, 150.0).unwrap();
    let triangle = world.spawn(triangle);

    let mut polygon = Actor::new("Polygon");
    polygon.add_component(Shape::with_kind(ShapeKind::Polygon).unwrap()).unwrap();
    world.spawn(polygon);

    // actor without a primitive draws nothing
    let mut empty = Actor::default();
    empty.add_component(Shape::new()).unwrap();
    world.spawn(empty);

    let window = HeadlessWindow::from_config(&config);
    let mut app = Application::with_world(config, window, world);
    assert_eq!(app.target().title(), "frame loop");

    let report = app.run();
    assert!(report.is_clean());
    assert_eq!(report.frames, 5);

    let (window, world) = app.into_parts();
    assert!(!window.is_open());
    assert_eq!(window.draw_calls(), 10);

    let last_frame = window.drawn();
    assert_eq!(last_frame.len(), 2);
    let yellow = last_frame
        .iter()
        .find(|primitive| primitive.kind() == ShapeKind::Triangle)
        .unwrap();
    assert_eq!(yellow.fill_color(), color::yellow());
    assert_eq!(yellow.position(), Vec2::new(200.0, 150.0));

    let triangle = world.get(triangle).unwrap();
    assert_eq!(triangle.state(), EntityState::Destroyed);
    assert!(triangle.get_component::<Shape>().is_none());
}

#[test]
fn invalid_shapes_are_reported() {
    let config = config(1);
    let mut actor = Actor::new("Broken");
    let shape = actor.add_component(Shape::new()).unwrap();

    let error = shape.create_shape("hexagon".parse().unwrap_or(ShapeKind::None));
    assert_eq!(error.unwrap_err().kind(), ErrorKind::Configuration);
    let error = shape.set_fill_color(color::green()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Usage);

    let mut app = Application::new(config.clone(), HeadlessWindow::from_config(&config));
    let id = app.world_mut().spawn(actor);
    let report = app.run();
    assert!(report.is_clean());
    assert_eq!(report.frames, 1);
    assert_eq!(app.target().draw_calls(), 0);

    let entity = app.world_mut().get_mut(id).unwrap();
    let error = entity.update(0.0).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Usage);
    assert!(matches!(
        error,
        EntityError::InvalidState {
            state: EntityState::Destroyed,
            ..
        }
    ));
    assert_eq!(Phase::Update.to_string(), "update");
}
