//! Demo scene of the engine rendered into the headless window.

use xlr8::prelude::*;
use xlr8::error::Result;
use xlr8::logger;

const APP_NAME: &str = env!("CARGO_CRATE_NAME", "binary must be compiled by Cargo");
const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "binary must be compiled by Cargo");

/// Amount of frames presented before the demo closes itself.
const FRAME_LIMIT: u64 = 600;

fn main() -> Result<()> {
    let version: semver::Version = APP_VERSION_STR.parse()?;
    let config = Config::new(APP_NAME.to_string(), version)
        .with_window_size((1920, 1080))
        .with_frame_limit(Some(FRAME_LIMIT))
        .with_log_directory(Some("logs".into()));

    let _handle = logger::init(&config)?;
    log::info!("logger initialized successfully");

    let mut world = World::new();
    world.spawn(triangle()?);
    world.spawn(circle()?);

    let window = HeadlessWindow::from_config(&config);
    let mut app = Application::with_world(config, window, world);
    let report = app.run();
    if let Some(failure) = report.failures.first() {
        return Err(failure.error.clone().into());
    }
    Ok(())
}

fn triangle() -> Result<Actor> {
    let mut actor = Actor::new("Triangle");
    actor
        .add_component(Transform::new())?
        .set_position(Vec2::new(200.0, 150.0));

    let shape = actor.add_component(Shape::new())?;
    shape.create_shape(ShapeKind::Triangle)?;
    shape.set_fill_color(color::yellow())?;
    shape.set_position(200.0, 150.0)?;
    Ok(actor)
}

fn circle() -> Result<Actor> {
    let mut actor = Actor::new("Circle");
    let position = Vec2::new(960.0, 540.0);
    actor.add_component(Transform::new())?.set_position(position);

    let shape = actor.add_component(Shape::with_kind(ShapeKind::Circle)?)?;
    shape.set_position_vec(position)?;
    shape.set_scale(Vec2::new(4.0, 4.0))?;
    Ok(actor)
}
