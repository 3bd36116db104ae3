//! Graphics collaborators of game engine: render targets and drawable primitives.

pub use headless::HeadlessWindow;
pub use primitive::{Geometry, Primitive, ShapeKind};

use crate::window::Event;

pub mod color;
mod headless;
pub mod primitive;

/// Color type used for filling primitives and clearing render targets.
pub type Color = palette::Srgba<u8>;

/// Objects of this trait accept draw calls and present frames.
///
/// Entities and components never own render target:
/// they borrow it for the duration of a single render call.
///
pub trait RenderTarget {
    /// Returns `true` while frames should be presented to this target.
    fn is_open(&self) -> bool;

    /// Handles all pending events of the target and returns them.
    fn handle_events(&mut self) -> Vec<Event>;

    /// Clears the contents of the current frame with given color.
    fn clear(&mut self, color: Color);

    /// Draws primitive onto the current frame.
    fn draw(&mut self, primitive: &Primitive);

    /// Presents the current frame.
    fn display(&mut self);

    /// Closes the target: it will not be open anymore.
    fn close(&mut self);
}
