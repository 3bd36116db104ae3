//! Utilities for window handling of game engine.

/// General event of game engine window.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Event {
    /// Called when user requested game window to be closed.
    Closed,

    /// Called when game window was resized.
    Resized(Size),
}

/// Size of game engine window.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Creates new size of window.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from(tuple: (u32, u32)) -> Self {
        Size::new(tuple.0, tuple.1)
    }
}

impl From<Size> for (u32, u32) {
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}
