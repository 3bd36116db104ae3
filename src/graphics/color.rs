//! Named colors.

use super::Color;

pub fn black() -> Color {
    Color::new(0, 0, 0, 255)
}

pub fn white() -> Color {
    Color::new(255, 255, 255, 255)
}

pub fn red() -> Color {
    Color::new(255, 0, 0, 255)
}

pub fn green() -> Color {
    Color::new(0, 255, 0, 255)
}

pub fn blue() -> Color {
    Color::new(0, 0, 255, 255)
}

pub fn yellow() -> Color {
    Color::new(255, 255, 0, 255)
}

pub fn transparent() -> Color {
    Color::new(0, 0, 0, 0)
}
