//! Render target which does not need any window or graphics device.

use std::collections::VecDeque;

use crate::config::Config;
use crate::window::{Event, Size};

use super::{color, Color, Primitive, RenderTarget};

/// Window-like render target which records draw calls instead of rasterizing them.
///
/// Useful for tests and for running the engine on machines without display.
///
#[derive(Debug)]
pub struct HeadlessWindow {
    title: String,
    size: Size,
    open: bool,
    frame_limit: Option<u64>,
    frames: u64,
    draw_calls: u64,
    clear_color: Color,
    frame: Vec<Primitive>,
    events: VecDeque<Event>,
}

impl HeadlessWindow {
    /// Creates new open window with given title and size.
    pub fn new(title: impl Into<String>, size: Size) -> Self {
        let title = title.into();
        log::info!(
            "headless window \"{}\" created with size {}x{}",
            title,
            size.width,
            size.height,
        );
        Self {
            title,
            size,
            open: true,
            frame_limit: None,
            frames: 0,
            draw_calls: 0,
            clear_color: color::black(),
            frame: Vec::new(),
            events: VecDeque::new(),
        }
    }

    /// Creates window with title, size and frame limit of given configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut window = Self::new(config.name(), config.window_size());
        window.set_frame_limit(config.frame_limit());
        window
    }

    /// Window will close itself after presenting given amount of frames.
    pub fn with_frame_limit(mut self, frame_limit: u64) -> Self {
        self.set_frame_limit(Some(frame_limit));
        self
    }

    /// Window with limit already reached is closed right away.
    fn set_frame_limit(&mut self, frame_limit: Option<u64>) {
        self.frame_limit = frame_limit;
        self.close_if_limit_reached();
    }

    fn close_if_limit_reached(&mut self) {
        if let Some(limit) = self.frame_limit {
            if self.frames >= limit {
                log::debug!("frame limit of {} reached", limit);
                self.close();
            }
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Amount of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total amount of draw calls since creation.
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    /// Color of the last clear call.
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Primitives drawn since the last clear call.
    pub fn drawn(&self) -> &[Primitive] {
        &self.frame
    }

    /// Enqueues an event to be handled on the next [`handle_events`](RenderTarget::handle_events) call.
    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event)
    }
}

impl RenderTarget for HeadlessWindow {
    fn is_open(&self) -> bool {
        self.open
    }

    fn handle_events(&mut self) -> Vec<Event> {
        let events: Vec<_> = self.events.drain(..).collect();
        for event in &events {
            match *event {
                Event::Closed => self.close(),
                Event::Resized(size) => {
                    log::debug!("resized with {:?}", <(u32, u32)>::from(size));
                    self.size = size;
                }
            }
        }
        events
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.frame.clear();
    }

    fn draw(&mut self, primitive: &Primitive) {
        self.draw_calls += 1;
        self.frame.push(primitive.clone());
    }

    fn display(&mut self) {
        self.frames += 1;
        self.close_if_limit_reached();
    }

    fn close(&mut self) {
        if self.open {
            log::info!("headless window \"{}\" closed", self.title);
        }
        self.open = false;
    }
}
