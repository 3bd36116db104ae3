//! Configuration utilities for game engine and your game.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use semver::Version;

use crate::graphics::{color, Color};
use crate::window::Size;

pub const ENGINE_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");

const ENGINE_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    pub static ref ENGINE_VERSION: Version = ENGINE_VERSION_STR.parse().unwrap();
}

/// This struct represents general configuration of game engine.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    window_size: Size,
    frame_limit: Option<u64>,
    clear_color: Color,
    log_level: LevelFilter,
    log_directory: Option<PathBuf>,
}

impl Config {
    /// Creates new configuration with given name and version.
    ///
    /// Other parameters are the same as in [`Config::default`].
    ///
    pub fn new(name: String, version: Version) -> Self {
        Self {
            name,
            version,
            ..Self::default()
        }
    }

    /// Name of your game, used as the window title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semver version of your game.
    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn window_size(&self) -> Size {
        self.window_size
    }

    /// Amount of frames after which the window closes itself, if any.
    pub fn frame_limit(&self) -> Option<u64> {
        self.frame_limit
    }

    /// Color used to clear the window before each frame.
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Directory for log files. Logs are written to console only if absent.
    pub fn log_directory(&self) -> Option<&Path> {
        self.log_directory.as_deref()
    }

    pub fn with_window_size(mut self, size: impl Into<Size>) -> Self {
        self.window_size = size.into();
        self
    }

    pub fn with_frame_limit(mut self, frame_limit: Option<u64>) -> Self {
        self.frame_limit = frame_limit;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_log_directory(mut self, directory: Option<PathBuf>) -> Self {
        self.log_directory = directory;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        let log_level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self {
            name: "Hello World".to_string(),
            version: Version::new(0, 0, 0),
            window_size: Size::new(1920, 1080),
            frame_limit: None,
            clear_color: color::black(),
            log_level,
            log_directory: None,
        }
    }
}
