//! Utilities for game engine error handling.

use std::fmt;

use thiserror::Error;

use crate::ecs::EntityState;
use crate::logger::LoggerError;

/// Result of any engine-level operation which can return an error.
pub type Result<T> = std::result::Result<T, Error>;

/// General error type of game engine.
#[derive(Debug, Error)]
pub enum Error {
    #[error("logger initialization failure: {0}")]
    Logger(#[from] LoggerError),

    #[error("entity failure: {0}")]
    Entity(#[from] EntityError),

    #[error("component failure: {0}")]
    Component(#[from] ComponentError),

    #[error("version parsing failure: {0}")]
    Version(#[from] semver::Error),
}

/// Broad classification of recoverable engine errors.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// Operation was called at the wrong time, e.g. mutating a shape
    /// which was never created or updating a destroyed entity.
    Usage,
    /// Operation was given a value it cannot work with.
    Configuration,
}

/// Error that can happen inside of a single component.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ComponentError {
    #[error("cannot {operation}: shape is not created")]
    ShapeNotCreated { operation: &'static str },

    #[error("unknown shape kind: {0}")]
    UnknownShapeKind(String),
}

impl ComponentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ShapeNotCreated { .. } => ErrorKind::Usage,
            Self::UnknownShapeKind(_) => ErrorKind::Configuration,
        }
    }
}

/// Failure of one component during lifecycle fan-out of its entity.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ComponentFailure {
    /// Position of the component in the entity's component sequence.
    pub index: usize,
    /// Concrete type name of the failed component.
    pub type_name: &'static str,
    pub error: ComponentError,
}

impl fmt::Display for ComponentFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{} ({}): {}", self.index, self.type_name, self.error)
    }
}

/// Error that can happen on lifecycle operations of an entity.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum EntityError {
    #[error("cannot {operation} entity in {state} state")]
    InvalidState {
        operation: &'static str,
        state: EntityState,
    },

    #[error("{} component(s) failed to {operation}: {}", .failures.len(), join(.failures))]
    Components {
        operation: &'static str,
        failures: Vec<ComponentFailure>,
    },
}

impl EntityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidState { .. } => ErrorKind::Usage,
            Self::Components { failures, .. } => {
                let configuration = failures
                    .iter()
                    .any(|failure| failure.error.kind() == ErrorKind::Configuration);
                if configuration {
                    ErrorKind::Configuration
                } else {
                    ErrorKind::Usage
                }
            }
        }
    }

    /// Returns failures of particular components, if any.
    pub fn failures(&self) -> &[ComponentFailure] {
        match self {
            Self::InvalidState { .. } => &[],
            Self::Components { failures, .. } => failures,
        }
    }
}

fn join(failures: &[ComponentFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
