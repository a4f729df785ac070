//! Error types.

use thiserror::Error;

use crate::{color::Component, space::Space};

/// Errors reported by the library. All of them point at a mistake in the
/// calling code rather than a condition that can occur during normal
/// conversion or interpolation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A color was constructed with the wrong number of components for its
    /// space.
    #[error("{space} expects {expected} components, got {actual}")]
    InvalidComponents {
        /// The space the color was created in.
        space: Space,
        /// Number of components the space requires.
        expected: usize,
        /// Number of components that were given.
        actual: usize,
    },

    /// A color model name did not match any registered space.
    #[error("unknown color model: {0}")]
    UnknownModel(String),

    /// A string could not be parsed as a hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A string could not be parsed as a CSS color.
    #[error("invalid CSS color: {0:?}")]
    InvalidCss(String),

    /// A cubic bezier easing was given control points outside `[0, 1]` on
    /// the x axis, which would not describe a function of progress.
    #[error("cubic bezier x coordinates must be in [0, 1], got {x1} and {x2}")]
    InvalidCubicBezier {
        /// The x coordinate of the first control point.
        x1: Component,
        /// The x coordinate of the second control point.
        x2: Component,
    },
}

/// Result type for fallible operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
