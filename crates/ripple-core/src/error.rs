//! Error types for the Ripple simulator, organized by subsystem.
//!
//! Numerical divergence is deliberately absent: NaN and infinite values
//! are corrected in place by the stepper and never surface as errors.

use std::error::Error;
use std::fmt;

/// Errors from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A dimension is below the 3×3 minimum needed by the stencil
    /// and boundary mirroring, or too large to index with `i32`.
    InvalidDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// An initial field buffer does not hold `width * height` cells.
    ShapeMismatch {
        /// Expected cell count.
        expected: usize,
        /// Provided cell count.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(
                    f,
                    "invalid grid {width}x{height}: each side must be in 3..=i32::MAX"
                )
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "field has {actual} cells, expected {expected}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from parsing a mode name.
///
/// Unknown names fail loudly instead of falling back to a default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModeError {
    /// The string does not name a known mode.
    InvalidMode {
        /// Which mode family was being parsed (`"boundary"`, `"stencil"`, `"input"`).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMode { kind, value } => write!(f, "unknown {kind} mode '{value}'"),
        }
    }
}

impl Error for ModeError {}

/// Errors from the input event queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IngressError {
    /// The input queue is at capacity.
    QueueFull,
}

impl fmt::Display for IngressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull => write!(f, "input queue full"),
        }
    }
}

impl Error for IngressError {}
