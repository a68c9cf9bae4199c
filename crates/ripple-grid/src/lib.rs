//! Grid state for the Ripple acoustic wave simulator.
//!
//! [`Grid`] owns the current and previous pressure fields, a staging
//! buffer for the next field, and the registry of persistent sources.
//! Input operations (impulse, add source, remove nearest source) mutate
//! it directly; the stepper replaces the fields through
//! [`Grid::advance_with`], which hands out a [`StepFrame`] and rotates
//! the buffers once the frame is done.
//!
//! # Layout
//!
//! Fields are flat `f32` buffers in row-major order: cell `(x, y)` lives
//! at index `y * width + x`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod frame;
pub mod grid;
pub mod topology;

pub use frame::StepFrame;
pub use grid::{Grid, DEFAULT_IMPULSE_AMPLITUDE, DEFAULT_REMOVAL_RADIUS, MIN_DIM};
