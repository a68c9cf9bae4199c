//! Core types for the Ripple acoustic wave simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid, stepper, and engine crates:
//! cell coordinates, step identifiers, boundary/stencil/input modes,
//! input events with their receipts, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod input;
pub mod mode;

pub use coord::{Cell, StepId};
pub use error::{GridError, IngressError, ModeError};
pub use input::{InputEvent, InputOutcome, InputReceipt};
pub use mode::{BoundaryMode, InputMode, Stencil};
