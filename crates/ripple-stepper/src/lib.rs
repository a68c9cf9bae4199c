//! Explicit FDTD time stepping for the Ripple wave simulator.
//!
//! [`advance`] moves a [`Grid`](ripple_grid::Grid) forward by one step of
//! the 2D scalar wave equation using leapfrog (central difference)
//! integration:
//!
//! ```text
//! next = 2·p − p_prev + (c·dt)² · ∇²p
//! next[source] += A · sin(2π · f · time · dt)
//! next *= damping
//! apply boundary, replace NaN/∞, clamp
//! p_prev ← p,  p ← next
//! ```
//!
//! Every cell of `next` is computed from the frozen pre-step fields, so
//! the update order inside a step never affects the result.
//!
//! # Stability
//!
//! The scheme is explicit and only conditionally stable. With the
//! von Neumann stencil and `dx = dy` it needs `c·dt/dx ≤ 1/√2`; see
//! [`StepConfig::max_stable_dt`]. Unstable configurations are accepted
//! (with a logged warning); clamping bounds the field but does not
//! restore accuracy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advance;
pub mod boundary;
pub mod config;
pub mod laplacian;
pub mod sanitize;

pub use advance::{advance, source_value, step_frame};
pub use boundary::apply_boundary;
pub use config::{ParamError, StepConfig, StepConfigBuilder};
pub use laplacian::{laplacian_at, laplacian_into};
pub use sanitize::{sanitize, SanitizeStats};
