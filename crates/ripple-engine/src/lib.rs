//! Input-driven simulation loop for the Ripple wave simulator.
//!
//! [`Simulation`] ties a [`Grid`](ripple_grid::Grid), a
//! [`StepConfig`](ripple_stepper::StepConfig) and a bounded input queue
//! into the loop a front end drives: submit taps, call
//! [`step_sync()`](Simulation::step_sync) once per frame, render the
//! returned grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod hash;
pub mod ingress;
pub mod metrics;
pub mod simulation;

pub use config::{ConfigError, SimulationConfig};
pub use hash::field_hash;
pub use ingress::InputQueue;
pub use metrics::StepMetrics;
pub use simulation::{Simulation, StepResult};
