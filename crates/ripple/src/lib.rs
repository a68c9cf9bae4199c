//! Ripple: an interactive 2D acoustic wave simulation core.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Ripple sub-crates. For most users, adding `ripple` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! let params = StepConfig::builder()
//!     .boundary(BoundaryMode::Periodic)
//!     .clip_magnitude(Some(50.0))
//!     .build()
//!     .unwrap();
//! let mut sim = Simulation::new(SimulationConfig {
//!     width: 64,
//!     height: 48,
//!     params,
//!     ..SimulationConfig::default()
//! })
//! .unwrap();
//!
//! // A clap in the middle and a humming source in the corner.
//! let mode: InputMode = "clap".parse().unwrap();
//! sim.submit(InputEvent::new(32, 24, mode)).unwrap();
//! sim.submit(InputEvent::source(5, 5)).unwrap();
//!
//! for _ in 0..10 {
//!     let result = sim.step_sync(vec![]);
//!     assert!(result.metrics.peak_pressure <= 50.0);
//! }
//! assert_eq!(sim.current_step(), StepId(10));
//! assert_eq!(sim.grid().source_count(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Coordinates, modes, input events, errors |
//! | [`grid`] | `ripple-grid` | Pressure fields, source registry, buffer rotation |
//! | [`stepper`] | `ripple-stepper` | Step parameters and the leapfrog update |
//! | [`engine`] | `ripple-engine` | Input queue and the simulation loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`ripple-core`).
///
/// Contains [`types::Cell`], [`types::StepId`], the mode enums and the
/// input event and receipt types.
pub use ripple_core as types;

/// Grid state (`ripple-grid`).
///
/// [`grid::Grid`] owns the current, previous and staging fields plus the
/// persistent source set.
pub use ripple_grid as grid;

/// Time stepping (`ripple-stepper`).
///
/// [`stepper::advance`] performs one step; [`stepper::StepConfig`] holds
/// the parameters and the stability bound.
pub use ripple_stepper as stepper;

/// Simulation loop (`ripple-engine`).
///
/// [`engine::Simulation`] queues input and steps the grid.
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ripple_core::{
        BoundaryMode, Cell, InputEvent, InputMode, InputOutcome, InputReceipt, StepId, Stencil,
    };

    // Errors
    pub use ripple_core::{GridError, IngressError, ModeError};
    pub use ripple_engine::ConfigError;
    pub use ripple_stepper::ParamError;

    // Grid and stepping
    pub use ripple_grid::Grid;
    pub use ripple_stepper::{advance, StepConfig};

    // Engine
    pub use ripple_engine::{Simulation, SimulationConfig, StepMetrics, StepResult};
}
