//! Benchmark profiles and utilities for the Ripple wave simulator.
//!
//! Provides pre-built simulations for benchmarking and examples:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), periodic, clip 50,
//!   two seeded sources
//! - [`stress_profile`]: 316x316 grid (~100K cells) for stress testing
//! - [`seed_sources`]: deterministic source placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ripple_core::{BoundaryMode, Cell, InputMode, InputOutcome};
use ripple_engine::{ConfigError, Simulation, SimulationConfig};
use ripple_stepper::StepConfig;

/// Configuration of the reference run: 100x100, periodic walls,
/// `c = 0.5`, `dt = 0.2`, damping 0.998, clip 50.
///
/// `c·dt/dx = 0.1`, well inside the stability bound.
pub fn reference_config() -> SimulationConfig {
    SimulationConfig {
        width: 100,
        height: 100,
        params: periodic_params(),
        ..SimulationConfig::default()
    }
}

/// Same parameters as [`reference_config`] on a 316x316 grid.
pub fn stress_config() -> SimulationConfig {
    SimulationConfig {
        width: 316,
        height: 316,
        params: periodic_params(),
        ..SimulationConfig::default()
    }
}

fn periodic_params() -> StepConfig {
    StepConfig::default()
        .to_builder()
        .boundary(BoundaryMode::Periodic)
        .clip_magnitude(Some(50.0))
        .build()
        .expect("reference parameters are valid")
}

/// Build the reference simulation with two sources placed from `seed`.
pub fn reference_profile(seed: u64) -> Result<Simulation, ConfigError> {
    let mut sim = Simulation::new(reference_config())?;
    seed_sources(&mut sim, 2, seed);
    Ok(sim)
}

/// Build the stress simulation with eight sources placed from `seed`.
pub fn stress_profile(seed: u64) -> Result<Simulation, ConfigError> {
    let mut sim = Simulation::new(stress_config())?;
    seed_sources(&mut sim, 8, seed);
    Ok(sim)
}

/// Place up to `n` distinct persistent sources at uniformly random cells.
///
/// The same `seed` always yields the same cells. Returns the cells that
/// were added, in placement order.
pub fn seed_sources(sim: &mut Simulation, n: usize, seed: u64) -> Vec<Cell> {
    let width = sim.grid().width() as i32;
    let height = sim.grid().height() as i32;
    let free = sim.grid().cell_count() - sim.grid().source_count();
    let target = n.min(free);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut placed = Vec::with_capacity(target);
    while placed.len() < target {
        let x = rng.gen_range(0..width);
        let y = rng.gen_range(0..height);
        if sim.handle_input(x, y, InputMode::Source).outcome == InputOutcome::SourceAdded {
            placed.push(Cell::new(x, y));
        }
    }
    placed
}
