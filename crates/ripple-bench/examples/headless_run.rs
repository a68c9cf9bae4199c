//! Headless reference run.
//!
//! Demonstrates: build the reference profile → step 1000 times → print
//! field statistics → switch to the legacy unstable parameters → watch the
//! clip hold the field.
//!
//! Set `RUST_LOG=ripple_stepper=debug` to see sanitiser activity.

use ripple_bench::reference_profile;
use ripple_core::{InputEvent, Stencil};
use ripple_stepper::StepConfig;
use tracing_subscriber::EnvFilter;

const STEPS: u64 = 1000;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("=== Ripple Headless Run ===\n");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let mut sim = reference_profile(seed).unwrap();
    let sources: Vec<_> = sim.grid().sources().collect();
    tracing::info!(seed, ?sources, "reference profile ready");

    // --- Phase 1: stable parameters ---
    println!("Phase 1: {STEPS} steps, periodic, c=0.5, dt=0.2");
    let mut total_us = 0u64;
    for step in 0..STEPS {
        let events = if step == 200 {
            vec![InputEvent::pulse(50, 50)]
        } else {
            vec![]
        };
        let result = sim.step_sync(events);
        total_us += result.metrics.total_us;

        if step % 200 == 0 || step == STEPS - 1 {
            println!(
                "  step {:>4}: peak={:>8.4}, energy={:>10.4}, clamped={:>4}, time={:>6}μs",
                step + 1,
                result.metrics.peak_pressure,
                result.metrics.energy,
                result.metrics.clamped_cells,
                result.metrics.total_us,
            );
        }
    }
    println!(
        "  mean step time: {:.1}μs, state hash {:016x}\n",
        total_us as f64 / STEPS as f64,
        sim.state_hash()
    );

    // --- Phase 2: legacy realtime parameters ---
    println!("Phase 2: 200 steps, c=1.7, dt=1 (past the CFL bound)");
    let unstable = sim
        .params()
        .to_builder()
        .sound_speed(1.7)
        .dt(1.0)
        .stencil(Stencil::VonNeumann)
        .build()
        .unwrap();
    println!(
        "  max stable dt = {:.4}, dt = {:.4}",
        unstable.max_stable_dt(),
        unstable.dt()
    );
    sim.set_params(unstable);
    for step in 0..200 {
        let result = sim.step_sync(vec![]);
        if step % 50 == 0 || step == 199 {
            println!(
                "  step {:>4}: peak={:>8.4}, clamped={:>5}",
                step + 1,
                result.metrics.peak_pressure,
                result.metrics.clamped_cells,
            );
        }
    }

    // --- Reset ---
    sim.reset();
    sim.set_params(StepConfig::default());
    println!(
        "\nAfter reset: step={}, sources={}",
        sim.current_step(),
        sim.grid().source_count()
    );
    println!("\n=== Done ===");
}
