//! Single-threaded simulation loop.
//!
//! [`Simulation`] owns the grid, the step parameters and the input queue.
//! Each call to [`step_sync()`](Simulation::step_sync) applies the queued
//! taps in arrival order, advances the field once, and returns a borrow
//! of the resulting grid.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`] but every mutating method takes `&mut self`,
//! and [`StepResult`] borrows from `self`. A renderer therefore cannot
//! hold a view of the field across the next step, and can never see the
//! buffers mid-rotation.

use std::time::Instant;

use ripple_core::{
    IngressError, InputEvent, InputMode, InputOutcome, InputReceipt, StepId,
};
use ripple_grid::Grid;
use ripple_stepper::{advance, StepConfig};

use crate::config::{ConfigError, SimulationConfig};
use crate::hash;
use crate::ingress::InputQueue;
use crate::metrics::StepMetrics;

// Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a [`Simulation::step_sync()`] call.
#[derive(Debug)]
pub struct StepResult<'s> {
    /// Read-only view of the grid after this step.
    pub grid: &'s Grid,
    /// One receipt per event applied this step, in application order.
    ///
    /// Does **not** include events rejected at submission; those are
    /// returned in [`rejected`](Self::rejected).
    pub receipts: Vec<InputReceipt>,
    /// Events dropped because the queue was full.
    pub rejected: Vec<InputEvent>,
    /// Metrics for this step.
    pub metrics: StepMetrics,
}

// ── Simulation ──────────────────────────────────────────────────

/// Interactive wave simulation driven by discrete steps.
///
/// # Example
///
/// ```
/// use ripple_core::InputEvent;
/// use ripple_engine::{Simulation, SimulationConfig};
///
/// let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
/// let result = sim.step_sync(vec![InputEvent::pulse(50, 50)]);
/// assert!(result.receipts[0].outcome.changed_state());
/// assert!(result.metrics.peak_pressure > 0.0);
/// assert_eq!(sim.current_step().0, 1);
/// ```
pub struct Simulation {
    grid: Grid,
    params: StepConfig,
    queue: InputQueue,
    step: StepId,
    impulse_amplitude: f32,
    removal_radius: f64,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Create a new simulation from a [`SimulationConfig`].
    ///
    /// Validates the configuration and allocates a zeroed grid.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        tracing::debug!(
            width = config.width,
            height = config.height,
            boundary = %config.params.boundary(),
            stencil = %config.params.stencil(),
            "simulation created"
        );
        Ok(Self {
            grid,
            params: config.params,
            queue: InputQueue::new(config.max_input_queue),
            step: StepId::default(),
            impulse_amplitude: config.impulse_amplitude,
            removal_radius: config.removal_radius,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Queue an event for the next step.
    pub fn submit(&mut self, event: InputEvent) -> Result<(), IngressError> {
        let result = self.queue.submit(event);
        if result.is_err() {
            tracing::debug!(
                x = event.x,
                y = event.y,
                mode = %event.mode,
                capacity = self.queue.capacity(),
                "input rejected: queue full"
            );
        }
        result
    }

    /// Apply a tap immediately, bypassing the queue.
    ///
    /// `Pulse` adds the configured impulse amplitude at `(x, y)`,
    /// `Source` registers a persistent source, and `Remove` drops the
    /// nearest source within the removal radius. Off-grid taps are
    /// ignored and reported as [`InputOutcome::OutOfBounds`].
    pub fn handle_input(&mut self, x: i32, y: i32, mode: InputMode) -> InputReceipt {
        let event = InputEvent::new(x, y, mode);
        InputReceipt {
            event,
            applied_step: self.step,
            outcome: self.apply(event),
        }
    }

    fn apply(&mut self, event: InputEvent) -> InputOutcome {
        let InputEvent { x, y, mode } = event;
        if !self.grid.contains(x, y) {
            return InputOutcome::OutOfBounds;
        }
        match mode {
            InputMode::Pulse => {
                self.grid.apply_impulse(x, y, self.impulse_amplitude);
                InputOutcome::ImpulseApplied
            }
            InputMode::Source => {
                if self.grid.add_source(x, y) {
                    InputOutcome::SourceAdded
                } else {
                    InputOutcome::SourceAlreadyPresent
                }
            }
            InputMode::Remove => match self.grid.remove_nearest_source(x, y, self.removal_radius)
            {
                Some(cell) => InputOutcome::SourceRemoved(cell),
                None => InputOutcome::NoSourceInRange,
            },
        }
    }

    /// Execute one step synchronously.
    ///
    /// Queues `events`, applies everything pending in arrival order,
    /// then advances the field once with `time` equal to the step
    /// counter before the call. The returned [`StepResult`] borrows
    /// `self`, so the next step cannot start while it is alive.
    pub fn step_sync(&mut self, events: Vec<InputEvent>) -> StepResult<'_> {
        let start = Instant::now();

        let mut rejected = Vec::new();
        for event in events {
            if self.submit(event).is_err() {
                rejected.push(event);
            }
        }

        // 1. Inputs.
        let input_start = Instant::now();
        let pending: Vec<InputEvent> = self.queue.drain().collect();
        let mut receipts = Vec::with_capacity(pending.len());
        let mut metrics = StepMetrics {
            inputs_rejected: rejected.len() as u32,
            ..StepMetrics::default()
        };
        for event in pending {
            let outcome = self.apply(event);
            if outcome.changed_state() {
                metrics.inputs_applied += 1;
            } else {
                metrics.inputs_ignored += 1;
            }
            receipts.push(InputReceipt {
                event,
                applied_step: self.step,
                outcome,
            });
        }
        metrics.input_us = input_start.elapsed().as_micros() as u64;

        // 2. Advance.
        let advance_start = Instant::now();
        metrics.source_count = self.grid.source_count() as u32;
        let stats = advance(&mut self.grid, &self.params, self.step.as_time());
        metrics.advance_us = advance_start.elapsed().as_micros() as u64;
        metrics.nonfinite_cells = stats.nonfinite as u32;
        metrics.clamped_cells = stats.clamped as u32;

        self.step = self.step.next();
        metrics.record_field(self.grid.pressure());
        metrics.total_us = start.elapsed().as_micros() as u64;

        tracing::trace!(
            step = self.step.0,
            applied = metrics.inputs_applied,
            peak = metrics.peak_pressure,
            total_us = metrics.total_us,
            "step complete"
        );

        self.last_metrics = metrics.clone();
        StepResult {
            grid: &self.grid,
            receipts,
            rejected,
            metrics,
        }
    }

    /// Return to step 0: zero the field, drop every source and every
    /// pending event. Parameters are kept.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.queue.clear();
        self.step = StepId::default();
        self.last_metrics = StepMetrics::default();
    }

    /// Number of completed steps (0 after construction or reset).
    pub fn current_step(&self) -> StepId {
        self.step
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current step parameters.
    pub fn params(&self) -> &StepConfig {
        &self.params
    }

    /// Replace the step parameters. Takes effect on the next step.
    ///
    /// Grid state and sources are kept, so the field continues
    /// under the new boundary mode or stencil.
    pub fn set_params(&mut self, params: StepConfig) {
        self.params = params;
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Number of events waiting for the next step.
    pub fn pending_inputs(&self) -> usize {
        self.queue.len()
    }

    /// FNV-1a hash over the step counter, both fields and the sources.
    ///
    /// Equal hashes from two runs mean bit-identical state.
    pub fn state_hash(&self) -> u64 {
        hash::state_hash(
            self.step.0,
            self.grid.pressure(),
            self.grid.prev_pressure(),
            self.grid.sources(),
        )
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("current_step", &self.step)
            .field("sources", &self.grid.source_count())
            .field("pending_inputs", &self.queue.len())
            .finish()
    }
}
