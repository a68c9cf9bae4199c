//! Per-step metrics for the simulation loop.
//!
//! [`StepMetrics`] captures timing, input and field statistics for a
//! single step, for telemetry or a debug overlay.

/// Timing and field metrics collected during a single step.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Time spent applying queued input events, in microseconds.
    pub input_us: u64,
    /// Time spent in the stepper, in microseconds.
    pub advance_us: u64,
    /// Events that changed grid state this step.
    pub inputs_applied: u32,
    /// Events that were drained but changed nothing (off-grid taps,
    /// duplicate sources, removals with nothing in range).
    pub inputs_ignored: u32,
    /// Events rejected at submission because the queue was full.
    pub inputs_rejected: u32,
    /// Cells that held NaN or ±∞ before sanitising.
    pub nonfinite_cells: u32,
    /// Finite cells pulled back to the clip bound.
    pub clamped_cells: u32,
    /// Largest `|p|` after the step.
    pub peak_pressure: f32,
    /// Sum of `p²` over the field after the step.
    pub energy: f64,
    /// Persistent sources active during the step.
    pub source_count: u32,
}

impl StepMetrics {
    /// Fill in the field statistics from `pressure`.
    pub(crate) fn record_field(&mut self, pressure: &[f32]) {
        let mut peak = 0.0f32;
        let mut energy = 0.0f64;
        for &v in pressure {
            peak = peak.max(v.abs());
            energy += f64::from(v) * f64::from(v);
        }
        self.peak_pressure = peak;
        self.energy = energy;
    }
}
