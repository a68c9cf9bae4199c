//! The single-step leapfrog update.

use std::f64::consts::PI;

use ripple_grid::{Grid, StepFrame};

use crate::boundary::apply_boundary;
use crate::config::StepConfig;
use crate::laplacian::laplacian_into;
use crate::sanitize::{sanitize, SanitizeStats};

/// Value every persistent source injects at `time`:
/// `amplitude · sin(2π · frequency · time · dt)`.
///
/// Computed once per step and shared by all sources.
pub fn source_value(config: &StepConfig, time: f64) -> f32 {
    let phase = 2.0 * PI * config.source_frequency() * time * config.dt();
    (config.source_amplitude() * phase.sin()) as f32
}

/// Advance `grid` by one step.
///
/// `time` is the caller's step index; it only sets the phase of the
/// persistent sources. After the call `prev_pressure` holds the field
/// from before the call and `pressure` holds the new field.
///
/// # Examples
///
/// ```
/// use ripple_core::{BoundaryMode, Stencil};
/// use ripple_grid::Grid;
/// use ripple_stepper::{advance, StepConfig};
///
/// let config = StepConfig::builder()
///     .boundary(BoundaryMode::Fixed)
///     .stencil(Stencil::VonNeumann)
///     .damping(1.0)
///     .clip_magnitude(None)
///     .build()
///     .unwrap();
///
/// let mut grid = Grid::new(5, 5).unwrap();
/// grid.apply_impulse(2, 2, 5.0);
/// advance(&mut grid, &config, 0.0);
///
/// // 2·5 − 0 + (0.5·0.2)² · (−4·5)
/// let centre = grid.pressure_at(2, 2).unwrap();
/// assert!((centre - 9.8).abs() < 1e-5);
/// assert_eq!(grid.prev_pressure()[12], 5.0);
/// ```
pub fn advance(grid: &mut Grid, config: &StepConfig, time: f64) -> SanitizeStats {
    let stats = grid.advance_with(|frame| step_frame(frame, config, time));
    if stats.is_clean() {
        tracing::trace!(time, "advanced");
    } else {
        tracing::debug!(
            time,
            nonfinite = stats.nonfinite,
            clamped = stats.clamped,
            "sanitised diverging field"
        );
    }
    stats
}

/// Fill the frame's staging buffer with the next field.
///
/// Reads only the frozen `current` and `previous` fields, so every cell
/// is computed from the pre-step snapshot.
pub fn step_frame(frame: &mut StepFrame<'_>, config: &StepConfig, time: f64) -> SanitizeStats {
    let width = frame.width();
    let height = frame.height();
    let current = frame.current();
    let previous = frame.previous();
    let sources = frame.source_indices();
    let has_sources = frame.source_count() > 0;
    let next = frame.staging_mut();

    // 1. Laplacian of the current field, staged in `next`.
    laplacian_into(
        current,
        width,
        height,
        config.stencil(),
        config.dx(),
        config.dy(),
        next,
    );

    // 2. Leapfrog: next = 2p − p_prev + (c·dt)²·∇²p
    let coeff = config.coefficient() as f32;
    for ((n, &p), &pp) in next.iter_mut().zip(current).zip(previous) {
        *n = 2.0 * p - pp + coeff * *n;
    }

    // 3. Persistent sources share one phase value.
    if has_sources && config.source_amplitude() != 0.0 {
        let s = source_value(config, time);
        for i in sources {
            next[i] += s;
        }
    }

    // 4. Damping.
    if config.damping() != 1.0 {
        let damping = config.damping() as f32;
        for n in next.iter_mut() {
            *n *= damping;
        }
    }

    // 5. Boundary.
    apply_boundary(next, width, height, config.boundary());

    // 6. Numerical safety.
    sanitize(next, config.clip_magnitude())
}
