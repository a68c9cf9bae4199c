//! Canned grids and step configurations.
//!
//! - [`scenario_config`] / [`scenario_grid`]: the 5×5 hand-checked case
//!   (`(2,2)` goes from 5 to 9.8 in one step).
//! - [`exact_config`]: no damping, no clamping, so a step is the bare
//!   leapfrog update.
//! - [`adversarial_grid`]: prior state full of NaN, ±∞ and huge values.

use ripple_core::{BoundaryMode, Stencil};
use ripple_grid::Grid;
use ripple_stepper::StepConfig;

/// Von Neumann, fixed walls, `c = 0.5`, `dt = 0.2`, no damping, no clip.
pub fn scenario_config() -> StepConfig {
    exact_config(BoundaryMode::Fixed, Stencil::VonNeumann)
}

/// 5×5 grid with a single impulse of 5 at the centre.
pub fn scenario_grid() -> Grid {
    impulse_grid(5, 5, 5.0)
}

/// Default `c` and `dt` with damping and clamping turned off.
pub fn exact_config(boundary: BoundaryMode, stencil: Stencil) -> StepConfig {
    StepConfig::builder()
        .boundary(boundary)
        .stencil(stencil)
        .damping(1.0)
        .clip_magnitude(None)
        .build()
        .expect("fixture config is valid")
}

/// `width × height` grid with one impulse of `amplitude` at the centre
/// cell `(width / 2, height / 2)`.
pub fn impulse_grid(width: u32, height: u32, amplitude: f32) -> Grid {
    let mut grid = Grid::new(width, height).expect("fixture dimensions are valid");
    grid.apply_impulse((width / 2) as i32, (height / 2) as i32, amplitude);
    grid
}

/// Grid whose current and previous fields cycle through NaN, ±∞ and
/// values far past any sensible clip.
pub fn adversarial_grid(width: u32, height: u32) -> Grid {
    const POISON: [f32; 6] = [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1e30, -1e30, 7.0];
    let n = (width * height) as usize;
    let pressure: Vec<f32> = (0..n).map(|i| POISON[i % POISON.len()]).collect();
    let prev: Vec<f32> = (0..n).map(|i| POISON[(i + 3) % POISON.len()]).collect();
    Grid::from_fields(width, height, pressure, prev).expect("fixture shape is valid")
}
