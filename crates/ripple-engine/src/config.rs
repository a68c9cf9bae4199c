//! Simulation configuration and validation.
//!
//! [`SimulationConfig`] is the single source of truth for constructing a
//! [`Simulation`](crate::Simulation). [`validate()`](SimulationConfig::validate)
//! checks every invariant before the grid is allocated.

use std::error::Error;
use std::fmt;

use ripple_core::GridError;
use ripple_grid::{DEFAULT_IMPULSE_AMPLITUDE, DEFAULT_REMOVAL_RADIUS, MIN_DIM};
use ripple_stepper::{ParamError, StepConfig};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Grid(GridError),
    /// Step parameters are invalid.
    Params(ParamError),
    /// Input queue capacity is zero.
    InputQueueZero,
    /// `impulse_amplitude` is not finite.
    InvalidImpulse {
        /// The invalid value.
        value: f32,
    },
    /// `removal_radius` is negative or not finite.
    InvalidRadius {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Params(e) => write!(f, "params: {e}"),
            Self::InputQueueZero => write!(f, "max_input_queue must be at least 1"),
            Self::InvalidImpulse { value } => {
                write!(f, "impulse_amplitude must be finite, got {value}")
            }
            Self::InvalidRadius { value } => {
                write!(f, "removal_radius must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Params(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
        Self::Params(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for constructing a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Grid width in cells. Default: 100.
    pub width: u32,
    /// Grid height in cells. Default: 100.
    pub height: u32,
    /// Step parameters.
    pub params: StepConfig,
    /// Maximum events buffered between steps. Default: 1024.
    pub max_input_queue: usize,
    /// Amplitude added by a pulse tap. Default: 5.0.
    pub impulse_amplitude: f32,
    /// Search radius for removal taps, in cells. Default: 2.0.
    pub removal_radius: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            params: StepConfig::default(),
            max_input_queue: 1024,
            impulse_amplitude: DEFAULT_IMPULSE_AMPLITUDE,
            removal_radius: DEFAULT_REMOVAL_RADIUS,
        }
    }
}

impl SimulationConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid needs an interior cell and must be indexable with i32.
        let max = i32::MAX as u32;
        let dims_ok = (MIN_DIM..=max).contains(&self.width)
            && (MIN_DIM..=max).contains(&self.height)
            && (self.width as usize)
                .checked_mul(self.height as usize)
                .is_some();
        if !dims_ok {
            return Err(GridError::InvalidDimension {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        // 2. Step parameters.
        self.params.validate()?;
        // 3. Queue >= 1.
        if self.max_input_queue == 0 {
            return Err(ConfigError::InputQueueZero);
        }
        // 4. Input tuning.
        if !self.impulse_amplitude.is_finite() {
            return Err(ConfigError::InvalidImpulse {
                value: self.impulse_amplitude,
            });
        }
        if !(self.removal_radius.is_finite() && self.removal_radius >= 0.0) {
            return Err(ConfigError::InvalidRadius {
                value: self.removal_radius,
            });
        }
        Ok(())
    }
}
