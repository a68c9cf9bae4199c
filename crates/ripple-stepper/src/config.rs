//! Step parameters, validation, and the CFL stability bound.
//!
//! [`StepConfig`] is immutable once built. Construct it through
//! [`StepConfig::builder`], which validates every parameter, or take
//! [`StepConfig::default`].

use std::error::Error;
use std::fmt;

use ripple_core::{BoundaryMode, Stencil};

// ── ParamError ─────────────────────────────────────────────────────

/// Errors detected by [`StepConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// `sound_speed` is not finite and positive.
    InvalidSoundSpeed {
        /// The invalid value.
        value: f64,
    },
    /// `damping` is outside `(0, 1]`.
    InvalidDamping {
        /// The invalid value.
        value: f64,
    },
    /// `dt` is not finite and positive.
    InvalidTimeStep {
        /// The invalid value.
        value: f64,
    },
    /// `dx` or `dy` is not finite and positive.
    InvalidSpacing {
        /// `"dx"` or `"dy"`.
        axis: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// Source amplitude or frequency is not finite.
    InvalidSource {
        /// `"amplitude"` or `"frequency"`.
        param: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// `clip_magnitude` is set but not finite and positive.
    InvalidClip {
        /// The invalid value.
        value: f32,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSoundSpeed { value } => {
                write!(f, "sound_speed must be finite and > 0, got {value}")
            }
            Self::InvalidDamping { value } => {
                write!(f, "damping must be in (0, 1], got {value}")
            }
            Self::InvalidTimeStep { value } => {
                write!(f, "dt must be finite and > 0, got {value}")
            }
            Self::InvalidSpacing { axis, value } => {
                write!(f, "{axis} must be finite and > 0, got {value}")
            }
            Self::InvalidSource { param, value } => {
                write!(f, "source {param} must be finite, got {value}")
            }
            Self::InvalidClip { value } => {
                write!(f, "clip_magnitude must be finite and > 0, got {value}")
            }
        }
    }
}

impl Error for ParamError {}

// ── StepConfig ─────────────────────────────────────────────────────

/// Parameters for one FDTD step.
///
/// | Parameter | Default |
/// |-----------|---------|
/// | `sound_speed` | 0.5 |
/// | `damping` | 0.998 |
/// | `dt` | 0.2 |
/// | `dx`, `dy` | 1.0 |
/// | `source_amplitude` | 1.0 |
/// | `source_frequency` | 0.05 |
/// | `clip_magnitude` | `Some(100.0)` |
/// | `boundary` | [`BoundaryMode::Reflective`] |
/// | `stencil` | [`Stencil::Moore`] |
///
/// # Examples
///
/// ```
/// use ripple_core::{BoundaryMode, Stencil};
/// use ripple_stepper::StepConfig;
///
/// let config = StepConfig::builder()
///     .boundary(BoundaryMode::Fixed)
///     .stencil(Stencil::VonNeumann)
///     .clip_magnitude(None)
///     .build()
///     .unwrap();
/// assert!(config.is_stable());
/// assert!(StepConfig::builder().damping(1.5).build().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StepConfig {
    sound_speed: f64,
    damping: f64,
    dt: f64,
    dx: f64,
    dy: f64,
    source_amplitude: f64,
    source_frequency: f64,
    clip_magnitude: Option<f32>,
    boundary: BoundaryMode,
    stencil: Stencil,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            sound_speed: 0.5,
            damping: 0.998,
            dt: 0.2,
            dx: 1.0,
            dy: 1.0,
            source_amplitude: 1.0,
            source_frequency: 0.05,
            clip_magnitude: Some(100.0),
            boundary: BoundaryMode::Reflective,
            stencil: Stencil::Moore,
        }
    }
}

impl StepConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> StepConfigBuilder {
        StepConfigBuilder {
            config: Self::default(),
        }
    }

    /// Start a builder from this configuration.
    pub fn to_builder(&self) -> StepConfigBuilder {
        StepConfigBuilder {
            config: self.clone(),
        }
    }

    /// Wave propagation coefficient `c`.
    pub fn sound_speed(&self) -> f64 {
        self.sound_speed
    }

    /// Multiplicative decay applied to the whole field each step.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Time step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Grid spacing along x.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Grid spacing along y.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Peak value injected by each persistent source.
    pub fn source_amplitude(&self) -> f64 {
        self.source_amplitude
    }

    /// Source drive frequency, in cycles per unit of `time · dt`.
    pub fn source_frequency(&self) -> f64 {
        self.source_frequency
    }

    /// Field clamp bound, or `None` when clamping is disabled.
    pub fn clip_magnitude(&self) -> Option<f32> {
        self.clip_magnitude
    }

    /// Edge treatment.
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Laplacian stencil.
    pub fn stencil(&self) -> Stencil {
        self.stencil
    }

    /// Leapfrog coefficient `(c·dt)²`.
    pub fn coefficient(&self) -> f64 {
        let cdt = self.sound_speed * self.dt;
        cdt * cdt
    }

    /// Conventional Courant number `c·dt / min(dx, dy)`.
    pub fn courant_number(&self) -> f64 {
        self.sound_speed * self.dt / self.dx.min(self.dy)
    }

    /// Largest magnitude of the discrete Laplacian's spectrum.
    ///
    /// Von Neumann peaks at the checkerboard mode (`8 / (dx·dy)`), Moore
    /// at the single-axis Nyquist mode (`4 / (dx·dy)`).
    fn laplacian_spectral_radius(&self) -> f64 {
        let area = self.dx * self.dy;
        match self.stencil {
            Stencil::VonNeumann => 8.0 / area,
            Stencil::Moore => 4.0 / area,
        }
    }

    /// Largest `dt` for which the leapfrog scheme stays bounded:
    /// `(c·dt)² · ρ(∇²) ≤ 4`.
    ///
    /// For the von Neumann stencil with `dx = dy` this is the familiar
    /// `c·dt/dx ≤ 1/√2`.
    pub fn max_stable_dt(&self) -> f64 {
        2.0 / (self.sound_speed * self.laplacian_spectral_radius().sqrt())
    }

    /// Whether `dt` satisfies [`max_stable_dt`](Self::max_stable_dt).
    pub fn is_stable(&self) -> bool {
        // Small relative slack so the exact bound counts as stable.
        self.dt <= self.max_stable_dt() * (1.0 + 1e-12)
    }

    /// Check every parameter range without logging.
    ///
    /// Stability is not checked here; see [`is_stable`](Self::is_stable).
    pub fn validate(&self) -> Result<(), ParamError> {
        if !(self.sound_speed.is_finite() && self.sound_speed > 0.0) {
            return Err(ParamError::InvalidSoundSpeed {
                value: self.sound_speed,
            });
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ParamError::InvalidDamping {
                value: self.damping,
            });
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ParamError::InvalidTimeStep { value: self.dt });
        }
        for (axis, value) in [("dx", self.dx), ("dy", self.dy)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamError::InvalidSpacing { axis, value });
            }
        }
        if !self.source_amplitude.is_finite() {
            return Err(ParamError::InvalidSource {
                param: "amplitude",
                value: self.source_amplitude,
            });
        }
        if !self.source_frequency.is_finite() {
            return Err(ParamError::InvalidSource {
                param: "frequency",
                value: self.source_frequency,
            });
        }
        if let Some(clip) = self.clip_magnitude {
            if !(clip.is_finite() && clip > 0.0) {
                return Err(ParamError::InvalidClip { value: clip });
            }
        }
        Ok(())
    }
}

// ── StepConfigBuilder ──────────────────────────────────────────────

/// Builder for [`StepConfig`].
#[derive(Clone, Debug)]
pub struct StepConfigBuilder {
    config: StepConfig,
}

impl StepConfigBuilder {
    /// Set the wave coefficient (default: 0.5). Must be finite and > 0.
    pub fn sound_speed(mut self, c: f64) -> Self {
        self.config.sound_speed = c;
        self
    }

    /// Set the per-step damping factor (default: 0.998). Must be in `(0, 1]`.
    pub fn damping(mut self, damping: f64) -> Self {
        self.config.damping = damping;
        self
    }

    /// Set the time step (default: 0.2). Must be finite and > 0.
    pub fn dt(mut self, dt: f64) -> Self {
        self.config.dt = dt;
        self
    }

    /// Set the x spacing (default: 1.0). Must be finite and > 0.
    pub fn dx(mut self, dx: f64) -> Self {
        self.config.dx = dx;
        self
    }

    /// Set the y spacing (default: 1.0). Must be finite and > 0.
    pub fn dy(mut self, dy: f64) -> Self {
        self.config.dy = dy;
        self
    }

    /// Set both spacings at once.
    pub fn spacing(self, d: f64) -> Self {
        self.dx(d).dy(d)
    }

    /// Set the source amplitude (default: 1.0). Must be finite.
    pub fn source_amplitude(mut self, amplitude: f64) -> Self {
        self.config.source_amplitude = amplitude;
        self
    }

    /// Set the source frequency (default: 0.05). Must be finite.
    pub fn source_frequency(mut self, frequency: f64) -> Self {
        self.config.source_frequency = frequency;
        self
    }

    /// Set the clamp bound (default: `Some(100.0)`); `None` disables clamping.
    pub fn clip_magnitude(mut self, clip: Option<f32>) -> Self {
        self.config.clip_magnitude = clip;
        self
    }

    /// Set the boundary mode (default: reflective).
    pub fn boundary(mut self, boundary: BoundaryMode) -> Self {
        self.config.boundary = boundary;
        self
    }

    /// Set the Laplacian stencil (default: Moore).
    pub fn stencil(mut self, stencil: Stencil) -> Self {
        self.config.stencil = stencil;
        self
    }

    /// Validate and build.
    ///
    /// A configuration that violates the stability bound is still
    /// returned, with a `warn`-level log record.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if any parameter is non-finite or out of range.
    pub fn build(self) -> Result<StepConfig, ParamError> {
        let c = self.config;
        c.validate()?;

        if !c.is_stable() {
            tracing::warn!(
                sound_speed = c.sound_speed,
                dt = c.dt,
                max_stable_dt = c.max_stable_dt(),
                stencil = %c.stencil,
                "step configuration violates the CFL bound; the field will grow without limit"
            );
        }

        Ok(c)
    }
}
