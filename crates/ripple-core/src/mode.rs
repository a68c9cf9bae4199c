//! Boundary, stencil, and input modes.
//!
//! Every mode parses from its lowercase name via [`FromStr`]. Unknown
//! names return [`ModeError::InvalidMode`] rather than a default.

use std::fmt;
use std::str::FromStr;

use crate::error::ModeError;

/// Edge treatment applied to the next field after the interior update.
///
/// The Laplacian always wraps toroidally; `Fixed` and `Reflective`
/// overwrite the edge rows and columns afterwards.
///
/// # Examples
///
/// ```
/// use ripple_core::BoundaryMode;
///
/// let mode: BoundaryMode = "fixed".parse().unwrap();
/// assert_eq!(mode, BoundaryMode::Fixed);
/// assert!("sticky".parse::<BoundaryMode>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    /// No overwrite: the wrapped stencil makes the domain a torus.
    Periodic,
    /// Edges forced to exactly zero (clamped wall).
    Fixed,
    /// Edges copy their nearest interior neighbour (zero-gradient wall).
    #[default]
    Reflective,
}

impl BoundaryMode {
    /// All boundary modes.
    pub const ALL: [BoundaryMode; 3] = [Self::Periodic, Self::Fixed, Self::Reflective];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Periodic => "periodic",
            Self::Fixed => "fixed",
            Self::Reflective => "reflective",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "periodic" => Ok(Self::Periodic),
            "fixed" => Ok(Self::Fixed),
            "reflective" => Ok(Self::Reflective),
            _ => Err(ModeError::InvalidMode {
                kind: "boundary",
                value: s.to_string(),
            }),
        }
    }
}

/// Cardinal offsets: W, E, N, S.
const VON_NEUMANN: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cardinal then diagonal offsets: W, E, N, S, NW, NE, SW, SE.
const MOORE: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Discrete Laplacian stencil.
///
/// - `VonNeumann`: `(N + S + E + W - 4c) / (dx * dy)`
/// - `Moore`: `(4 cardinal + 4 diagonal - 8c) / (3 * dx * dy)`, more
///   isotropic wavefronts at the same cost per cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stencil {
    /// 5-point stencil over the 4-connected neighbourhood.
    VonNeumann,
    /// 9-point stencil over the 8-connected neighbourhood.
    #[default]
    Moore,
}

impl Stencil {
    /// Neighbour offsets `(dx, dy)` visited by this stencil.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::VonNeumann => &VON_NEUMANN,
            Self::Moore => &MOORE,
        }
    }

    /// Weight of the centre cell (equal to the neighbour count).
    pub fn center_weight(self) -> f32 {
        self.offsets().len() as f32
    }

    /// Scale factor applied to the raw neighbour sum for spacing `dx`, `dy`.
    pub fn normalization(self, dx: f64, dy: f64) -> f64 {
        match self {
            Self::VonNeumann => 1.0 / (dx * dy),
            Self::Moore => 1.0 / (3.0 * dx * dy),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VonNeumann => "von-neumann",
            Self::Moore => "moore",
        }
    }
}

impl fmt::Display for Stencil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stencil {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "von-neumann" | "vonneumann" | "4" => Ok(Self::VonNeumann),
            "moore" | "8" => Ok(Self::Moore),
            _ => Err(ModeError::InvalidMode {
                kind: "stencil",
                value: s.to_string(),
            }),
        }
    }
}

/// What a user tap on the grid does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// One-off pressure impulse.
    #[default]
    Pulse,
    /// Add a persistent sinusoidal source.
    Source,
    /// Remove the nearest persistent source within the removal radius.
    Remove,
}

impl InputMode {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pulse => "pulse",
            Self::Source => "source",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pulse" | "clap" => Ok(Self::Pulse),
            "source" | "consistent" => Ok(Self::Source),
            "remove" => Ok(Self::Remove),
            _ => Err(ModeError::InvalidMode {
                kind: "input",
                value: s.to_string(),
            }),
        }
    }
}
