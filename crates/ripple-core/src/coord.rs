//! Grid cell coordinates and step identifiers.

use std::fmt;

/// Identifies a simulated step.
///
/// `StepId(n)` is the number of completed `advance` calls. It doubles as
/// the `time` argument that sets the phase of persistent sources, so the
/// core never depends on a wall clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The step after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The step index as the floating-point `time` value fed to the stepper.
    pub fn as_time(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A cell coordinate on the simulation grid.
///
/// `x` indexes columns in `[0, width)` and `y` indexes rows in
/// `[0, height)`. Coordinates are signed because they usually come from
/// screen-to-grid mapping, which can land outside the grid.
///
/// # Examples
///
/// ```
/// use ripple_core::Cell;
///
/// let a = Cell::new(0, 0);
/// let b = Cell::new(3, 4);
/// assert_eq!(a.distance_to(b.x, b.y), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from this cell to `(x, y)`.
    pub fn distance_to(&self, x: i32, y: i32) -> f64 {
        let dx = f64::from(self.x) - f64::from(x);
        let dy = f64::from(self.y) - f64::from(y);
        dx.hypot(dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
