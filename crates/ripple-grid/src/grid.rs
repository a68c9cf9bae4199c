//! The simulation grid: pressure buffers plus persistent sources.

use indexmap::IndexSet;
use ripple_core::{Cell, GridError};

use crate::frame::StepFrame;
use crate::topology::checked_index;

/// Smallest allowed side length. The stencil and the reflective
/// boundary both need at least one interior cell.
pub const MIN_DIM: u32 = 3;

/// Impulse added by a pulse tap when the caller does not choose one.
pub const DEFAULT_IMPULSE_AMPLITUDE: f32 = 5.0;

/// Radius searched by a remove tap when the caller does not choose one.
pub const DEFAULT_REMOVAL_RADIUS: f64 = 2.0;

/// Pressure field state and persistent source registry.
///
/// Holds three same-shape buffers:
///
/// ```text
/// pressure:  the current field (what readers see)
/// prev:      the field before the most recent advance
/// staging:   scratch the stepper writes the next field into
/// ```
///
/// [`advance_with`](Grid::advance_with) rotates them after each step
/// (`prev ← pressure`, `pressure ← staging`, `staging ← old prev`) with
/// two pointer swaps, so a step never allocates or copies a field.
///
/// Dimensions are fixed at construction.
///
/// # Examples
///
/// ```
/// use ripple_grid::Grid;
///
/// let mut grid = Grid::new(5, 5).unwrap();
/// assert!(grid.apply_impulse(2, 2, 5.0));
/// assert_eq!(grid.pressure_at(2, 2), Some(5.0));
///
/// // Taps that miss the grid are ignored.
/// assert!(!grid.apply_impulse(-1, 2, 5.0));
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    pressure: Vec<f32>,
    prev_pressure: Vec<f32>,
    staging: Vec<f32>,
    sources: IndexSet<Cell>,
}

impl Grid {
    /// Create a `width × height` grid with zeroed fields and no sources.
    ///
    /// Returns `Err(GridError::InvalidDimension)` if either side is below
    /// [`MIN_DIM`] or above `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let n = Self::checked_cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            pressure: vec![0.0; n],
            prev_pressure: vec![0.0; n],
            staging: vec![0.0; n],
            sources: IndexSet::new(),
        })
    }

    /// Create a grid from explicit initial fields.
    ///
    /// Both buffers must be row-major with `width * height` cells.
    pub fn from_fields(
        width: u32,
        height: u32,
        pressure: Vec<f32>,
        prev_pressure: Vec<f32>,
    ) -> Result<Self, GridError> {
        let n = Self::checked_cell_count(width, height)?;
        for buf in [&pressure, &prev_pressure] {
            if buf.len() != n {
                return Err(GridError::ShapeMismatch {
                    expected: n,
                    actual: buf.len(),
                });
            }
        }
        Ok(Self {
            width,
            height,
            pressure,
            prev_pressure,
            staging: vec![0.0; n],
            sources: IndexSet::new(),
        })
    }

    fn checked_cell_count(width: u32, height: u32) -> Result<usize, GridError> {
        let max = i32::MAX as u32;
        if width < MIN_DIM || height < MIN_DIM || width > max || height > max {
            return Err(GridError::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::InvalidDimension { width, height })
    }

    /// Grid width (columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.pressure.len()
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        checked_index(x, y, self.width, self.height).is_some()
    }

    /// Flat index of `(x, y)`, or `None` outside the grid.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        checked_index(x, y, self.width, self.height)
    }

    /// The current pressure field, row-major.
    pub fn pressure(&self) -> &[f32] {
        &self.pressure
    }

    /// The field as it was before the most recent advance.
    pub fn prev_pressure(&self) -> &[f32] {
        &self.prev_pressure
    }

    /// Current pressure at `(x, y)`, or `None` outside the grid.
    pub fn pressure_at(&self, x: i32, y: i32) -> Option<f32> {
        self.index_of(x, y).map(|i| self.pressure[i])
    }

    // ── Input operations ───────────────────────────────────────

    /// Add `amplitude` to the pressure at `(x, y)`.
    ///
    /// Returns `false` (and changes nothing) if `(x, y)` is off the grid.
    pub fn apply_impulse(&mut self, x: i32, y: i32, amplitude: f32) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.pressure[i] += amplitude;
                true
            }
            None => false,
        }
    }

    /// Register a persistent source at `(x, y)`.
    ///
    /// Idempotent. Returns `true` only if a new source was inserted;
    /// off-grid coordinates and existing sources return `false`.
    pub fn add_source(&mut self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.sources.insert(Cell::new(x, y))
    }

    /// Remove the source nearest to `(x, y)` if it lies within `radius`.
    ///
    /// Distance is Euclidean and the comparison is inclusive
    /// (`distance <= radius`). When several sources share the minimum
    /// distance, the earliest inserted one is removed. Returns the
    /// removed source. Off-grid taps remove nothing.
    pub fn remove_nearest_source(&mut self, x: i32, y: i32, radius: f64) -> Option<Cell> {
        if !self.contains(x, y) {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for (i, cell) in self.sources.iter().enumerate() {
            let d = cell.distance_to(x, y);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((i, d)),
            }
        }
        let (index, distance) = best?;
        if distance <= radius {
            // shift_remove keeps insertion order for later tie-breaks.
            self.sources.shift_remove_index(index)
        } else {
            None
        }
    }

    /// Persistent sources in insertion order.
    pub fn sources(&self) -> impl Iterator<Item = Cell> + '_ {
        self.sources.iter().copied()
    }

    /// Number of persistent sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Whether a source is registered at `(x, y)`.
    pub fn has_source(&self, x: i32, y: i32) -> bool {
        self.sources.contains(&Cell::new(x, y))
    }

    /// Zero both fields and drop every source. Keeps allocations.
    pub fn reset(&mut self) {
        self.pressure.fill(0.0);
        self.prev_pressure.fill(0.0);
        self.staging.fill(0.0);
        self.sources.clear();
    }

    // ── Stepping ───────────────────────────────────────────────

    /// Run one step: `f` fills the staging buffer, then the buffers rotate.
    ///
    /// Readers can only reach the fields through `&self`, so nobody can
    /// observe the grid between the write and the rotation.
    pub fn advance_with<R>(&mut self, f: impl FnOnce(&mut StepFrame<'_>) -> R) -> R {
        let result = {
            let mut frame = self.frame();
            f(&mut frame)
        };
        self.rotate();
        result
    }

    fn frame(&mut self) -> StepFrame<'_> {
        StepFrame {
            width: self.width,
            height: self.height,
            current: &self.pressure,
            previous: &self.prev_pressure,
            staging: &mut self.staging,
            sources: &self.sources,
        }
    }

    fn rotate(&mut self) {
        // prev ← pressure, pressure ← old prev
        std::mem::swap(&mut self.prev_pressure, &mut self.pressure);
        // pressure ← staging, staging ← old prev (scratch)
        std::mem::swap(&mut self.pressure, &mut self.staging);
    }
}
