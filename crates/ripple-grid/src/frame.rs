//! Staged write access for a single time step.

use indexmap::IndexSet;
use ripple_core::Cell;

use crate::topology::flat_index;

/// View of a grid during one step.
///
/// Created by [`Grid::advance_with`](crate::Grid::advance_with). Exposes
/// the frozen pre-step fields read-only and the staging buffer for the
/// next field. The staging buffer holds stale data from an earlier step:
/// a stepper must write every cell.
pub struct StepFrame<'g> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) current: &'g [f32],
    pub(crate) previous: &'g [f32],
    pub(crate) staging: &'g mut [f32],
    pub(crate) sources: &'g IndexSet<Cell>,
}

impl<'g> StepFrame<'g> {
    /// Grid width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The field before this step.
    pub fn current(&self) -> &'g [f32] {
        self.current
    }

    /// The field one step before [`current`](Self::current).
    pub fn previous(&self) -> &'g [f32] {
        self.previous
    }

    /// Buffer receiving the next field.
    pub fn staging_mut(&mut self) -> &mut [f32] {
        &mut *self.staging
    }

    /// Number of persistent sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Flat indices of every persistent source, in insertion order.
    pub fn source_indices(&self) -> impl Iterator<Item = usize> + 'g {
        let width = self.width;
        let sources: &'g IndexSet<Cell> = self.sources;
        sources
            .iter()
            .map(move |c| flat_index(c.x as u32, c.y as u32, width))
    }
}

impl std::fmt::Debug for StepFrame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("sources", &self.sources.len())
            .finish()
    }
}
