//! Input events written into the core by the presentation layer.

use crate::coord::{Cell, StepId};
use crate::mode::InputMode;

/// A user tap mapped onto the grid.
///
/// # Examples
///
/// ```
/// use ripple_core::{InputEvent, InputMode};
///
/// let tap = InputEvent::new(12, 40, InputMode::Source);
/// assert_eq!(tap.mode, InputMode::Source);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    /// Column of the tap. May lie outside the grid.
    pub x: i32,
    /// Row of the tap. May lie outside the grid.
    pub y: i32,
    /// What the tap does.
    pub mode: InputMode,
}

impl InputEvent {
    /// Create an event.
    pub const fn new(x: i32, y: i32, mode: InputMode) -> Self {
        Self { x, y, mode }
    }

    /// Shorthand for a [`InputMode::Pulse`] event.
    pub const fn pulse(x: i32, y: i32) -> Self {
        Self::new(x, y, InputMode::Pulse)
    }

    /// Shorthand for a [`InputMode::Source`] event.
    pub const fn source(x: i32, y: i32) -> Self {
        Self::new(x, y, InputMode::Source)
    }

    /// Shorthand for a [`InputMode::Remove`] event.
    pub const fn remove(x: i32, y: i32) -> Self {
        Self::new(x, y, InputMode::Remove)
    }
}

/// What happened when an input event was applied to the grid.
///
/// None of the "ignored" outcomes are errors: taps that miss the grid or
/// find nothing to remove are expected from approximate screen mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// An impulse was added to the field.
    ImpulseApplied,
    /// A new persistent source was registered.
    SourceAdded,
    /// A source already existed at this cell; nothing changed.
    SourceAlreadyPresent,
    /// The nearest source within the removal radius was removed.
    SourceRemoved(Cell),
    /// No source lay within the removal radius.
    NoSourceInRange,
    /// The coordinate lies outside the grid.
    OutOfBounds,
}

impl InputOutcome {
    /// Whether the event changed grid state.
    pub fn changed_state(&self) -> bool {
        matches!(
            self,
            Self::ImpulseApplied | Self::SourceAdded | Self::SourceRemoved(_)
        )
    }
}

/// Receipt for one applied input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputReceipt {
    /// The event as submitted.
    pub event: InputEvent,
    /// The step whose advance followed this event, i.e. the step
    /// whose field first reflects it.
    pub applied_step: StepId,
    /// What the event did.
    pub outcome: InputOutcome,
}
