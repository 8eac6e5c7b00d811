//! Pointer events - the narrow input interface between the host shell and the
//! drawing surface.
//!
//! The host translates its platform's touch stream into [`PointerEvent`]s.
//! Each event carries the action kind, the set of active pointers in screen
//! space (primary pointer first), and optionally a batch of historical
//! sub-samples for the primary pointer: extra positions reported between two
//! delivered move events by high-frequency input hardware. Folding those into
//! the stroke reduces visible lag and jaggedness on fast motion.

use crate::types::Point;

/// Kind of pointer action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// First pointer touched down.
    Down,
    /// An additional (non-primary) pointer touched down.
    SecondaryDown,
    /// One or more pointers moved.
    Move,
    /// A non-primary pointer lifted.
    SecondaryUp,
    /// The last pointer lifted.
    Up,
    /// The gesture was cancelled by the platform.
    Cancel,
}

/// One delivered pointer event.
///
/// `pointers` is the set of pointers active *after* the action took effect:
/// on `SecondaryDown` it includes the new pointer, on `SecondaryUp` the lifted
/// pointer is already removed, and on `Up`/`Cancel` it is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    /// Active pointer positions, screen space, primary first.
    pub pointers: Vec<Point>,
    /// Historical sub-samples for the primary pointer since the previous
    /// delivered event, oldest first. Only meaningful on `Move`.
    pub history: Vec<Point>,
}

impl PointerEvent {
    /// First pointer down at `position`.
    pub fn down(position: Point) -> Self {
        Self {
            action: PointerAction::Down,
            pointers: vec![position],
            history: Vec::new(),
        }
    }

    /// A second (or later) pointer down; `pointers` is the full active set.
    pub fn secondary_down(pointers: Vec<Point>) -> Self {
        Self {
            action: PointerAction::SecondaryDown,
            pointers,
            history: Vec::new(),
        }
    }

    /// Pointer move with the current active set.
    pub fn moved(pointers: Vec<Point>) -> Self {
        Self {
            action: PointerAction::Move,
            pointers,
            history: Vec::new(),
        }
    }

    /// Attach historical sub-samples for the primary pointer.
    pub fn with_history(mut self, history: Vec<Point>) -> Self {
        self.history = history;
        self
    }

    /// A non-primary pointer lifted; `remaining` is the active set afterwards.
    pub fn secondary_up(remaining: Vec<Point>) -> Self {
        Self {
            action: PointerAction::SecondaryUp,
            pointers: remaining,
            history: Vec::new(),
        }
    }

    /// The last pointer lifted.
    pub fn up() -> Self {
        Self {
            action: PointerAction::Up,
            pointers: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Platform cancelled the gesture.
    pub fn cancel() -> Self {
        Self {
            action: PointerAction::Cancel,
            pointers: Vec::new(),
            history: Vec::new(),
        }
    }
}
