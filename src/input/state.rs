//! Gesture state machine - unified state for all touch interactions.
//!
//! This replaces scattered mutable mode flags with a single explicit state
//! machine, making impossible states unrepresentable: the in-progress stroke
//! buffer only exists inside `Drawing`, the pan/zoom baselines only inside
//! `Transforming`, so at most one of the two interactions can ever be active.
//!
//! ## State Transitions
//!
//! ```text
//! Idle         -> Drawing       (first pointer down)
//! Drawing      -> Transforming  (second pointer down - in-flight stroke discarded)
//! Transforming -> Idle          (pointer count drops below 2 - nothing committed)
//! Drawing      -> Idle          (last pointer up/cancel - stroke finalized)
//! Any          -> Idle          (cancel)
//! ```

use crate::smoothing::StrokeBuilder;
use crate::types::Point;

/// Baselines snapshotted when a two-finger transform gesture starts.
///
/// Immutable for the lifetime of the gesture; each move event derives the new
/// viewport transform from these plus the current pointer positions.
#[derive(Clone, Copy, Debug)]
pub struct TransformBaseline {
    /// Midpoint of the two pointers at gesture start, screen space.
    pub mid: Point,
    /// Inter-pointer distance at gesture start. A non-positive value means
    /// "not yet measurable"; pan/zoom updates are skipped until it is.
    pub distance: f32,
    /// Viewport scale at gesture start.
    pub scale: f32,
    /// Content-space point that was under the midpoint at gesture start.
    /// Held visually pinned under the midpoint while zooming.
    pub anchor: Point,
}

/// Current touch interaction, with per-state payloads owned by the variant.
#[derive(Debug, Default)]
pub enum GestureState {
    /// No active touch interaction.
    #[default]
    Idle,

    /// Single-finger freehand drawing; owns the in-progress stroke buffer.
    Drawing {
        stroke: StrokeBuilder,
    },

    /// Two-finger pan/zoom.
    Transforming {
        baseline: TransformBaseline,
    },
}

impl GestureState {
    /// Returns true if no interaction is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a stroke is being drawn.
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// Returns true if a pan/zoom gesture is active.
    pub fn is_transforming(&self) -> bool {
        matches!(self, Self::Transforming { .. })
    }

    /// The in-progress stroke buffer, if drawing.
    pub fn in_progress(&self) -> Option<&StrokeBuilder> {
        match self {
            Self::Drawing { stroke } => Some(stroke),
            _ => None,
        }
    }

    /// The transform baselines, if transforming.
    pub fn baseline(&self) -> Option<&TransformBaseline> {
        match self {
            Self::Transforming { baseline } => Some(baseline),
            _ => None,
        }
    }

    /// Reset to Idle, dropping any per-state payload.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
