//! The drawing surface - canvas state plus the gesture state machine.
//!
//! `DrawingSurface` is the crate's main entry point. The host shell feeds it
//! pointer events through [`DrawingSurface::handle_pointer_event`] and asks it
//! to replay the canvas each frame through `render_frame` (see
//! [`crate::render::canvas`]). Everything runs on the host's single UI thread;
//! handlers run to completion synchronously, so no locking is needed anywhere.

use crate::input::{GestureState, PointerAction, PointerEvent};
use crate::smoothing::StrokeBuilder;
use crate::types::{Stroke, StrokeStyle};
use crate::viewport::ViewportTransform;

/// Host callbacks the surface issues while handling input.
///
/// The host decides what these mean on its platform; both default to no-ops
/// so headless use (and tests) can pass a bare stub.
pub trait SurfaceHost {
    /// Ask ancestor UI elements not to intercept the remaining events of the
    /// current gesture. Issued once, on first pointer down.
    fn capture_gesture(&mut self) {}

    /// The canvas changed; schedule a redraw.
    fn request_frame(&mut self) {}
}

/// A host that ignores all callbacks, for headless use.
#[derive(Debug, Default)]
pub struct NullHost;

impl SurfaceHost for NullHost {}

/// The shape store and current viewport: everything needed to replay a frame.
///
/// Owned exclusively by [`DrawingSurface`] and mutated only by the gesture
/// handlers; rendering is read-only.
#[derive(Debug, Default)]
pub struct CanvasState {
    /// Finalized strokes in insertion order (= z-order). Append-only during
    /// a session.
    pub strokes: Vec<Stroke>,
    /// Current content-to-screen mapping.
    pub viewport: ViewportTransform,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized stroke on top of the z-order. O(1) amortized.
    pub fn append_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }
}

/// An interactive freehand drawing surface.
#[derive(Debug, Default)]
pub struct DrawingSurface {
    /// Finalized strokes and the viewport transform.
    pub canvas: CanvasState,
    /// Current touch interaction; owns the in-progress stroke buffer while
    /// drawing.
    pub gesture: GestureState,
    /// Render attributes applied to newly started strokes.
    pub style: StrokeStyle,
}

impl DrawingSurface {
    /// Create a surface with the default stroke style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface drawing with the given style.
    pub fn with_style(style: StrokeStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// The in-progress stroke buffer, if a draw gesture is active.
    pub fn in_progress(&self) -> Option<&StrokeBuilder> {
        self.gesture.in_progress()
    }

    /// Dispatch one pointer event to the gesture state machine.
    ///
    /// Events must be delivered in chronological arrival order; each call
    /// runs to completion before the next.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent, host: &mut dyn SurfaceHost) {
        match event.action {
            PointerAction::Down => self.handle_pointer_down(event, host),
            PointerAction::SecondaryDown => self.handle_secondary_down(event, host),
            PointerAction::Move => self.handle_pointer_move(event, host),
            PointerAction::SecondaryUp => self.handle_secondary_up(event, host),
            PointerAction::Up | PointerAction::Cancel => self.handle_pointer_up(host),
        }
    }
}
