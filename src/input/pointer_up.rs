//! Pointer up and cancel handling - finalize or discard the active gesture.

use crate::input::events::PointerEvent;
use crate::input::state::GestureState;
use crate::surface::{DrawingSurface, SurfaceHost};
use tracing::debug;

impl DrawingSurface {
    /// Last pointer up, or a platform cancel: both end the gesture the same
    /// way. A stroke in flight is finalized into the shape store; a transform
    /// gesture has nothing to commit.
    pub(crate) fn handle_pointer_up(&mut self, host: &mut dyn SurfaceHost) {
        match std::mem::take(&mut self.gesture) {
            GestureState::Drawing { stroke } => {
                let stroke = stroke.finish();
                debug!(
                    id = %stroke.id,
                    segments = stroke.segments.len(),
                    "stroke finalized"
                );
                self.canvas.append_stroke(stroke);
            }
            GestureState::Transforming { .. } => {
                debug!(scale = self.canvas.viewport.scale, "transform gesture ended");
            }
            GestureState::Idle => {}
        }
        host.request_frame();
    }

    /// A non-primary pointer lifted. Once fewer than two pointers remain, a
    /// transform gesture ends with nothing committed; drawing is unaffected
    /// (it only ever has one pointer).
    pub(crate) fn handle_secondary_up(
        &mut self,
        event: &PointerEvent,
        host: &mut dyn SurfaceHost,
    ) {
        if self.gesture.is_transforming() && event.pointers.len() < 2 {
            self.gesture.reset();
            host.request_frame();
        }
    }
}
