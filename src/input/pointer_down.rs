//! Pointer down handling - stroke start and transform-gesture start.

use crate::input::state::{GestureState, TransformBaseline};
use crate::smoothing::StrokeBuilder;
use crate::surface::{DrawingSurface, SurfaceHost};
use crate::input::events::PointerEvent;
use tracing::debug;

impl DrawingSurface {
    /// First pointer down: claim the gesture from ancestor UI elements and
    /// begin a new stroke at the touch point's content-space position.
    pub(crate) fn handle_pointer_down(
        &mut self,
        event: &PointerEvent,
        host: &mut dyn SurfaceHost,
    ) {
        let Some(&position) = event.pointers.first() else {
            return;
        };

        host.capture_gesture();

        let origin = self.canvas.viewport.to_content(position);
        debug!(x = origin.x, y = origin.y, "stroke started");
        self.gesture = GestureState::Drawing {
            stroke: StrokeBuilder::start(origin, self.style),
        };
        host.request_frame();
    }

    /// A second pointer down: abandon any in-flight stroke and snapshot the
    /// transform-gesture baselines.
    ///
    /// The partial stroke is discarded rather than committed so an accidental
    /// multi-touch never leaves a fragment on the canvas.
    pub(crate) fn handle_secondary_down(
        &mut self,
        event: &PointerEvent,
        host: &mut dyn SurfaceHost,
    ) {
        let [first, second, ..] = event.pointers[..] else {
            return;
        };

        if self.gesture.is_drawing() {
            debug!("in-progress stroke discarded by second pointer");
        }

        let mid = first.midpoint(second);
        let baseline = TransformBaseline {
            mid,
            distance: first.distance(second),
            scale: self.canvas.viewport.scale,
            anchor: self.canvas.viewport.to_content(mid),
        };
        debug!(
            distance = baseline.distance,
            scale = baseline.scale,
            "transform gesture started"
        );
        self.gesture = GestureState::Transforming { baseline };
        host.request_frame();
    }
}
