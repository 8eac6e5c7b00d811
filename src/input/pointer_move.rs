//! Pointer move handling - incremental smoothing and pan/zoom updates.
//!
//! ## Performance Notes
//!
//! Pointer move is the hottest input path (potentially hundreds of samples per
//! second once historical sub-samples are counted). Work per sample is one
//! midpoint and one segment append; pan/zoom updates touch only the transform
//! fields.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::input::events::PointerEvent;
use crate::input::state::GestureState;
use crate::profile_scope;
use crate::surface::{DrawingSurface, SurfaceHost};

impl DrawingSurface {
    /// Route a pointer move to the smoother or the viewport transform,
    /// depending on the current gesture state.
    ///
    /// A move reporting fewer pointers than its state needs (zero while
    /// drawing, fewer than two while transforming) is a no-op.
    pub(crate) fn handle_pointer_move(
        &mut self,
        event: &PointerEvent,
        host: &mut dyn SurfaceHost,
    ) {
        profile_scope!("handle_pointer_move");

        match &mut self.gesture {
            GestureState::Transforming { baseline } => {
                let [first, second, ..] = event.pointers[..] else {
                    return;
                };

                // Skipped until the baseline distance is measurable, to avoid
                // a division by zero or an initial spurious jump.
                if baseline.distance > 0.0 {
                    let mid = first.midpoint(second);
                    let scale_factor = first.distance(second) / baseline.distance;
                    self.canvas.viewport.apply_pan_zoom(
                        mid,
                        baseline.anchor,
                        baseline.scale * scale_factor,
                        mid - baseline.mid,
                    );
                }
                host.request_frame();
            }

            GestureState::Drawing { stroke } => {
                let Some(&live) = event.pointers.first() else {
                    return;
                };

                // Historical sub-samples first, in chronological order, then
                // the live sample - no sample is skipped and motion stays
                // temporally ordered.
                let viewport = self.canvas.viewport;
                for &sample in &event.history {
                    stroke.add_point(viewport.to_content(sample));
                }
                stroke.add_point(viewport.to_content(live));
                host.request_frame();
            }

            GestureState::Idle => {}
        }
    }
}
