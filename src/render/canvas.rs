//! Canvas replay - finalized strokes plus the in-progress buffer, every frame.
//!
//! ## Performance Notes
//!
//! This is a hot path - replay happens every frame. The viewport transform is
//! applied to the surface's coordinate system once (a single combined
//! translate + scale) instead of transforming every point, which is both
//! cheaper and keeps the in-progress stroke visually consistent with
//! finalized ones.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::profile_scope;
use crate::surface::DrawingSurface;
use crate::types::{Color, PathSegment};

/// The abstract 2D immediate-mode surface the host renders with.
///
/// Style is passed explicitly on every draw call; implementations must not
/// rely on any shared mutable paint state. `draw_path` receives content-space
/// segments and converts them to the backend's own path primitives.
pub trait RenderSurface {
    /// Push the current transform state.
    fn save(&mut self);
    /// Pop back to the previously saved transform state.
    fn restore(&mut self);
    /// Translate the coordinate system by `(dx, dy)`.
    fn translate(&mut self, dx: f32, dy: f32);
    /// Scale the coordinate system by `(sx, sy)`.
    fn scale(&mut self, sx: f32, sy: f32);
    /// Stroke a path with the given color and width.
    fn draw_path(&mut self, segments: &[PathSegment], color: Color, width: f32);
}

impl DrawingSurface {
    /// Replay the canvas onto `surface`.
    ///
    /// Applies the viewport transform once, then draws every finalized stroke
    /// in insertion order followed by the in-progress buffer (if any) on top.
    /// Read-only with respect to the canvas state.
    pub fn render_frame(&self, surface: &mut dyn RenderSurface) {
        profile_scope!("render_frame");

        let viewport = &self.canvas.viewport;
        surface.save();
        surface.translate(viewport.offset.x, viewport.offset.y);
        surface.scale(viewport.scale, viewport.scale);

        for stroke in &self.canvas.strokes {
            surface.draw_path(&stroke.segments, stroke.style.color, stroke.style.width);
        }

        if let Some(builder) = self.in_progress() {
            let style = builder.style();
            surface.draw_path(builder.segments(), style.color, style.width);
        }

        surface.restore();
    }
}
