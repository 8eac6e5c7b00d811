//! Viewport transform - the content-to-screen coordinate mapping.
//!
//! The transform is a uniform scale followed by a translation:
//! `screen = content * scale + offset`. Both pointer handling and frame
//! rendering go through this single mapping, which keeps the in-progress
//! stroke visually consistent with finalized ones.

use crate::constants::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use crate::types::Point;

/// Scale and translation relating content space to screen space.
///
/// Invariant: `scale` always lies in `[MIN_SCALE, MAX_SCALE]`, so it can never
/// reach zero and the inverse mapping is always defined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub scale: f32,
    pub offset: Point,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset: Point::ZERO,
        }
    }
}

impl ViewportTransform {
    /// Clamp a requested scale into the supported zoom range.
    #[inline]
    pub fn clamp_scale(scale: f32) -> f32 {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    }

    /// Convert a screen-space position to content space.
    #[inline]
    pub fn to_content(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset.x) / self.scale,
            y: (screen.y - self.offset.y) / self.scale,
        }
    }

    /// Convert a content-space position to screen space.
    #[inline]
    pub fn to_screen(&self, content: Point) -> Point {
        content * self.scale + self.offset
    }

    /// Apply a combined pan + zoom update from a two-finger gesture.
    ///
    /// `anchor_screen` is the current screen position of the gesture midpoint,
    /// `anchor_content` the content point that was under the midpoint at
    /// gesture start, and `pan_delta` the midpoint's displacement since then.
    /// The requested scale is clamped; the offset is then chosen so the anchor
    /// content point stays pinned under the midpoint, shifted by the pan.
    pub fn apply_pan_zoom(
        &mut self,
        anchor_screen: Point,
        anchor_content: Point,
        new_scale: f32,
        pan_delta: Point,
    ) {
        self.scale = Self::clamp_scale(new_scale);
        self.offset = anchor_screen - anchor_content * self.scale + pan_delta;
    }
}
