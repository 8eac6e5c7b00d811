//! Stroke smoothing - midpoint-quadratic filtering of raw touch samples.
//!
//! Raw touch samples arrive as discrete points at whatever rate the input
//! layer delivers them. Rendering them as a polyline looks jagged; this module
//! applies the classic "quadratic-through-midpoints" filter instead: each new
//! sample emits a quadratic Bezier from the previous midpoint to the new
//! midpoint, with the previous raw sample as the control point. The resulting
//! curve passes through every midpoint and is tangent-continuous at each
//! joint, without introducing perceptible lag on fast motion.
//!
//! The smoother's running state lives inside [`StrokeBuilder`] and only for
//! the duration of one stroke; it is created on gesture start and consumed by
//! [`StrokeBuilder::finish`] (or dropped on discard).

use crate::types::{PathSegment, Point, Stroke, StrokeStyle};
use uuid::Uuid;

/// The in-progress stroke buffer: accumulated curve segments plus the
/// smoother's running state. All coordinates are content space.
///
/// Exactly one builder exists at a time, owned by the gesture state machine's
/// `Drawing` variant.
#[derive(Clone, Debug)]
pub struct StrokeBuilder {
    segments: Vec<PathSegment>,
    /// Previous raw sample; control point of the next emitted segment.
    last_point: Point,
    /// Previous emitted midpoint; start of the next emitted segment.
    last_mid: Point,
    style: StrokeStyle,
}

impl StrokeBuilder {
    /// Start a new stroke at `origin` (the first raw sample).
    ///
    /// Initializes both the running sample and the running midpoint to the
    /// origin - a degenerate zero-length starting segment. No curve segment
    /// is emitted until the second sample arrives.
    pub fn start(origin: Point, style: StrokeStyle) -> Self {
        Self {
            segments: vec![PathSegment::MoveTo(origin)],
            last_point: origin,
            last_mid: origin,
            style,
        }
    }

    /// Fold one raw sample into the curve.
    ///
    /// Emits a quadratic segment from the previous midpoint to the midpoint of
    /// the previous and new samples, using the previous sample as the control
    /// point. Historical sub-samples must be fed through here in chronological
    /// order before the live sample so motion stays temporally ordered.
    pub fn add_point(&mut self, p: Point) {
        let mid = self.last_point.midpoint(p);
        self.segments.push(PathSegment::QuadTo {
            ctrl: self.last_point,
            to: mid,
        });
        self.last_point = p;
        self.last_mid = mid;
    }

    /// The segments accumulated so far, starting with the initial `MoveTo`.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of curve segments emitted so far (excludes the `MoveTo`).
    pub fn curve_count(&self) -> usize {
        self.segments.len() - 1
    }

    /// Render attributes the stroke will be finalized with.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Promote the buffer into an immutable [`Stroke`].
    ///
    /// The accumulated curve is frozen as-is; the smoother state is consumed.
    pub fn finish(self) -> Stroke {
        Stroke {
            id: Uuid::new_v4(),
            segments: self.segments,
            style: self.style,
        }
    }
}
