//! inkboard - a touch-based freehand drawing surface.
//!
//! The crate is the geometric core of a drawing canvas, independent of any
//! windowing or rendering backend:
//!
//! - [`viewport::ViewportTransform`] maps between screen and content
//!   coordinates and clamps the zoom range.
//! - [`smoothing::StrokeBuilder`] turns raw touch samples (including
//!   historical sub-samples) into a smooth quadratic curve.
//! - [`input::GestureState`] classifies touch input into idle / drawing /
//!   two-finger transforming, keeping the two interactions mutually exclusive.
//! - [`surface::DrawingSurface`] ties it together: an ordered store of
//!   finalized strokes, replayed every frame through the viewport transform
//!   onto an abstract [`render::RenderSurface`].
//!
//! The host shell feeds pointer events in arrival order on a single UI thread
//! and implements the two narrow traits ([`render::RenderSurface`],
//! [`surface::SurfaceHost`]); everything else is handled here.

pub mod constants;
pub mod input;
pub mod perf;
pub mod render;
pub mod settings;
pub mod smoothing;
pub mod surface;
pub mod types;
pub mod viewport;

pub use input::{GestureState, PointerAction, PointerEvent};
pub use render::RenderSurface;
pub use settings::Settings;
pub use surface::{DrawingSurface, NullHost, SurfaceHost};
pub use types::{Color, PathSegment, Point, Stroke, StrokeStyle, point};
pub use viewport::ViewportTransform;
