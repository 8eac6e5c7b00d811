//! Frame rendering for the drawing surface.
//!
//! The crate does not render anything itself; it replays the canvas onto an
//! abstract [`RenderSurface`] implemented by the host's 2D backend.

pub mod canvas;

pub use canvas::RenderSurface;
