//! Touch input handling for the drawing surface.
//!
//! This module implements all pointer interaction logic: starting strokes,
//! feeding raw samples through the smoother, and routing two-finger gestures
//! to the viewport transform.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`GestureState`) to track
//! the current interaction mode. Drawing and transforming are mutually
//! exclusive by construction: the in-progress stroke buffer is owned by the
//! `Drawing` variant, the pan/zoom baselines by the `Transforming` variant.
//!
//! ## Modules
//!
//! - `events` - Pointer event types delivered by the host shell
//! - `state` - Gesture state machine enum and helper methods
//! - `pointer_down` - Pointer down handling (stroke start, transform start)
//! - `pointer_move` - Pointer move handling (smoothing, pan/zoom updates)
//! - `pointer_up` - Pointer up/cancel handling (finalize or discard)

pub mod events;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use events::{PointerAction, PointerEvent};
pub use state::{GestureState, TransformBaseline};
