//! Crate-wide constants.
//!
//! Centralizes magic numbers to make the codebase more maintainable and
//! self-documenting.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum viewport scale (zoomed all the way out)
pub const MIN_SCALE: f32 = 0.2;

/// Maximum viewport scale (zoomed all the way in)
pub const MAX_SCALE: f32 = 5.0;

/// Default viewport scale
pub const DEFAULT_SCALE: f32 = 1.0;

// ============================================================================
// Stroke Defaults
// ============================================================================

/// Default stroke width, in content-space units
pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;

/// Default stroke color (black)
pub const DEFAULT_STROKE_COLOR: &str = "#000000";
