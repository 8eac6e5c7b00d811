//! Core types for the inkboard drawing surface.
//!
//! This module defines the fundamental data structures used throughout the crate:
//! 2D points, colors, backend-agnostic path segments, and finalized strokes.
//!
//! Coordinates live in one of two spaces which must never be conflated without
//! an explicit conversion through [`crate::viewport::ViewportTransform`]:
//!
//! - *Screen space*: device/view pixels, as delivered by pointer events.
//! - *Content space*: logical drawing coordinates, independent of zoom/pan.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};
use uuid::Uuid;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D coordinate. Whether it is screen space or content space is determined
/// by context; conversion between the two goes through the viewport transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor, mirroring the field order.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        point((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: f32) -> Point {
        point(self.x * rhs, self.y * rhs)
    }
}

// ============================================================================
// Color
// ============================================================================

/// An 8-bit RGBA color, passed per draw call (no shared paint state).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string.
    ///
    /// Returns `None` for any other shape of input; the settings layer maps
    /// that into its own error type.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Color {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: 255,
            }),
            8 => Some(Color {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ============================================================================
// Path segments and strokes
// ============================================================================

/// One segment of a freehand curve, in content space.
///
/// Backend-agnostic on purpose: the render surface converts these to its own
/// path primitives at draw time, so stroke storage stays portable across
/// rendering backends.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Start of a subpath.
    MoveTo(Point),
    /// Quadratic Bezier from the current position to `to`, with control
    /// point `ctrl`.
    QuadTo { ctrl: Point, to: Point },
}

/// Render attributes for a stroke, passed explicitly on every draw call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: crate::constants::DEFAULT_STROKE_WIDTH,
        }
    }
}

/// A finalized freehand stroke: an immutable content-space curve plus its
/// render attributes.
///
/// Created when a draw gesture ends and never mutated afterward. Insertion
/// order in the shape store is z-order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Unique identifier, assigned at finalization.
    pub id: Uuid,
    /// Ordered curve segments, starting with a single `MoveTo`.
    pub segments: Vec<PathSegment>,
    /// Frozen render attributes.
    pub style: StrokeStyle,
}
