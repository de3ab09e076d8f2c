//! Geometric primitives: Point, Rect, `ItemGeometry`.

use serde::{Deserialize, Serialize};

/// A 2D point with x and y coordinates.
///
/// Also used as a per-axis pair for padding and spacing, where `x` is the
/// horizontal amount and `y` the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point with the same value on both axes.
    #[must_use]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Rectangle stretching from this rect's origin to `other`'s far corner.
    ///
    /// Used to merge the first and last cell of a span; `other` is expected
    /// to lie below and to the right.
    #[must_use]
    pub fn span_to(&self, other: &Self) -> Self {
        Self::new(
            self.x,
            self.y,
            other.right() - self.x,
            other.bottom() - self.y,
        )
    }

    /// Shrink by `padding.x` on the left and right and `padding.y` on the top
    /// and bottom. The size never goes below zero.
    #[must_use]
    pub fn inset(&self, padding: Point) -> Self {
        Self::new(
            self.x + padding.x,
            self.y + padding.y,
            (self.width - 2.0 * padding.x).max(0.0),
            (self.height - 2.0 * padding.y).max(0.0),
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Integral geometry accepted by a host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ItemGeometry {
    /// X position
    pub x: i32,
    /// Y position
    pub y: i32,
    /// Width, at least 1
    pub width: i32,
    /// Height, at least 1
    pub height: i32,
}

impl ItemGeometry {
    /// Create integral geometry directly.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Floor a float rect onto the integer grid.
    ///
    /// Width and height never drop below 1 so the host never receives a
    /// degenerate item.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            x: rect.x.floor() as i32,
            y: rect.y.floor() as i32,
            width: (rect.width.floor() as i32).max(1),
            height: (rect.height.floor() as i32).max(1),
        }
    }
}
