#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// A point in world, screen, or minimap space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle stored as origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from its left/top/right/bottom edges.
    #[must_use]
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { x: left, y: top, width: right - left, height: bottom - top }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Grow the rectangle by `pad` on every side.
    #[must_use]
    pub fn inflate(&self, pad: f64) -> Self {
        Self {
            x: self.x - pad,
            y: self.y - pad,
            width: self.width + pad * 2.0,
            height: self.height + pad * 2.0,
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_ltrb(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Same origin, each dimension raised to at least `min`.
    #[must_use]
    pub fn with_min_size(&self, min: f64) -> Self {
        Self { width: self.width.max(min), height: self.height.max(min), ..*self }
    }

    /// Whether `pt` lies inside the rectangle, edges inclusive.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// Whether `other` lies entirely inside `self`, edges inclusive.
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.bottom() <= self.bottom()
    }
}

/// Pan/zoom state of the main canvas, owned by the host.
///
/// `offset` is the screen-space translation in device pixels; a world point
/// `w` lands on screen at `w * scale + offset`. `scale` is expected to be > 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub offset: Point,
    pub scale: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { offset: Point::default(), scale: 1.0 }
    }
}

/// Size of the main canvas display area in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhysicalSize {
    pub width: f64,
    pub height: f64,
}

impl PhysicalSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl ViewState {
    /// World-space rectangle currently visible on the main canvas.
    #[must_use]
    pub fn visible_rect(&self, size: PhysicalSize) -> Rect {
        Rect {
            x: -self.offset.x / self.scale,
            y: -self.offset.y / self.scale,
            width: size.width / self.scale,
            height: size.height / self.scale,
        }
    }

    /// Offset that puts `world` at the exact center of a `size` viewport at the current scale.
    #[must_use]
    pub fn offset_centering(&self, world: Point, size: PhysicalSize) -> Point {
        Point {
            x: size.width * 0.5 - world.x * self.scale,
            y: size.height * 0.5 - world.y * self.scale,
        }
    }
}
