//! Surface-local pixel geometry.
//!
//! All coordinates in this crate are integer pixels relative to the top-left
//! corner of the graph drawing surface. Window adapters translate from their
//! own widget coordinate spaces before handing points to the controller.

/// A point on the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfacePoint {
    /// Horizontal offset from the surface's left edge.
    pub x: i32,
    /// Vertical offset from the surface's top edge.
    pub y: i32,
}

impl SurfacePoint {
    /// Create a new surface point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of the drawing surface or the backing bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl SurfaceSize {
    /// Create a new size, clamping negative dimensions to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Check whether the size has any area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An axis-aligned rectangle on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceRect {
    /// Top-left corner.
    pub min: SurfacePoint,
    /// Bottom-right corner (exclusive).
    pub max: SurfacePoint,
}

impl SurfaceRect {
    /// Create a new rectangle from corners.
    pub const fn new(min: SurfacePoint, max: SurfacePoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_size(origin: SurfacePoint, size: SurfaceSize) -> Self {
        Self {
            min: origin,
            max: SurfacePoint::new(origin.x + size.width, origin.y + size.height),
        }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Check whether the point falls inside the rectangle.
    pub fn contains(&self, point: SurfacePoint) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
    }

    /// Intersect two rectangles, returning `None` when they do not overlap.
    pub fn intersect(&self, other: SurfaceRect) -> Option<SurfaceRect> {
        let min = SurfacePoint::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = SurfacePoint::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        if min.x < max.x && min.y < max.y {
            Some(SurfaceRect::new(min, max))
        } else {
            None
        }
    }
}
