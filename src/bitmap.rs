//! The off-screen backing bitmap.
//!
//! The bitmap is the sole persistent render target for a graph window: the
//! derived graph draws into it, and on expose the window system blits it
//! verbatim onto the visible surface. Transient overlays (guide bars under
//! the pointer, for example) are painted on the surface directly and never
//! reach the bitmap.

use crate::geom::{SurfacePoint, SurfaceRect, SurfaceSize};
use crate::palette::Color;

/// An owned pixel buffer sized to the drawing surface.
///
/// Created filled with a uniform background color. Drawing operations clip
/// silently against the bitmap bounds.
#[derive(Debug, Clone)]
pub struct BackingBitmap {
    size: SurfaceSize,
    pixels: Vec<Color>,
}

impl BackingBitmap {
    /// Allocate a bitmap of the given size, filled with `background`.
    ///
    /// Negative dimensions clamp to zero, producing an empty bitmap.
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        let size = SurfaceSize::new(width, height);
        let pixels = vec![background; (size.width * size.height) as usize];
        Self { size, pixels }
    }

    /// Bitmap dimensions in pixels.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// The full bitmap area as a rectangle at the origin.
    pub fn bounds(&self) -> SurfaceRect {
        SurfaceRect::from_size(SurfacePoint::new(0, 0), self.size)
    }

    /// Read a single pixel, if it lies inside the bitmap.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(self.pixels[(y * self.size.width + x) as usize])
    }

    /// Access the raw pixel rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.size.width.max(1) as usize)
    }

    /// Fill the entire bitmap with one color.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the bitmap bounds.
    pub fn fill_rect(&mut self, rect: SurfaceRect, color: Color) {
        let Some(clipped) = rect.intersect(self.bounds()) else {
            return;
        };
        for y in clipped.min.y..clipped.max.y {
            let row = (y * self.size.width) as usize;
            let start = row + clipped.min.x as usize;
            let end = row + clipped.max.x as usize;
            self.pixels[start..end].fill(color);
        }
    }

    /// Draw a one-pixel horizontal line at row `y` spanning `x0..x1`.
    pub fn draw_hline(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.fill_rect(
            SurfaceRect::new(SurfacePoint::new(x0, y), SurfacePoint::new(x1, y + 1)),
            color,
        );
    }

    /// Draw a one-pixel vertical line at column `x` spanning `y0..y1`.
    pub fn draw_vline(&mut self, x: i32, y0: i32, y1: i32, color: Color) {
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.fill_rect(
            SurfaceRect::new(SurfacePoint::new(x, y0), SurfacePoint::new(x + 1, y1)),
            color,
        );
    }
}
