//! Pixel region structure for cropping rendered pages
//!
//! Coordinates are in pixels of a rendered bitmap, with (0,0) at the
//! top-left corner.

/// Region of a rendered page (in pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,
    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,
    /// Width of the region in pixels
    pub width: u32,
    /// Height of the region in pixels
    pub height: u32,
}

impl PixelRegion {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        PixelRegion { x, y, width, height }
    }

    /// Check whether the region covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
