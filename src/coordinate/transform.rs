//! Display transform between page-space and screen-space

use super::point::ScreenPoint;
use super::rect::{PageRect, ScreenRect};

/// Scale factor mapping page-space points to screen-space pixels
///
/// One transform is active per displayed page; it must be recomputed
/// whenever the user changes zoom or navigates to another page, and any
/// selection captured under the old transform is no longer meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    /// Positive page-to-screen scale factor
    pub scale: f32,
}

impl DisplayTransform {
    /// Create a new transform with the given scale factor
    pub fn new(scale: f32) -> Self {
        DisplayTransform { scale }
    }

    /// Identity transform (one screen pixel per page point)
    pub fn identity() -> Self {
        DisplayTransform { scale: 1.0 }
    }

    /// Map a screen point back to page-space
    pub fn to_page_point(&self, point: ScreenPoint) -> (f32, f32) {
        (point.x / self.scale, point.y / self.scale)
    }

    /// Map a screen-space drag rectangle to a normalized page rectangle
    ///
    /// Each coordinate is divided by the scale factor, then the axes are
    /// ordered min/max so the result has non-negative width and height.
    /// Swapping the two corners yields the identical rectangle;
    /// degenerate (zero-area) rectangles are passed through unchanged.
    ///
    /// # Arguments
    /// * `rect` - The captured drag rectangle in screen pixels
    ///
    /// # Returns
    /// The corresponding page-space rectangle
    pub fn to_page_rect(&self, rect: &ScreenRect) -> PageRect {
        let (sx, sy) = self.to_page_point(rect.start);
        let (ex, ey) = self.to_page_point(rect.end);

        PageRect::new(sx, sy, ex, ey).normalized()
    }
}
