//! Point structure for screen-space coordinates

/// A point on the rendering surface, in on-screen pixels
///
/// Screen-space coordinates depend on the display scale the page was
/// rendered at; (0, 0) is the top-left corner of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// X coordinate (pixels from left)
    pub x: f32,
    /// Y coordinate (pixels from top)
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point
    pub fn new(x: f32, y: f32) -> Self {
        ScreenPoint { x, y }
    }
}
