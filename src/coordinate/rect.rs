//! Rectangle structures for screen-space and page-space regions

use super::point::ScreenPoint;

/// A drag gesture rectangle in screen-space pixels
///
/// Holds the raw start and end corners as captured; the corners are not
/// ordered, normalization happens when the rectangle is mapped to
/// page-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Corner where the drag began
    pub start: ScreenPoint,
    /// Corner where the drag ended
    pub end: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from two corners
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        ScreenRect { start, end }
    }

    /// Parse a rectangle from a string (format: "x1,y1,x2,y2")
    pub fn from_string(rect_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = rect_str.split(',').collect();
        if parts.len() != 4 {
            return Err("Rectangle must have 4 comma-separated values".to_string());
        }

        let x1 = parts[0].trim().parse::<f32>()
            .map_err(|_| "Invalid x1 value".to_string())?;
        let y1 = parts[1].trim().parse::<f32>()
            .map_err(|_| "Invalid y1 value".to_string())?;
        let x2 = parts[2].trim().parse::<f32>()
            .map_err(|_| "Invalid x2 value".to_string())?;
        let y2 = parts[3].trim().parse::<f32>()
            .map_err(|_| "Invalid y2 value".to_string())?;

        Ok(ScreenRect::new(
            ScreenPoint::new(x1, y1),
            ScreenPoint::new(x2, y2),
        ))
    }

    /// Width of the rectangle in pixels (always non-negative)
    pub fn width(&self) -> f32 {
        (self.end.x - self.start.x).abs()
    }

    /// Height of the rectangle in pixels (always non-negative)
    pub fn height(&self) -> f32 {
        (self.end.y - self.start.y).abs()
    }
}

/// A rectangle in page-space points
///
/// Page-space is the coordinate system intrinsic to a PDF page,
/// independent of any on-screen zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRect {
    /// Minimum X coordinate
    pub x0: f32,
    /// Minimum Y coordinate
    pub y0: f32,
    /// Maximum X coordinate
    pub x1: f32,
    /// Maximum Y coordinate
    pub y1: f32,
}

impl PageRect {
    /// Create a new page rectangle
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        PageRect { x0, y0, x1, y1 }
    }

    /// Return a copy with each axis ordered min/max
    pub fn normalized(&self) -> Self {
        PageRect {
            x0: self.x0.min(self.x1),
            y0: self.y0.min(self.y1),
            x1: self.x0.max(self.x1),
            y1: self.y0.max(self.y1),
        }
    }

    /// Width of the rectangle in points
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle in points
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Area of the rectangle in square points
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Check whether the rectangle has zero or negative area
    pub fn is_degenerate(&self) -> bool {
        let n = self.normalized();
        n.width() <= 0.0 || n.height() <= 0.0
    }
}
