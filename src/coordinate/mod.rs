//! Coordinate handling for screen-space and page-space
//!
//! This module provides the structures for mapping a drag gesture
//! captured in on-screen pixels to a clipping rectangle in the page's
//! intrinsic point coordinates.

mod point;
mod rect;
mod transform;

// Re-export key types
pub use self::point::ScreenPoint;
pub use self::rect::{PageRect, ScreenRect};
pub use self::transform::DisplayTransform;
