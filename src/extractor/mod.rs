//! Region extraction from rendered pages
//!
//! This module turns a page-space clipping rectangle into a cropped
//! bitmap rendered at an independent export scale.

mod region;
mod region_extractor;

// Public exports
pub use region::PixelRegion;
pub use region_extractor::{default_output_name, RegionExtractor};
