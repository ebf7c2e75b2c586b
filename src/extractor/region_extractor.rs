//! Region extraction from rendered PDF pages
//!
//! The extractor renders a page at the requested export scale and crops
//! the page-space clipping rectangle out of the result. The export scale
//! is deliberately independent of whatever display scale the page was
//! previewed at: output resolution must not depend on the zoom level the
//! user happened to be viewing at.

use std::io;
use std::path::Path;

use chrono::Local;
use image::RgbImage;
use log::{debug, info};

use crate::coordinate::PageRect;
use crate::extractor::region::PixelRegion;
use crate::pdf::{PdfDocument, SnipError, SnipResult};

/// Extracts rectangular page regions as raster images
pub struct RegionExtractor;

impl RegionExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        RegionExtractor
    }

    /// Render a full page at the given scale
    ///
    /// # Arguments
    /// * `doc` - The opened document
    /// * `index` - Zero-based page index
    /// * `scale` - Positive scale factor
    ///
    /// # Returns
    /// The rasterized page, or a render error
    pub fn render_page(&self, doc: &PdfDocument, index: usize, scale: f32) -> SnipResult<RgbImage> {
        doc.render_page(index, scale)
    }

    /// Render the clipped sub-area of a page at an export scale
    ///
    /// The rectangle is normalized first; a zero-area rectangle is
    /// rejected with `InvalidRegion` before any rasterization happens.
    /// A rectangle reaching past the page edges is clamped to the page.
    ///
    /// # Arguments
    /// * `doc` - The opened document
    /// * `index` - Zero-based page index
    /// * `page_rect` - Clipping rectangle in page-space points
    /// * `export_scale` - Positive scale factor for the output bitmap
    ///
    /// # Returns
    /// The cropped bitmap, or `InvalidRegion` / `PageOutOfRange` / `Render`
    pub fn extract_region(
        &self,
        doc: &PdfDocument,
        index: usize,
        page_rect: PageRect,
        export_scale: f32,
    ) -> SnipResult<RgbImage> {
        let rect = page_rect.normalized();
        if rect.is_degenerate() {
            return Err(SnipError::InvalidRegion {
                width: rect.width(),
                height: rect.height(),
            });
        }

        info!(
            "Extracting region ({}, {})-({}, {}) of page {} at export scale {}",
            rect.x0, rect.y0, rect.x1, rect.y1, index, export_scale
        );

        let full = doc.render_page(index, export_scale)?;
        let region = clamp_to_image(&rect, export_scale, full.width(), full.height());

        let Some(region) = region else {
            // Selection lies entirely outside the page
            return Err(SnipError::InvalidRegion {
                width: rect.width(),
                height: rect.height(),
            });
        };

        debug!(
            "Cropping {}x{} pixels at ({}, {})",
            region.width, region.height, region.x, region.y
        );

        Ok(image::imageops::crop_imm(&full, region.x, region.y, region.width, region.height)
            .to_image())
    }

    /// Write a bitmap to disk as PNG
    ///
    /// # Arguments
    /// * `image` - The bitmap to persist
    /// * `path` - Destination path
    ///
    /// # Returns
    /// Result indicating success or an I/O error
    pub fn persist(&self, image: &RgbImage, path: &Path) -> SnipResult<()> {
        info!("Saving {}x{} image to {}", image.width(), image.height(), path.display());

        image.save(path).map_err(|e| match e {
            image::ImageError::IoError(io_err) => SnipError::Io(io_err),
            other => SnipError::Io(io::Error::other(other.to_string())),
        })
    }
}

impl Default for RegionExtractor {
    fn default() -> Self {
        RegionExtractor::new()
    }
}

/// Default output file name for an exported selection
///
/// Uses a local timestamp (`selection_YYYYMMDD_HHMMSS.png`) so repeated
/// exports within a session do not overwrite each other.
pub fn default_output_name() -> String {
    format!("selection_{}.png", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Convert a normalized page rectangle to a clamped pixel region
///
/// Outer bounds are floored/ceiled so the crop never loses covered
/// pixels to rounding. Returns `None` when the clamped region is empty.
fn clamp_to_image(rect: &PageRect, scale: f32, width: u32, height: u32) -> Option<PixelRegion> {
    let x0 = (rect.x0 * scale).floor().max(0.0);
    let y0 = (rect.y0 * scale).floor().max(0.0);
    let x1 = (rect.x1 * scale).ceil().min(width as f32);
    let y1 = (rect.y1 * scale).ceil().min(height as f32);

    if x0 >= x1 || y0 >= y1 {
        return None;
    }

    let x0 = x0 as u32;
    let y0 = y0 as u32;
    Some(PixelRegion::new(x0, y0, x1 as u32 - x0, y1 as u32 - y0))
}
