//! PDF document access
//!
//! This module wraps the mupdf document handle and exposes the small
//! surface the extractor needs: page count, intrinsic page size, and
//! full-page rasterization at an arbitrary scale factor.

use std::path::Path;

use image::{ImageBuffer, RgbImage};
use log::{debug, info};
use mupdf::{Colorspace, Document, Matrix};

use crate::pdf::errors::{SnipError, SnipResult};

/// An opened PDF document
///
/// Owns the underlying mupdf handle for the lifetime of the session.
/// Pages are addressed by zero-based index.
pub struct PdfDocument {
    doc: Document,
    page_count: usize,
}

impl PdfDocument {
    /// Open a PDF file from disk
    ///
    /// The page count is probed during open so a missing, unreadable or
    /// structurally broken file fails here rather than on first render.
    ///
    /// # Arguments
    /// * `path` - Path to the PDF file
    ///
    /// # Returns
    /// An opened document, or `SnipError::Load` on failure
    pub fn open(path: &Path) -> SnipResult<Self> {
        info!("Opening document: {}", path.display());

        let doc = Document::open(path.to_string_lossy().as_ref())
            .map_err(|e| SnipError::Load(format!("{}: {}", path.display(), e)))?;

        let page_count = doc
            .page_count()
            .map_err(|e| SnipError::Load(format!("{}: {}", path.display(), e)))?;
        if page_count <= 0 {
            return Err(SnipError::Load(format!(
                "{}: document has no pages",
                path.display()
            )));
        }

        info!("Document opened with {} pages", page_count);
        Ok(PdfDocument {
            doc,
            page_count: page_count as usize,
        })
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Intrinsic page size in points (page-space width, height)
    ///
    /// # Arguments
    /// * `index` - Zero-based page index
    ///
    /// # Returns
    /// The page dimensions, or an error for an out-of-range index
    pub fn page_size(&self, index: usize) -> SnipResult<(f32, f32)> {
        self.check_index(index)?;

        let page = self
            .doc
            .load_page(index as i32)
            .map_err(|e| SnipError::Render(format!("loading page {}: {}", index, e)))?;
        let bounds = page
            .bounds()
            .map_err(|e| SnipError::Render(format!("page {} bounds: {}", index, e)))?;

        Ok((bounds.x1 - bounds.x0, bounds.y1 - bounds.y0))
    }

    /// Render a full page to an RGB image
    ///
    /// Pixel dimensions scale linearly with the scale factor: rendering
    /// at 2.0 yields an image twice as wide and tall (within rounding)
    /// as rendering at 1.0.
    ///
    /// # Arguments
    /// * `index` - Zero-based page index
    /// * `scale` - Positive scale factor from page-space points to pixels
    ///
    /// # Returns
    /// The rasterized page, or `PageOutOfRange` / `Render` on failure
    pub fn render_page(&self, index: usize, scale: f32) -> SnipResult<RgbImage> {
        self.check_index(index)?;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SnipError::Render(format!("invalid scale factor {}", scale)));
        }

        debug!("Rendering page {} at scale {}", index, scale);

        let page = self
            .doc
            .load_page(index as i32)
            .map_err(|e| SnipError::Render(format!("loading page {}: {}", index, e)))?;

        let matrix = Matrix::new_scale(scale, scale);
        let pixmap = page
            .to_pixmap(&matrix, &Colorspace::device_rgb(), false, false)
            .map_err(|e| SnipError::Render(format!("rasterizing page {}: {}", index, e)))?;

        pixmap_to_image(&pixmap)
    }

    fn check_index(&self, index: usize) -> SnipResult<()> {
        if index >= self.page_count {
            return Err(SnipError::PageOutOfRange {
                index,
                count: self.page_count,
            });
        }
        Ok(())
    }
}

/// Convert a mupdf pixmap into an `RgbImage`
///
/// The pixmap stride may exceed width * channels; rows are repacked when
/// it does.
fn pixmap_to_image(pixmap: &mupdf::Pixmap) -> SnipResult<RgbImage> {
    let n = pixmap.n() as usize;
    if n < 3 {
        return Err(SnipError::Render(format!(
            "unsupported pixmap format: {} channels",
            n
        )));
    }

    let width = pixmap.width();
    let height = pixmap.height();
    let stride = pixmap.stride() as usize;
    let samples = pixmap.samples();
    let row_bytes = width as usize * n;

    if samples.len() < stride.saturating_mul(height as usize) || row_bytes > stride {
        return Err(SnipError::Render("pixmap buffer size mismatch".to_string()));
    }

    let data = if n == 3 && stride == row_bytes {
        samples.to_vec()
    } else {
        let mut packed = Vec::with_capacity(width as usize * height as usize * 3);
        for row in 0..height as usize {
            let row_samples = &samples[row * stride..row * stride + row_bytes];
            if n == 3 {
                packed.extend_from_slice(row_samples);
            } else {
                // RGBA or similar: keep the first three channels
                for pixel in row_samples.chunks_exact(n) {
                    packed.extend_from_slice(&pixel[..3]);
                }
            }
        }
        packed
    };

    ImageBuffer::from_raw(width, height, data)
        .ok_or_else(|| SnipError::Render("pixmap buffer size mismatch".to_string()))
}
