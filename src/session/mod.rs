//! Interactive extraction session
//!
//! One explicit object holds what a GUI shell would otherwise keep in
//! ambient globals: the open document, current page index, display
//! scale, and the drag selection. Every operation runs synchronously on
//! the calling thread.
//!
//! A captured selection is only meaningful against the display transform
//! that was active when it was captured, so navigating pages, changing
//! zoom, or loading another document clears it.

mod selection;

pub use selection::DragSelection;

use std::path::{Path, PathBuf};

use image::RgbImage;
use log::info;

use crate::coordinate::{DisplayTransform, ScreenPoint, ScreenRect};
use crate::extractor::{default_output_name, RegionExtractor};
use crate::pdf::{PdfDocument, SnipError, SnipResult};

/// Default display scale applied after a document load
const DEFAULT_DISPLAY_SCALE: f32 = 1.0;

/// Session state for interactive region extraction
pub struct SnipSession {
    document: Option<PdfDocument>,
    current_page: usize,
    display_scale: f32,
    selection: DragSelection,
    extractor: RegionExtractor,
}

impl SnipSession {
    /// Create an empty session with no document loaded
    pub fn new() -> Self {
        SnipSession {
            document: None,
            current_page: 0,
            display_scale: DEFAULT_DISPLAY_SCALE,
            selection: DragSelection::new(),
            extractor: RegionExtractor::new(),
        }
    }

    /// Open a document, resetting page, display scale and selection
    ///
    /// On failure the previously loaded document (if any) stays loaded
    /// and the session state is unchanged.
    pub fn load_document(&mut self, path: &Path) -> SnipResult<()> {
        let document = PdfDocument::open(path)?;
        info!(
            "Loaded {} ({} pages)",
            path.display(),
            document.page_count()
        );

        self.document = Some(document);
        self.current_page = 0;
        self.display_scale = DEFAULT_DISPLAY_SCALE;
        self.selection.clear();
        Ok(())
    }

    /// Whether a document is currently loaded
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// The loaded document
    pub fn document(&self) -> SnipResult<&PdfDocument> {
        self.document
            .as_ref()
            .ok_or_else(|| SnipError::Load("no document loaded".to_string()))
    }

    /// Zero-based index of the displayed page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The active display scale factor
    pub fn display_scale(&self) -> f32 {
        self.display_scale
    }

    /// The display transform for the current page and scale
    pub fn display_transform(&self) -> DisplayTransform {
        DisplayTransform::new(self.display_scale)
    }

    /// Advance to the next page, invalidating the selection
    ///
    /// # Returns
    /// true if the page changed, false when already on the last page
    pub fn next_page(&mut self) -> bool {
        let count = match &self.document {
            Some(doc) => doc.page_count(),
            None => return false,
        };
        if self.current_page + 1 >= count {
            return false;
        }
        self.current_page += 1;
        self.selection.clear();
        true
    }

    /// Go back to the previous page, invalidating the selection
    ///
    /// # Returns
    /// true if the page changed, false when already on the first page
    pub fn prev_page(&mut self) -> bool {
        if self.document.is_none() || self.current_page == 0 {
            return false;
        }
        self.current_page -= 1;
        self.selection.clear();
        true
    }

    /// Change the display scale, invalidating the selection
    pub fn set_display_scale(&mut self, scale: f32) {
        self.display_scale = scale;
        self.selection.clear();
    }

    /// Render the current page at the display scale
    pub fn render_current_page(&self) -> SnipResult<RgbImage> {
        let doc = self.document()?;
        self.extractor
            .render_page(doc, self.current_page, self.display_scale)
    }

    /// Begin a drag at a screen point, discarding any prior selection
    pub fn begin_selection(&mut self, point: ScreenPoint) {
        self.selection.begin_at(point);
    }

    /// Update the live corner of an in-progress drag
    pub fn update_selection(&mut self, point: ScreenPoint) {
        self.selection.update_end(point);
    }

    /// End the drag, returning the captured screen rectangle
    pub fn end_selection(&mut self, point: ScreenPoint) -> Option<ScreenRect> {
        self.selection.finish(point)
    }

    /// The captured rectangle, if a completed selection exists
    pub fn selection_rect(&self) -> Option<ScreenRect> {
        self.selection.completed_rect()
    }

    /// Extract the selected region at an export scale
    ///
    /// The captured screen rectangle is mapped through the current
    /// display transform into page-space, then rendered at
    /// `export_scale` regardless of the preview zoom.
    ///
    /// # Returns
    /// The cropped bitmap, or `NoSelection` when no completed drag exists
    pub fn extract_selection(&self, export_scale: f32) -> SnipResult<RgbImage> {
        let rect = self.selection.completed_rect().ok_or(SnipError::NoSelection)?;
        let doc = self.document()?;

        let page_rect = self.display_transform().to_page_rect(&rect);
        self.extractor
            .extract_region(doc, self.current_page, page_rect, export_scale)
    }

    /// Extract the selection and write it to disk as PNG
    ///
    /// # Arguments
    /// * `export_scale` - Positive scale factor for the output bitmap
    /// * `path` - Destination path, or None for a timestamped default
    ///
    /// # Returns
    /// The path the image was written to
    pub fn save_selection(
        &self,
        export_scale: f32,
        path: Option<&Path>,
    ) -> SnipResult<PathBuf> {
        let image = self.extract_selection(export_scale)?;

        let destination = match path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(default_output_name()),
        };

        self.extractor.persist(&image, &destination)?;
        info!("Selection saved as {}", destination.display());
        Ok(destination)
    }
}

impl Default for SnipSession {
    fn default() -> Self {
        SnipSession::new()
    }
}
