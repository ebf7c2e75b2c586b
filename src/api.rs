use std::path::{Path, PathBuf};

use image::RgbImage;
use log::info;

use crate::coordinate::ScreenRect;
use crate::dispatch;
use crate::pdf::{PdfDocument, SnipError, SnipResult};
use crate::session::SnipSession;
use crate::utils::logger::Logger;

/// Main interface to the pdfsnip library
pub struct PdfSnip {
    logger: Logger,
}

impl PdfSnip {
    /// Create a new PdfSnip instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "pdfsnip.log"
    ///
    /// # Returns
    /// A PdfSnip instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> SnipResult<Self> {
        let log_path = log_file.unwrap_or("pdfsnip.log");
        let logger = Logger::new(log_path)?;
        Ok(PdfSnip { logger })
    }

    /// Describe a PDF document: page count and per-page point sizes
    ///
    /// # Arguments
    /// * `input_path` - Path to the PDF file
    ///
    /// # Returns
    /// String containing the document summary, or an error
    pub fn info(&self, input_path: &str) -> SnipResult<String> {
        let doc = PdfDocument::open(Path::new(input_path))?;

        let mut result = format!("Document: {}\n", input_path);
        result.push_str(&format!("  Pages: {}\n", doc.page_count()));

        for index in 0..doc.page_count() {
            let (width, height) = doc.page_size(index)?;
            result.push_str(&format!(
                "  Page {}: {:.1} x {:.1} points\n",
                index + 1,
                width,
                height
            ));
        }

        self.logger.log(&format!("Inspected {}", input_path))?;
        Ok(result)
    }

    /// Extract a screen-space selection of a page and write it as PNG
    ///
    /// The rectangle is a scripted stand-in for the GUI drag gesture:
    /// two corner points in on-screen pixels at `display_scale`. It is
    /// replayed through the session's selection protocol, mapped into
    /// page-space, and rendered at `export_scale`.
    ///
    /// # Arguments
    /// * `input_path` - Path to the input PDF file
    /// * `page` - Zero-based page index
    /// * `rect` - Drag rectangle "x1,y1,x2,y2" in screen pixels
    /// * `display_scale` - Scale the rectangle coordinates refer to
    /// * `export_scale` - Scale for the output bitmap
    /// * `output_path` - Destination, or None for a timestamped default
    ///
    /// # Returns
    /// The path the image was written to
    pub fn extract(
        &self,
        input_path: &str,
        page: usize,
        rect: &str,
        display_scale: f32,
        export_scale: f32,
        output_path: Option<&str>,
    ) -> SnipResult<PathBuf> {
        let session = self.replay_selection(input_path, page, rect, display_scale)?;
        let written = session.save_selection(export_scale, output_path.map(Path::new))?;

        self.logger
            .log(&format!("Extracted {} -> {}", input_path, written.display()))?;
        Ok(written)
    }

    /// Extract a screen-space selection of a page into memory
    ///
    /// Same semantics as `extract`, but returns the bitmap instead of
    /// writing it to disk.
    pub fn extract_to_buffer(
        &self,
        input_path: &str,
        page: usize,
        rect: &str,
        display_scale: f32,
        export_scale: f32,
    ) -> SnipResult<RgbImage> {
        let session = self.replay_selection(input_path, page, rect, display_scale)?;
        session.extract_selection(export_scale)
    }

    /// Send a previously exported file to the system print handler
    ///
    /// # Arguments
    /// * `path` - Path to the file to print
    ///
    /// # Returns
    /// Result indicating success or a dispatch error
    pub fn print(&self, path: &str) -> SnipResult<()> {
        dispatch::print_file(Path::new(path))?;
        self.logger.log(&format!("Sent to printer: {}", path))?;
        Ok(())
    }

    /// Load a document and replay a drag gesture through a session
    fn replay_selection(
        &self,
        input_path: &str,
        page: usize,
        rect: &str,
        display_scale: f32,
    ) -> SnipResult<SnipSession> {
        let rect = ScreenRect::from_string(rect).map_err(SnipError::InvalidArgument)?;

        let mut session = SnipSession::new();
        session.load_document(Path::new(input_path))?;
        session.set_display_scale(display_scale);

        while session.current_page() < page {
            if !session.next_page() {
                return Err(SnipError::PageOutOfRange {
                    index: page,
                    count: session.document()?.page_count(),
                });
            }
        }

        info!(
            "Replaying drag ({}, {}) -> ({}, {}) on page {} at display scale {}",
            rect.start.x, rect.start.y, rect.end.x, rect.end.y, page, display_scale
        );

        session.begin_selection(rect.start);
        session.update_selection(rect.end);
        let _ = session.end_selection(rect.end);

        Ok(session)
    }
}
