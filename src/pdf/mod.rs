//! PDF document handling
//!
//! This module provides the document wrapper over the mupdf renderer
//! and the error taxonomy shared across the crate.

pub mod document;
pub mod errors;

pub use document::PdfDocument;
pub use errors::{SnipError, SnipResult};
