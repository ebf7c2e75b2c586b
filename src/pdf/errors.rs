//! Custom error types for PDF region extraction

use std::fmt;
use std::io;

/// Extraction-specific error types
#[derive(Debug)]
pub enum SnipError {
    /// Document could not be opened (missing, unreadable, or not a PDF)
    Load(String),
    /// Page index outside [0, page_count)
    PageOutOfRange { index: usize, count: usize },
    /// Rasterization failure (corrupt page data)
    Render(String),
    /// Export rectangle has zero or negative area after normalization
    InvalidRegion { width: f32, height: f32 },
    /// No completed drag selection to extract
    NoSelection,
    /// I/O error while writing output
    Io(io::Error),
    /// Platform print/open dispatch failure
    PrintDispatch(String),
    /// Malformed CLI or API argument
    InvalidArgument(String),
}

impl fmt::Display for SnipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnipError::Load(msg) => write!(f, "Failed to load document: {}", msg),
            SnipError::PageOutOfRange { index, count } => {
                write!(f, "Page index {} out of range (document has {} pages)", index, count)
            }
            SnipError::Render(msg) => write!(f, "Render error: {}", msg),
            SnipError::InvalidRegion { width, height } => {
                write!(f, "Invalid export region: {}x{} points", width, height)
            }
            SnipError::NoSelection => write!(f, "No selection has been captured"),
            SnipError::Io(e) => write!(f, "I/O error: {}", e),
            SnipError::PrintDispatch(msg) => write!(f, "Print dispatch failed: {}", msg),
            SnipError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for SnipError {}

impl From<io::Error> for SnipError {
    fn from(error: io::Error) -> Self {
        SnipError::Io(error)
    }
}

impl From<String> for SnipError {
    fn from(msg: String) -> Self {
        SnipError::InvalidArgument(msg)
    }
}

/// Result type for extraction operations
pub type SnipResult<T> = Result<T, SnipError>;
