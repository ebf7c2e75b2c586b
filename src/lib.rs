pub mod pdf;
pub mod coordinate;
pub mod extractor;
pub mod session;
pub mod dispatch;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::PdfSnip;

pub use pdf::{PdfDocument, SnipError, SnipResult};
pub use session::{DragSelection, SnipSession};
pub use extractor::{PixelRegion, RegionExtractor};
pub use coordinate::{DisplayTransform, PageRect, ScreenPoint, ScreenRect};
