//! Drag selection state for the displayed page

use crate::coordinate::{ScreenPoint, ScreenRect};

/// State of a rectangular drag selection in screen-space
///
/// Driven by a three-call protocol (`begin_at`, `update_end`, `finish`)
/// so any event loop, GUI framework, or scripted harness can feed it.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragSelection {
    /// Corner where the drag began
    start: Option<ScreenPoint>,
    /// Most recent corner of the drag
    end: Option<ScreenPoint>,
    /// Whether a drag is currently in progress
    is_selecting: bool,
}

impl DragSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new drag at a point, discarding any previous selection
    pub fn begin_at(&mut self, point: ScreenPoint) {
        self.start = Some(point);
        self.end = Some(point);
        self.is_selecting = true;
    }

    /// Update the live corner while the drag is in progress
    pub fn update_end(&mut self, point: ScreenPoint) {
        if self.is_selecting {
            self.end = Some(point);
        }
    }

    /// Finish the drag at a point, returning the captured rectangle
    pub fn finish(&mut self, point: ScreenPoint) -> Option<ScreenRect> {
        if self.is_selecting {
            self.end = Some(point);
            self.is_selecting = false;
        }
        self.completed_rect()
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
        self.is_selecting = false;
    }

    /// Check whether a completed selection exists
    pub fn has_selection(&self) -> bool {
        self.start.is_some() && self.end.is_some() && !self.is_selecting
    }

    /// The captured rectangle, if a drag has completed
    pub fn completed_rect(&self) -> Option<ScreenRect> {
        if self.is_selecting {
            return None;
        }
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(ScreenRect::new(start, end)),
            _ => None,
        }
    }
}
