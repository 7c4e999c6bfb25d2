//! Visible-window geometry for panel placement.

/// Pixels kept clear of the right and bottom visible edges when deciding
/// which side of the pointer the panel goes on.
pub const EDGE_MARGIN: f64 = 20.0;

/// The window onto the document: size in pixels plus scroll offsets.
/// All placement math runs in document coordinates, so the usable edges
/// are scroll-adjusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn with_scroll(width: f64, height: f64, scroll_x: f64, scroll_y: f64) -> Self {
        Self {
            width,
            height,
            scroll_x,
            scroll_y,
        }
    }

    /// Rightmost document x a panel edge may reach before the panel
    /// flips to the left side of the pointer.
    pub fn visible_right(&self) -> f64 {
        self.scroll_x + self.width - EDGE_MARGIN
    }

    /// Bottom counterpart of [`visible_right`](Self::visible_right).
    pub fn visible_bottom(&self) -> f64 {
        self.scroll_y + self.height - EDGE_MARGIN
    }

    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.scroll_x = x;
        self.scroll_y = y;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}
