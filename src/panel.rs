//! The tooltip panel element.
//!
//! Stand-in for the single absolutely-positioned element a rendering
//! client would own: style applied once at startup, then content,
//! position, size and visibility driven by the controller. [`measure`]
//! estimates the rendered size the way a layout engine would report it.
//!
//! [`measure`]: Panel::measure

use crate::style::PanelStyle;

#[derive(Debug, Clone)]
pub struct Panel {
    pub style: PanelStyle,
    /// Plain text content. Markup never lands here unsanitized.
    pub content: String,
    /// Top-left corner in document coordinates. May be negative when
    /// the panel does not fit the viewport.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub visible: bool,
}

impl Panel {
    pub fn new(style: PanelStyle, width: f64) -> Self {
        let mut panel = Self {
            style,
            content: String::new(),
            x: 0.0,
            y: 0.0,
            width,
            height: 0.0,
            visible: false,
        };
        panel.measure();
        panel
    }

    /// Estimate rendered height for the current content and width.
    ///
    /// Real text layout is out of scope: lines come from the average
    /// character width, height from the font's line height plus padding
    /// and border on both sides. Good enough for edge-flip decisions.
    pub fn measure(&mut self) {
        let edge = self.style.edge_width();
        let char_width = self.style.font.avg_char_width();
        let interior = (self.width - 2.0 * edge).max(char_width);
        let per_line = (interior / char_width).floor().max(1.0);

        let mut lines = 0usize;
        for segment in self.content.split('\n') {
            let chars = segment.chars().count() as f64;
            lines += (chars / per_line).ceil().max(1.0) as usize;
        }
        self.height = lines as f64 * self.style.font.line_height() + 2.0 * edge;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TipConfig;

    fn panel() -> Panel {
        let config = TipConfig::default();
        Panel::new(config.panel_style(), config.width)
    }

    #[test]
    fn starts_hidden_with_configured_width() {
        let panel = panel();
        assert!(!panel.visible);
        assert_eq!(panel.width, 240.0);
    }

    #[test]
    fn single_line_height() {
        let mut panel = panel();
        panel.content = "World Health Organization".into();
        panel.measure();
        // line height 10, edge 5 per side
        assert_eq!(panel.height, 20.0);
    }

    #[test]
    fn long_content_wraps() {
        let mut panel = panel();
        // interior 230px / 8px per char = 28 chars per line
        panel.content = "x".repeat(29);
        panel.measure();
        assert_eq!(panel.height, 30.0);

        panel.content = "x".repeat(56);
        panel.measure();
        assert_eq!(panel.height, 30.0);

        panel.content = "x".repeat(57);
        panel.measure();
        assert_eq!(panel.height, 40.0);
    }

    #[test]
    fn newlines_force_lines() {
        let mut panel = panel();
        panel.content = "a\nb\nc".into();
        panel.measure();
        assert_eq!(panel.height, 40.0);
    }

    #[test]
    fn empty_content_still_one_line() {
        let mut panel = panel();
        panel.content.clear();
        panel.measure();
        assert_eq!(panel.height, 20.0);
    }
}
