//! Panel style types: colors, border, font.

/// RGBA color with components in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a CSS-style hex color: `#RRGGBB` or `#RGB`, leading `#`
    /// optional, case-insensitive.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return None;
        }
        let (r, g, b) = match hex.len() {
            6 => (
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            ),
            3 => {
                let d = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
                (d(0)? * 17, d(1)? * 17, d(2)? * 17)
            }
            _ => return None,
        };
        Some(Self::rgb(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        ))
    }

    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

/// Border line style. Only affects rendering hosts; the simulator carries
/// it through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

/// Font description for the panel text.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// CSS-style fallback list, passed through to the host.
    pub family: String,
    /// Point size. Doubles as the average glyph width estimate in px
    /// for the sizing heuristics.
    pub size_pt: f64,
    pub color: Color,
}

impl FontSpec {
    pub fn avg_char_width(&self) -> f64 {
        self.size_pt
    }

    pub fn line_height(&self) -> f64 {
        (self.size_pt * 1.2).ceil()
    }
}

/// The static panel properties applied once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    pub font: FontSpec,
    pub bg_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub border_style: BorderStyle,
    pub padding: f64,
}

impl PanelStyle {
    /// Horizontal/vertical chrome on one side: padding plus border.
    pub fn edge_width(&self) -> f64 {
        self.padding + self.border_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parse_six_digit() {
        let c = Color::from_hex("#DDECFF").unwrap();
        assert!((c.r - 221.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 236.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 1.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn hex_parse_shorthand_and_case() {
        assert_eq!(Color::from_hex("#fff"), Some(Color::rgb(1.0, 1.0, 1.0)));
        assert_eq!(Color::from_hex("000000"), Some(Color::rgb(0.0, 0.0, 0.0)));
        assert_eq!(Color::from_hex("#AbCdEf"), Color::from_hex("#abcdef"));
    }

    #[test]
    fn hex_parse_rejects_garbage() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert_eq!(Color::from_hex("red"), None);
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(Color::from_hex("#DDECFF").unwrap().to_hex(), "#DDECFF");
    }

    #[test]
    fn border_style_strings() {
        assert_eq!(BorderStyle::from_str("solid"), Some(BorderStyle::Solid));
        assert_eq!(BorderStyle::from_str("DOTTED"), Some(BorderStyle::Dotted));
        assert_eq!(BorderStyle::from_str("groove"), None);
        assert_eq!(BorderStyle::Dashed.as_str(), "dashed");
    }

    #[test]
    fn font_metrics() {
        let font = FontSpec {
            family: "Verdana".into(),
            size_pt: 8.0,
            color: Color::default(),
        };
        assert_eq!(font.avg_char_width(), 8.0);
        assert_eq!(font.line_height(), 10.0);
    }
}
