//! Tooltip configuration persistence.
//!
//! Stores panel styling and timing settings as JSON at
//! `~/.local/share/tooltip-sim/config.json`. Loaded once on startup; the
//! controller captures the values at init and never re-reads them.

use crate::Result;
use crate::style::{BorderStyle, Color, FontSpec, PanelStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tooltip-sim")
        .join("config.json")
}

/// Persisted tooltip settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipConfig {
    /// Track the pointer while hovering. When false the panel is placed
    /// once per show and reveals without delay.
    #[serde(default = "default_true")]
    pub follow_mouse: bool,
    /// Panel width in px before the short-content shrink rule.
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Font size in points.
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_color")]
    pub font_color: String,
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_border_style")]
    pub border_style: String,
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Seconds a shown panel stays up before the forced hide. The timer
    /// itself adds a one-second grace on top.
    #[serde(default = "default_hide_after")]
    pub hide_after_secs: f64,
    /// Panel offset from the pointer, applied on whichever side the
    /// placement picks.
    #[serde(default = "default_offset_x")]
    pub offset_x: f64,
    #[serde(default = "default_offset_y")]
    pub offset_y: f64,
}

fn default_true() -> bool { true }
fn default_width() -> f64 { 240.0 }
fn default_font_family() -> String { "Verdana, arial, helvetica, sans-serif".into() }
fn default_font_size() -> f64 { 8.0 }
fn default_font_color() -> String { "#000000".into() }
fn default_bg_color() -> String { "#DDECFF".into() }
fn default_border_color() -> String { "#000000".into() }
fn default_border_width() -> f64 { 1.0 }
fn default_border_style() -> String { "solid".into() }
fn default_padding() -> f64 { 4.0 }
fn default_hide_after() -> f64 { 100.0 }
fn default_offset_x() -> f64 { 8.0 }
fn default_offset_y() -> f64 { 12.0 }

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            follow_mouse: true,
            width: default_width(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_color: default_font_color(),
            bg_color: default_bg_color(),
            border_color: default_border_color(),
            border_width: default_border_width(),
            border_style: default_border_style(),
            padding: default_padding(),
            hide_after_secs: default_hide_after(),
            offset_x: default_offset_x(),
            offset_y: default_offset_y(),
        }
    }
}

impl TipConfig {
    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path()).unwrap_or_default()
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Persist to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&default_path())
    }

    /// Persist to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the style fields into renderer-ready values. Colors that
    /// fail to parse fall back with a warning.
    pub fn panel_style(&self) -> PanelStyle {
        PanelStyle {
            font: FontSpec {
                family: self.font_family.clone(),
                size_pt: self.font_size,
                color: parse_color(&self.font_color, "font", Color::rgb(0.0, 0.0, 0.0)),
            },
            bg_color: parse_color(&self.bg_color, "background", Color::rgb(1.0, 1.0, 1.0)),
            border_color: parse_color(&self.border_color, "border", Color::rgb(0.0, 0.0, 0.0)),
            border_width: self.border_width,
            border_style: BorderStyle::from_str(&self.border_style).unwrap_or_else(|| {
                tracing::warn!("Unknown border style {:?}, using solid", self.border_style);
                BorderStyle::Solid
            }),
            padding: self.padding,
        }
    }
}

fn parse_color(hex: &str, what: &str, fallback: Color) -> Color {
    match Color::from_hex(hex) {
        Some(color) => color,
        None => {
            tracing::warn!("Invalid {} color {:?}, using fallback", what, hex);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = TipConfig::default();
        assert!(config.follow_mouse);
        assert_eq!(config.width, 240.0);
        assert_eq!(config.font_size, 8.0);
        assert_eq!(config.bg_color, "#DDECFF");
        assert_eq!(config.border_width, 1.0);
        assert_eq!(config.padding, 4.0);
        assert_eq!(config.hide_after_secs, 100.0);
        assert_eq!(config.offset_x, 8.0);
        assert_eq!(config.offset_y, 12.0);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = TipConfig {
            follow_mouse: false,
            width: 320.0,
            hide_after_secs: 5.0,
            ..TipConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = TipConfig::load_from(&path).unwrap();
        assert!(!loaded.follow_mouse);
        assert_eq!(loaded.width, 320.0);
        assert_eq!(loaded.hide_after_secs, 5.0);
        assert_eq!(loaded.font_family, config.font_family);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let loaded: TipConfig =
            serde_json::from_str(r#"{ "width": 180.0, "follow_mouse": false }"#).unwrap();
        assert_eq!(loaded.width, 180.0);
        assert!(!loaded.follow_mouse);
        assert_eq!(loaded.bg_color, "#DDECFF");
        assert_eq!(loaded.hide_after_secs, 100.0);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TipConfig::load_from(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn corrupt_json_errors_and_lenient_load_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ \"width\": 240").unwrap();

        assert!(matches!(
            TipConfig::load_from(&path),
            Err(crate::Error::Config(_))
        ));

        // The same recovery load() applies at the default path.
        let config = TipConfig::load_from(&path).unwrap_or_default();
        assert_eq!(config.width, 240.0);
        assert!(config.follow_mouse);
    }

    #[test]
    fn bad_colors_fall_back() {
        let config = TipConfig {
            bg_color: "chartreuse".into(),
            border_style: "wavy".into(),
            ..TipConfig::default()
        };
        let style = config.panel_style();
        assert_eq!(style.bg_color, Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(style.border_style, BorderStyle::Solid);
        assert_eq!(style.font.color, Color::rgb(0.0, 0.0, 0.0));
    }
}
