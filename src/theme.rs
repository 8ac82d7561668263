//! Color semantics and device geometry.
//!
//! Centralized theme definitions shared read-only by every screen builder.
//! Pure data, except for `load_theme` which reads a JSON override.
//!
//! Color roles:
//! - background: screen and nav-bar fill
//! - text: primary labels
//! - primary: actions, selection, brand mark
//! - secondary: supporting copy and placeholders
//! - border: outlines, unselected chips and tabs
//! - surface: cards, status bar, selected chips and tabs

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Color;

// ============================================================================
// THEME
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub primary: Color,
    pub secondary: Color,
    pub border: Color,
    pub surface: Color,
    /// Image and avatar placeholders.
    pub placeholder: Color,
    /// Camera notch.
    pub notch: Color,
    /// Labels drawn on top of primary fills.
    pub on_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::new("#FFFFFF"),
            text: Color::new("#000000"),
            primary: Color::new("#007AFF"),
            secondary: Color::new("#666666"),
            border: Color::new("#C5C5C7"),
            surface: Color::new("#F5F5F5"),
            placeholder: Color::new("#E5E5EA"),
            notch: Color::new("#333333"),
            on_primary: Color::new("white"),
        }
    }
}

// ============================================================================
// DEVICE FRAME
// ============================================================================

/// Canvas and phone-bezel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceFrame {
    pub width: f64,
    pub height: f64,
    /// Horizontal inset of content from the bezel.
    pub padding: f64,
    pub corner_radius: f64,
    pub bezel_stroke: f64,
    pub status_bar_height: f64,
    pub nav_bar_height: f64,
    pub notch_width: f64,
    pub notch_height: f64,
}

impl Default for DeviceFrame {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 640.0,
            padding: 20.0,
            corner_radius: 40.0,
            bezel_stroke: 2.0,
            status_bar_height: 44.0,
            nav_bar_height: 44.0,
            notch_width: 120.0,
            notch_height: 30.0,
        }
    }
}

impl DeviceFrame {
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Width of a full-bleed card between the side paddings.
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// First y below the status and nav bars.
    pub fn content_top(&self) -> f64 {
        self.status_bar_height + self.nav_bar_height
    }
}

// ============================================================================
// CANVAS
// ============================================================================

/// Everything a builder needs besides its content: passed by reference,
/// never mutated after startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    pub theme: Theme,
    pub frame: DeviceFrame,
}

impl Canvas {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            frame: DeviceFrame::default(),
        }
    }
}

/// Load a theme override from a JSON file.
///
/// Missing roles keep their default color.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a theme object.
pub fn load_theme(path: &Path) -> io::Result<Theme> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_theme_has_expected_roles() {
        let theme = Theme::default();
        assert_eq!(theme.primary.as_str(), "#007AFF");
        assert_eq!(theme.surface.as_str(), "#F5F5F5");
        assert_eq!(theme.border.as_str(), "#C5C5C7");
    }

    #[test]
    fn default_frame_is_phone_sized() {
        let frame = DeviceFrame::default();
        assert_eq!(frame.width, 360.0);
        assert_eq!(frame.height, 640.0);
        assert_eq!(frame.content_width(), 320.0);
        assert_eq!(frame.content_top(), 88.0);
    }

    #[test]
    fn partial_theme_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r##"{{"primary": "#FF2D55"}}"##).unwrap();

        let theme = load_theme(file.path()).unwrap();
        assert_eq!(theme.primary.as_str(), "#FF2D55");
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn malformed_theme_file_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_theme(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn missing_theme_file_errors() {
        assert!(load_theme(Path::new("/nonexistent/theme.json")).is_err());
    }
}
