//! Domain types for lofi-journey.
//!
//! Draw commands are plain values: no identity beyond their position in a
//! screen's command list, and list order is paint order (later = on top).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Content identity of a built screen.
///
/// Wraps a 32-byte BLAKE3 hash of the command list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(pub [u8; 32]);

impl ContentHash {
    /// Returns the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// First 12 hex chars, enough to eyeball a golden.
    pub fn short(&self) -> String {
        self.to_hex()[..12].to_string()
    }
}

impl Serialize for ContentHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Absolute canvas position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A resolved color string, e.g. `#007AFF` or `white`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// PAINT & TYPE
// ============================================================================

/// Interior paint of a shape or glyph run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Unfilled (`fill="none"`).
    None,
    Solid(Color),
}

impl Paint {
    pub fn solid(color: &Color) -> Self {
        Paint::Solid(color.clone())
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Paint::Solid(_))
    }

    /// The fill color, if any.
    pub fn color(&self) -> Option<&Color> {
        match self {
            Paint::None => None,
            Paint::Solid(c) => Some(c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    /// Hairline stroke (1px).
    pub fn hairline(color: &Color) -> Self {
        Self {
            color: color.clone(),
            width: 1.0,
        }
    }
}

/// Horizontal alignment of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    Start,
    Middle,
}

impl Anchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// The app's text face.
    #[default]
    Text,
    /// Platform system stack, used by the pricing screen.
    System,
}

impl FontFamily {
    pub fn css(self) -> &'static str {
        match self {
            FontFamily::Text => "SF Pro Text",
            FontFamily::System => "-apple-system, SF Pro Text, Helvetica",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size: u32,
    pub weight: FontWeight,
}

impl FontSpec {
    pub const fn regular(size: u32) -> Self {
        Self {
            family: FontFamily::Text,
            size,
            weight: FontWeight::Regular,
        }
    }

    pub const fn semibold(size: u32) -> Self {
        Self {
            family: FontFamily::Text,
            size,
            weight: FontWeight::Semibold,
        }
    }

    pub const fn bold(size: u32) -> Self {
        Self {
            family: FontFamily::Text,
            size,
            weight: FontWeight::Bold,
        }
    }

    /// Same size and weight in the system stack.
    pub const fn system(self) -> Self {
        Self {
            family: FontFamily::System,
            ..self
        }
    }

    /// CSS `style` attribute value.
    pub fn css(&self) -> String {
        let mut out = format!(
            "font-family: {}; font-size: {}px",
            self.family.css(),
            self.size
        );
        match self.weight {
            FontWeight::Regular => {}
            FontWeight::Semibold => out.push_str("; font-weight: 600"),
            FontWeight::Bold => out.push_str("; font-weight: bold"),
        }
        out
    }
}

// ============================================================================
// DRAW COMMANDS
// ============================================================================

/// One primitive paint instruction with fully resolved geometry and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Rect {
        pos: Point,
        size: Size,
        corner_radius: f64,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Paint,
    },
    /// Closed polygon.
    Path { points: Vec<Point>, fill: Paint },
    Text {
        position: Point,
        content: String,
        anchor: Anchor,
        fill: Paint,
        font: FontSpec,
    },
}

impl DrawCommand {
    /// Text content, for text commands.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn fill(&self) -> &Paint {
        match self {
            DrawCommand::Rect { fill, .. }
            | DrawCommand::Circle { fill, .. }
            | DrawCommand::Path { fill, .. }
            | DrawCommand::Text { fill, .. } => fill,
        }
    }

    /// Short variant label for reports and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DrawCommand::Rect { .. } => "rect",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Path { .. } => "path",
            DrawCommand::Text { .. } => "text",
        }
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// One static mockup: a name plus its ordered draw commands.
///
/// Built fresh per call and owned by the caller; never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub name: String,
    pub commands: Vec<DrawCommand>,
}

impl Screen {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = DrawCommand>) {
        self.commands.extend(commands);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text commands whose content equals `content`.
    pub fn texts_equal<'a>(&'a self, content: &'a str) -> impl Iterator<Item = &'a DrawCommand> {
        self.commands
            .iter()
            .filter(move |c| c.text() == Some(content))
    }
}

/// The screen types the builder knows how to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenKind {
    Welcome,
    Discovery,
    Playlist,
    Community,
    Events,
    Premium,
    Exclusive,
    Library,
    Favorites,
    Analytics,
    Profile,
    ProfileActivity,
    Preferences,
}

impl ScreenKind {
    /// Every kind, in journey order.
    pub const ALL: [ScreenKind; 13] = [
        ScreenKind::Welcome,
        ScreenKind::Discovery,
        ScreenKind::Playlist,
        ScreenKind::Community,
        ScreenKind::Events,
        ScreenKind::Premium,
        ScreenKind::Exclusive,
        ScreenKind::Library,
        ScreenKind::Favorites,
        ScreenKind::Analytics,
        ScreenKind::Profile,
        ScreenKind::ProfileActivity,
        ScreenKind::Preferences,
    ];

    /// Stable identifier used on the command line and in file names.
    pub fn slug(self) -> &'static str {
        match self {
            ScreenKind::Welcome => "welcome",
            ScreenKind::Discovery => "discovery",
            ScreenKind::Playlist => "playlist",
            ScreenKind::Community => "community",
            ScreenKind::Events => "events",
            ScreenKind::Premium => "premium",
            ScreenKind::Exclusive => "exclusive",
            ScreenKind::Library => "library",
            ScreenKind::Favorites => "favorites",
            ScreenKind::Analytics => "analytics",
            ScreenKind::Profile => "profile",
            ScreenKind::ProfileActivity => "profile-activity",
            ScreenKind::Preferences => "preferences",
        }
    }

    /// Whether the nav bar shows a back chevron.
    pub fn has_back(self) -> bool {
        self != ScreenKind::Welcome
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ScreenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenKind::ALL
            .iter()
            .copied()
            .find(|k| k.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = ScreenKind::ALL.iter().map(|k| k.slug()).collect();
                format!("Unknown screen '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_kind_slugs_round_trip() {
        for kind in ScreenKind::ALL {
            assert_eq!(kind.slug().parse::<ScreenKind>().unwrap(), kind);
        }
    }

    #[test]
    fn screen_kind_parse_is_case_insensitive() {
        assert_eq!("Profile-Activity".parse::<ScreenKind>().unwrap(), ScreenKind::ProfileActivity);
    }

    #[test]
    fn unknown_screen_kind_lists_choices() {
        let err = "settings".parse::<ScreenKind>().unwrap_err();
        assert!(err.contains("settings"));
        assert!(err.contains("welcome"));
    }

    #[test]
    fn font_css_matches_weight() {
        assert_eq!(
            FontSpec::semibold(17).css(),
            "font-family: SF Pro Text; font-size: 17px; font-weight: 600"
        );
        assert_eq!(FontSpec::regular(15).css(), "font-family: SF Pro Text; font-size: 15px");
        assert!(FontSpec::bold(24).system().css().starts_with("font-family: -apple-system"));
    }

    #[test]
    fn content_hash_hex_is_64_chars() {
        let hash = ContentHash([0xab; 32]);
        assert_eq!(hash.to_hex().len(), 64);
        assert_eq!(hash.short(), "abababababab");
    }

    #[test]
    fn draw_command_serializes_with_kind_tag() {
        let cmd = DrawCommand::Circle {
            center: Point::new(1.0, 2.0),
            radius: 3.0,
            fill: Paint::None,
        };
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["kind"], "circle");
        assert_eq!(value["fill"], "none");
    }
}
