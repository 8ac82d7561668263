//! Layout primitives shared by the screen builders.
//!
//! Pure functions: (canvas, cursor, content) → draw commands.
//! Builders own the vertical cursor; these helpers only place what they
//! are told to place and never look at neighbouring rows.

use crate::spec::{Chip, Entry, Stat, Tabs};
use crate::theme::Canvas;
use crate::types::{Anchor, DrawCommand, FontSpec, Paint, Point, Screen, Size, Stroke};

// ============================================================================
// TYPE SCALE
// ============================================================================

pub const FONT_NAV_TITLE: FontSpec = FontSpec::semibold(17);
pub const FONT_HEADING: FontSpec = FontSpec::semibold(17);
pub const FONT_DISPLAY: FontSpec = FontSpec::semibold(24);
pub const FONT_BODY: FontSpec = FontSpec::regular(15);
pub const FONT_ROW_TITLE: FontSpec = FontSpec::semibold(15);
pub const FONT_CAPTION: FontSpec = FontSpec::regular(13);
pub const FONT_BUTTON: FontSpec = FontSpec::semibold(17);
pub const FONT_GLYPH: FontSpec = FontSpec::regular(20);

/// Corner radius of cards, rows and thumbnails.
pub const CARD_RADIUS: f64 = 8.0;

/// Vertical distance from a row title baseline to its subtitle baseline.
pub const SUBTITLE_DY: f64 = 20.0;

pub const CHIP_HEIGHT: f64 = 32.0;
pub const CHIP_GAP: f64 = 10.0;
pub const TAB_HEIGHT: f64 = 44.0;
pub const TILE_GAP: f64 = 10.0;
pub const SEARCH_HEIGHT: f64 = 44.0;
pub const WIDE_BUTTON_HEIGHT: f64 = 50.0;

// ============================================================================
// COMMAND CONSTRUCTORS
// ============================================================================

pub fn rect(x: f64, y: f64, width: f64, height: f64, corner_radius: f64, fill: Paint) -> DrawCommand {
    DrawCommand::Rect {
        pos: Point::new(x, y),
        size: Size::new(width, height),
        corner_radius,
        fill,
        stroke: None,
    }
}

pub fn stroked_rect(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    corner_radius: f64,
    fill: Paint,
    stroke: Stroke,
) -> DrawCommand {
    DrawCommand::Rect {
        pos: Point::new(x, y),
        size: Size::new(width, height),
        corner_radius,
        fill,
        stroke: Some(stroke),
    }
}

pub fn circle(cx: f64, cy: f64, radius: f64, fill: Paint) -> DrawCommand {
    DrawCommand::Circle {
        center: Point::new(cx, cy),
        radius,
        fill,
    }
}

/// Left-aligned text.
pub fn label(x: f64, y: f64, content: &str, fill: Paint, font: FontSpec) -> DrawCommand {
    DrawCommand::Text {
        position: Point::new(x, y),
        content: content.to_string(),
        anchor: Anchor::Start,
        fill,
        font,
    }
}

pub fn centered_label(x: f64, y: f64, content: &str, fill: Paint, font: FontSpec) -> DrawCommand {
    DrawCommand::Text {
        position: Point::new(x, y),
        content: content.to_string(),
        anchor: Anchor::Middle,
        fill,
        font,
    }
}

// ============================================================================
// DEVICE CHROME
// ============================================================================

/// Phone outline, status bar and notch. Always the first three commands.
pub fn base_frame(canvas: &Canvas, name: &str) -> Screen {
    let Canvas { theme, frame } = canvas;
    let mut screen = Screen::new(name);

    screen.push(stroked_rect(
        0.0,
        0.0,
        frame.width,
        frame.height,
        frame.corner_radius,
        Paint::solid(&theme.background),
        Stroke {
            color: theme.border.clone(),
            width: frame.bezel_stroke,
        },
    ));
    screen.push(rect(
        0.0,
        0.0,
        frame.width,
        frame.status_bar_height,
        0.0,
        Paint::solid(&theme.surface),
    ));
    screen.push(rect(
        frame.center_x() - frame.notch_width / 2.0,
        0.0,
        frame.notch_width,
        frame.notch_height,
        frame.notch_height / 2.0,
        Paint::solid(&theme.notch),
    ));

    screen
}

/// Nav band below the status bar, optional back chevron, centered title.
pub fn nav_bar(canvas: &Canvas, title: &str, show_back: bool) -> Vec<DrawCommand> {
    let Canvas { theme, frame } = canvas;
    let top = frame.status_bar_height;
    let mid = top + frame.nav_bar_height / 2.0;
    let mut out = Vec::with_capacity(3);

    out.push(rect(
        0.0,
        top,
        frame.width,
        frame.nav_bar_height,
        0.0,
        Paint::solid(&theme.background),
    ));

    if show_back {
        out.push(DrawCommand::Path {
            points: vec![
                Point::new(frame.padding, mid),
                Point::new(frame.padding + 15.0, mid - 8.0),
                Point::new(frame.padding + 15.0, mid + 8.0),
            ],
            fill: Paint::solid(&theme.primary),
        });
    }

    out.push(centered_label(
        frame.center_x(),
        mid + 8.0,
        title,
        Paint::solid(&theme.text),
        FONT_NAV_TITLE,
    ));

    out
}

/// `base_frame` followed immediately by `nav_bar`.
pub fn screen_with_nav(canvas: &Canvas, name: &str, title: &str, show_back: bool) -> Screen {
    let mut screen = base_frame(canvas, name);
    screen.extend(nav_bar(canvas, title, show_back));
    screen
}

// ============================================================================
// CONTENT BLOCKS
// ============================================================================

/// Section heading at the left padding.
pub fn heading(canvas: &Canvas, y: f64, text: &str, font: FontSpec) -> DrawCommand {
    label(canvas.frame.padding, y, text, Paint::solid(&canvas.theme.text), font)
}

/// Pill-shaped search box with placeholder copy.
pub fn search_field(canvas: &Canvas, y: f64, placeholder: &str) -> Vec<DrawCommand> {
    let Canvas { theme, frame } = canvas;
    vec![
        rect(
            frame.padding,
            y,
            frame.content_width(),
            SEARCH_HEIGHT,
            SEARCH_HEIGHT / 2.0,
            Paint::solid(&theme.surface),
        ),
        label(
            frame.padding + 30.0,
            y + 28.0,
            placeholder,
            Paint::solid(&theme.secondary),
            FONT_BODY,
        ),
    ]
}

/// Full-width rounded card between the side paddings.
pub fn card(canvas: &Canvas, y: f64, height: f64, fill: Paint) -> DrawCommand {
    rect(
        canvas.frame.padding,
        y,
        canvas.frame.content_width(),
        height,
        CARD_RADIUS,
        fill,
    )
}

/// Title over secondary subtitle, title baseline at `y`.
pub fn entry_lines(canvas: &Canvas, x: f64, y: f64, entry: &Entry) -> [DrawCommand; 2] {
    let theme = &canvas.theme;
    [
        label(x, y, &entry.title, Paint::solid(&theme.text), FONT_ROW_TITLE),
        label(
            x,
            y + SUBTITLE_DY,
            &entry.subtitle,
            Paint::solid(&theme.secondary),
            FONT_CAPTION,
        ),
    ]
}

/// Full-width pill button: solid primary or primary outline.
pub fn wide_button(canvas: &Canvas, y: f64, text: &str, filled: bool) -> [DrawCommand; 2] {
    let Canvas { theme, frame } = canvas;
    let (fill, ink) = if filled {
        (Paint::solid(&theme.primary), &theme.on_primary)
    } else {
        (Paint::None, &theme.primary)
    };
    [
        stroked_rect(
            frame.padding,
            y,
            frame.content_width(),
            WIDE_BUTTON_HEIGHT,
            WIDE_BUTTON_HEIGHT / 2.0,
            fill,
            Stroke::hairline(&theme.primary),
        ),
        centered_label(frame.center_x(), y + 32.0, text, Paint::solid(ink), FONT_BUTTON),
    ]
}

/// Solid call-to-action pinned to the bottom of the frame.
pub fn footer_button(canvas: &Canvas, text: &str) -> [DrawCommand; 2] {
    let Canvas { theme, frame } = canvas;
    let y = frame.height - 80.0;
    [
        rect(
            frame.padding,
            y,
            frame.content_width(),
            WIDE_BUTTON_HEIGHT,
            WIDE_BUTTON_HEIGHT / 2.0,
            Paint::solid(&theme.primary),
        ),
        centered_label(
            frame.center_x(),
            y + 35.0,
            text,
            Paint::solid(&theme.on_primary),
            FONT_BUTTON,
        ),
    ]
}

/// 60×30 pill at the right edge of a card; `y` is the pill's top.
pub fn small_button(canvas: &Canvas, y: f64, text: &str, filled: bool) -> [DrawCommand; 2] {
    let Canvas { theme, frame } = canvas;
    let x = frame.width - 100.0;
    let (fill, ink) = if filled {
        (Paint::solid(&theme.primary), &theme.on_primary)
    } else {
        (Paint::None, &theme.primary)
    };
    [
        stroked_rect(x, y, 60.0, 30.0, 15.0, fill, Stroke::hairline(&theme.primary)),
        centered_label(x + 30.0, y + 20.0, text, Paint::solid(ink), FONT_CAPTION),
    ]
}

// ============================================================================
// HORIZONTAL TILING
// ============================================================================

/// Chip width grows with its label: 10px per char plus 30px of padding.
pub fn chip_width(text: &str) -> f64 {
    text.chars().count() as f64 * 10.0 + 30.0
}

/// Filter chips laid left to right from the padding, `CHIP_GAP` apart.
pub fn chip_row(canvas: &Canvas, y: f64, chips: &[Chip]) -> Vec<DrawCommand> {
    let Canvas { theme, frame } = canvas;
    let mut out = Vec::with_capacity(chips.len() * 2);
    let mut x = frame.padding;

    for chip in chips {
        let width = chip_width(&chip.label);
        let (fill, ink) = if chip.active {
            (Paint::solid(&theme.surface), &theme.primary)
        } else {
            (Paint::None, &theme.text)
        };
        out.push(stroked_rect(
            x,
            y,
            width,
            CHIP_HEIGHT,
            CHIP_HEIGHT / 2.0,
            fill,
            Stroke::hairline(&theme.border),
        ));
        out.push(centered_label(
            x + width / 2.0,
            y + 20.0,
            &chip.label,
            Paint::solid(ink),
            FONT_CAPTION,
        ));
        x += width + CHIP_GAP;
    }

    out
}

/// Equal-width tabs spanning the full frame width.
pub fn tab_bar(canvas: &Canvas, y: f64, tabs: &Tabs) -> Vec<DrawCommand> {
    let Canvas { theme, frame } = canvas;
    let mut out = Vec::with_capacity(tabs.labels.len() * 2);
    if tabs.labels.is_empty() {
        return out;
    }
    let width = frame.width / tabs.labels.len() as f64;

    for (i, text) in tabs.labels.iter().enumerate() {
        let x = i as f64 * width;
        let active = i == tabs.active;
        let (fill, ink) = if active {
            (Paint::solid(&theme.surface), &theme.primary)
        } else {
            (Paint::None, &theme.secondary)
        };
        out.push(stroked_rect(
            x,
            y,
            width,
            TAB_HEIGHT,
            0.0,
            fill,
            Stroke::hairline(&theme.border),
        ));
        out.push(centered_label(
            x + width / 2.0,
            y + 28.0,
            text,
            Paint::solid(ink),
            FONT_BODY,
        ));
    }

    out
}

/// Geometry of one stat-tile row.
#[derive(Debug, Clone, Copy)]
pub struct TileStyle {
    pub height: f64,
    pub value_font: FontSpec,
    pub value_dy: f64,
    pub label_dy: f64,
}

/// Value-over-label tiles; each slot is `width / n`, tiles sit `TILE_GAP` apart.
pub fn stat_tiles(canvas: &Canvas, y: f64, stats: &[Stat], style: TileStyle) -> Vec<DrawCommand> {
    let Canvas { theme, frame } = canvas;
    let mut out = Vec::with_capacity(stats.len() * 3);
    if stats.is_empty() {
        return out;
    }
    let stride = frame.width / stats.len() as f64 - frame.padding;
    let width = stride - TILE_GAP;

    for (i, stat) in stats.iter().enumerate() {
        let x = frame.padding + i as f64 * stride;
        let mid = x + width / 2.0;
        out.push(rect(x, y, width, style.height, CARD_RADIUS, Paint::solid(&theme.surface)));
        out.push(centered_label(
            mid,
            y + style.value_dy,
            &stat.value,
            Paint::solid(&theme.text),
            style.value_font,
        ));
        out.push(centered_label(
            mid,
            y + style.label_dy,
            &stat.label,
            Paint::solid(&theme.secondary),
            FONT_CAPTION,
        ));
    }

    out
}

// ============================================================================
// VERTICAL REPETITION
// ============================================================================

/// Cursor for repeated rows: row `i` starts at `top + i * stride`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStack {
    pub top: f64,
    pub stride: f64,
}

impl RowStack {
    pub const fn new(top: f64, stride: f64) -> Self {
        Self { top, stride }
    }

    pub fn y(&self, i: usize) -> f64 {
        self.top + i as f64 * self.stride
    }

    /// First free y after `n` rows.
    pub fn end(&self, n: usize) -> f64 {
        self.y(n)
    }
}

// ============================================================================
// TESTS
// ============================================================================
