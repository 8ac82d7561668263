//! Contract checks on built screens.
//!
//! Builders never fail at runtime; an overflowing spec shows up here.
//! Pure functions: (Screen, DeviceFrame) → issues.

use std::fmt;

use serde::Serialize;

use crate::hash::digest_screen;
use crate::journey::Journey;
use crate::screens::build_screen;
use crate::theme::{Canvas, DeviceFrame};
use crate::types::{ContentHash, DrawCommand, Point, Screen};

/// Tolerance for float comparisons against frame edges.
const EPSILON: f64 = 1e-6;

/// One broken layout rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum LayoutIssue {
    /// The first three commands are not frame, status bar and notch.
    MissingFrame,
    /// A command reaches outside the device canvas.
    OutOfBounds { index: usize, kind: &'static str },
    /// A rect or circle with no positive extent.
    Degenerate { index: usize, kind: &'static str },
}

impl fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutIssue::MissingFrame => write!(f, "screen does not start with the device frame"),
            LayoutIssue::OutOfBounds { index, kind } => {
                write!(f, "command #{} ({}) leaves the frame", index, kind)
            }
            LayoutIssue::Degenerate { index, kind } => {
                write!(f, "command #{} ({}) has no positive size", index, kind)
            }
        }
    }
}

/// Check result for one journey screen.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenCheck {
    pub screen: String,
    pub commands: usize,
    pub digest: ContentHash,
    pub issues: Vec<LayoutIssue>,
}

/// Build and check every screen of `journey`, in page order.
pub fn check_journey(journey: &Journey, canvas: &Canvas) -> Vec<ScreenCheck> {
    journey
        .sections
        .iter()
        .flat_map(|section| section.columns.panels())
        .map(|(_, panel)| {
            let screen = build_screen(&panel.spec, canvas);
            ScreenCheck {
                issues: check_screen(&screen, &canvas.frame),
                commands: screen.len(),
                digest: digest_screen(&screen),
                screen: screen.name,
            }
        })
        .collect()
}

/// Check `screen` against the frame invariants.
pub fn check_screen(screen: &Screen, frame: &DeviceFrame) -> Vec<LayoutIssue> {
    let mut issues = Vec::new();

    if !starts_with_frame(screen, frame) {
        issues.push(LayoutIssue::MissingFrame);
    }

    for (index, command) in screen.commands.iter().enumerate() {
        if degenerate(command) {
            issues.push(LayoutIssue::Degenerate {
                index,
                kind: command.kind_name(),
            });
        }
        if !inside(command, frame) {
            issues.push(LayoutIssue::OutOfBounds {
                index,
                kind: command.kind_name(),
            });
        }
    }

    issues
}

fn starts_with_frame(screen: &Screen, frame: &DeviceFrame) -> bool {
    let [bezel, status, notch] = match screen.commands.get(..3) {
        Some([a, b, c]) => [a, b, c],
        _ => return false,
    };

    let full_canvas = matches!(
        bezel,
        DrawCommand::Rect { pos, size, stroke: Some(_), .. }
            if pos.x == 0.0 && pos.y == 0.0 && size.width == frame.width && size.height == frame.height
    );
    let status_bar = matches!(
        status,
        DrawCommand::Rect { pos, size, .. }
            if pos.y == 0.0 && size.width == frame.width && size.height == frame.status_bar_height
    );
    let notch_centered = matches!(
        notch,
        DrawCommand::Rect { pos, size, .. }
            if (pos.x + size.width / 2.0 - frame.center_x()).abs() < EPSILON
                && size.width == frame.notch_width
                && size.height == frame.notch_height
    );

    full_canvas && status_bar && notch_centered
}

fn degenerate(command: &DrawCommand) -> bool {
    match command {
        DrawCommand::Rect { size, .. } => size.width <= EPSILON || size.height <= EPSILON,
        DrawCommand::Circle { radius, .. } => *radius <= EPSILON,
        DrawCommand::Path { .. } | DrawCommand::Text { .. } => false,
    }
}

fn point_inside(p: &Point, frame: &DeviceFrame) -> bool {
    p.x >= -EPSILON
        && p.y >= -EPSILON
        && p.x <= frame.width + EPSILON
        && p.y <= frame.height + EPSILON
}

fn inside(command: &DrawCommand, frame: &DeviceFrame) -> bool {
    match command {
        DrawCommand::Rect { pos, size, .. } => {
            point_inside(pos, frame)
                && point_inside(&Point::new(pos.x + size.width, pos.y + size.height), frame)
        }
        DrawCommand::Circle { center, radius, .. } => {
            point_inside(&Point::new(center.x - radius, center.y - radius), frame)
                && point_inside(&Point::new(center.x + radius, center.y + radius), frame)
        }
        DrawCommand::Path { points, .. } => points.iter().all(|p| point_inside(p, frame)),
        // Glyph extents are unknown without a font; check the anchor only.
        DrawCommand::Text { position, .. } => point_inside(position, frame),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::default_journey;
    use crate::layout::{base_frame, card, circle};
    use crate::screens::build_demo_screen;
    use crate::spec::{Entry, ScreenSpec, Stat};
    use crate::types::{Paint, ScreenKind};

    #[test]
    fn gallery_screens_have_no_issues() {
        let canvas = Canvas::default();
        for kind in ScreenKind::ALL {
            let screen = build_demo_screen(kind, &canvas);
            let issues = check_screen(&screen, &canvas.frame);
            assert!(issues.is_empty(), "{}: {:?}", kind, issues);
        }
    }

    #[test]
    fn journey_check_covers_every_panel() {
        let checks = check_journey(&default_journey(), &Canvas::default());
        assert_eq!(checks.len(), 13);
        assert_eq!(checks[0].screen, "welcome");
        assert!(checks.iter().all(|c| c.issues.is_empty() && c.commands > 3));
    }

    #[test]
    fn empty_screen_misses_frame() {
        let issues = check_screen(&Screen::new("blank"), &DeviceFrame::default());
        assert_eq!(issues, vec![LayoutIssue::MissingFrame]);
    }

    #[test]
    fn card_below_frame_is_out_of_bounds() {
        let canvas = Canvas::default();
        let mut screen = base_frame(&canvas, "overflow");
        screen.push(card(&canvas, 600.0, 100.0, Paint::None));

        let issues = check_screen(&screen, &canvas.frame);
        assert_eq!(issues, vec![LayoutIssue::OutOfBounds { index: 3, kind: "rect" }]);
    }

    #[test]
    fn too_many_rows_are_reported_not_panicked() {
        let canvas = Canvas::default();
        let ScreenSpec::Library(mut spec) = ScreenSpec::demo(ScreenKind::Library) else {
            panic!("expected library spec");
        };
        spec.playlists = (0..10).map(|i| Entry::new(format!("P{}", i), "x")).collect();

        let screen = build_screen(&ScreenSpec::Library(spec), &canvas);
        let issues = check_screen(&screen, &canvas.frame);
        assert!(!issues.is_empty());
        assert!(issues.iter().all(|i| matches!(i, LayoutIssue::OutOfBounds { .. })));
    }

    #[test]
    fn crowded_stat_row_reports_negative_tiles() {
        let canvas = Canvas::default();
        let ScreenSpec::Analytics(mut spec) = ScreenSpec::demo(ScreenKind::Analytics) else {
            panic!("expected analytics spec");
        };
        spec.stats = (0..14).map(|i| Stat::new(format!("S{}", i), "1")).collect();

        let screen = build_screen(&ScreenSpec::Analytics(spec), &canvas);
        let issues = check_screen(&screen, &canvas.frame);
        let empty_tiles: Vec<_> = issues
            .iter()
            .filter(|i| matches!(i, LayoutIssue::Degenerate { kind: "rect", .. }))
            .collect();
        assert_eq!(empty_tiles.len(), 14);
    }

    #[test]
    fn zero_radius_circle_is_degenerate() {
        let canvas = Canvas::default();
        let mut screen = base_frame(&canvas, "dot");
        screen.push(circle(100.0, 100.0, 0.0, Paint::None));

        let issues = check_screen(&screen, &canvas.frame);
        assert_eq!(issues, vec![LayoutIssue::Degenerate { index: 3, kind: "circle" }]);
    }

    #[test]
    fn issue_display_names_command() {
        let issue = LayoutIssue::OutOfBounds { index: 7, kind: "circle" };
        assert_eq!(issue.to_string(), "command #7 (circle) leaves the frame");
    }
}
