//! SVG serialization of screens.
//!
//! Pure functions: (Screen, DeviceFrame) → SVG document.
//! Elements are appended in command order, so paint order is preserved.

use ::svg::node::element::path::Data;
use ::svg::node::element::{Circle, Path, Rectangle, Text};
use ::svg::{Document, Node};

use crate::theme::DeviceFrame;
use crate::types::{DrawCommand, Paint, Screen};

/// Build the SVG document for a screen, sized to the device frame.
pub fn screen_document(screen: &Screen, frame: &DeviceFrame) -> Document {
    let mut document = Document::new()
        .set("width", num(frame.width))
        .set("height", num(frame.height))
        .set(
            "viewBox",
            format!("0 0 {} {}", num(frame.width), num(frame.height)),
        )
        .set("data-screen", screen.name.as_str());

    for command in &screen.commands {
        append_command(&mut document, command);
    }
    document
}

/// Render a screen as a standalone SVG string.
pub fn render_svg(screen: &Screen, frame: &DeviceFrame) -> String {
    let mut out = screen_document(screen, frame).to_string();
    out.push('\n');
    out
}

fn append_command(document: &mut Document, command: &DrawCommand) {
    match command {
        DrawCommand::Rect {
            pos,
            size,
            corner_radius,
            fill,
            stroke,
        } => {
            let mut rect = Rectangle::new()
                .set("x", num(pos.x))
                .set("y", num(pos.y))
                .set("width", num(size.width))
                .set("height", num(size.height))
                .set("fill", paint(fill));
            if *corner_radius > 0.0 {
                rect = rect
                    .set("rx", num(*corner_radius))
                    .set("ry", num(*corner_radius));
            }
            if let Some(stroke) = stroke {
                rect = rect
                    .set("stroke", stroke.color.as_str())
                    .set("stroke-width", num(stroke.width));
            }
            document.append(rect);
        }
        DrawCommand::Circle { center, radius, fill } => {
            document.append(
                Circle::new()
                    .set("cx", num(center.x))
                    .set("cy", num(center.y))
                    .set("r", num(*radius))
                    .set("fill", paint(fill)),
            );
        }
        DrawCommand::Path { points, fill } => {
            let Some((first, rest)) = points.split_first() else {
                return;
            };
            let mut data = Data::new().move_to((first.x as f32, first.y as f32));
            for p in rest {
                data = data.line_to((p.x as f32, p.y as f32));
            }
            document.append(Path::new().set("fill", paint(fill)).set("d", data.close()));
        }
        DrawCommand::Text {
            position,
            content,
            anchor,
            fill,
            font,
        } => {
            document.append(
                Text::new(content.as_str())
                    .set("x", num(position.x))
                    .set("y", num(position.y))
                    .set("text-anchor", anchor.as_svg())
                    .set("fill", paint(fill))
                    .set("style", font.css()),
            );
        }
    }
}

fn paint(fill: &Paint) -> String {
    fill.color()
        .map_or_else(|| "none".to_string(), |color| color.to_string())
}

/// Integers print without a fractional part; others keep up to 3 decimals.
fn num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.3}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{base_frame, circle};
    use crate::screens::build_demo_screen;
    use crate::theme::Canvas;
    use crate::types::{Anchor, Color, FontSpec, Point, ScreenKind};

    fn single(command: DrawCommand) -> String {
        let mut screen = Screen::new("single");
        screen.push(command);
        render_svg(&screen, &DeviceFrame::default())
    }

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(num(360.0), "360");
        assert_eq!(num(93.3333333), "93.333");
        assert_eq!(num(0.5), "0.5");
    }

    #[test]
    fn frame_renders_as_rounded_rect() {
        let canvas = Canvas::default();
        let svg = render_svg(&base_frame(&canvas, "frame"), &canvas.frame);

        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 360 640""#));
        assert!(svg.contains(r#"data-screen="frame""#));
        assert!(svg.contains(r#"rx="40""#));
        assert!(svg.contains(r##"stroke="#C5C5C7""##));
        assert!(svg.contains(r#"stroke-width="2""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn unfilled_paint_is_none() {
        let svg = single(circle(10.0, 10.0, 5.0, Paint::None));
        assert!(svg.contains("<circle"));
        assert!(svg.contains(r#"r="5""#));
        assert!(svg.contains(r#"fill="none""#));
    }

    #[test]
    fn path_is_closed() {
        let svg = single(DrawCommand::Path {
            points: vec![Point::new(20.0, 66.0), Point::new(35.0, 58.0), Point::new(35.0, 74.0)],
            fill: Paint::solid(&Color::new("#007AFF")),
        });
        assert!(svg.contains("<path"));
        assert!(svg.contains("M20,66"));
        assert!(svg.contains("L35,74"));
        assert!(svg.contains(r#"z""#));
    }

    #[test]
    fn empty_path_is_skipped() {
        let svg = single(DrawCommand::Path {
            points: vec![],
            fill: Paint::None,
        });
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn text_is_escaped_and_styled() {
        let svg = single(DrawCommand::Text {
            position: Point::new(40.0, 30.0),
            content: "R&B <live>".into(),
            anchor: Anchor::Start,
            fill: Paint::Solid(Color::from("#000000")),
            font: FontSpec::semibold(17),
        });
        assert!(svg.contains("R&amp;B &lt;live&gt;"));
        assert!(svg.contains(r#"text-anchor="start""#));
        assert!(svg.contains("font-weight: 600"));
    }

    #[test]
    fn one_element_per_command() {
        let canvas = Canvas::default();
        let screen = build_demo_screen(ScreenKind::Preferences, &canvas);
        let svg = render_svg(&screen, &canvas.frame);

        let elements = ["<rect", "<circle", "<path", "<text"]
            .iter()
            .map(|tag| svg.matches(tag).count())
            .sum::<usize>();
        assert_eq!(elements, screen.len());
    }
}
