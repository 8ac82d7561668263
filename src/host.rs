//! Presentation hosts: where rendered screens end up.
//!
//! The presenter only knows the `PresentationHost` trait. Three hosts ship:
//! - `HtmlGallery`: one self-contained HTML page with inline SVG
//! - `SvgDirectory`: one SVG file per screen plus an index page
//! - `JsonDocument`: the whole page, commands included, as JSON

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::error::HostError;
use crate::journey::Narrative;
use crate::svg::render_svg;
use crate::theme::DeviceFrame;
use crate::types::Screen;

/// Page background behind the phone frames.
const PAGE_BACKGROUND: &str = "#1E1E1E";

// ============================================================================
// TRAIT
// ============================================================================

/// Where a panel sits within its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Full,
    Left,
    Right,
}

/// Page/section/column sink for the journey presenter.
///
/// Calls arrive in page order: `begin`, then per section `section` followed
/// by its panels, then `narrative`, then `finish`.
pub trait PresentationHost {
    fn begin(&mut self, page_title: &str) -> Result<(), HostError>;

    fn section(&mut self, title: &str) -> Result<(), HostError>;

    /// Emit one screen; returns the bytes written for it.
    fn panel(
        &mut self,
        slot: Slot,
        heading: Option<&str>,
        screen: &Screen,
        next: Option<&str>,
    ) -> Result<u64, HostError>;

    fn narrative(&mut self, narrative: &Narrative) -> Result<(), HostError>;

    /// Flush the page; returns total bytes of output.
    fn finish(&mut self) -> Result<u64, HostError>;

    /// Whether a failed panel may be skipped while the rest still render.
    fn supports_partial(&self) -> bool {
        false
    }
}

// ============================================================================
// HTML GALLERY
// ============================================================================

/// Single HTML page: sections as headings, pairs in a two-column grid.
#[derive(Debug)]
pub struct HtmlGallery {
    frame: DeviceFrame,
    html: String,
    row_open: bool,
}

impl HtmlGallery {
    pub fn new(frame: DeviceFrame) -> Self {
        Self {
            frame,
            html: String::new(),
            row_open: false,
        }
    }

    /// The page built so far (complete after `finish`).
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    fn close_row(&mut self) {
        if self.row_open {
            self.html.push_str("</div>\n");
            self.row_open = false;
        }
    }
}

impl PresentationHost for HtmlGallery {
    fn begin(&mut self, page_title: &str) -> Result<(), HostError> {
        self.html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        self.html.push_str(&format!("<title>{}</title>\n", escape(page_title)));
        self.html.push_str(&format!(
            "<style>\n\
             body {{ background-color: {bg}; color: #FFFFFF; font-family: sans-serif; margin: 2rem; }}\n\
             .row {{ display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }}\n\
             .panel svg {{ display: block; max-width: 100%; }}\n\
             </style>\n",
            bg = PAGE_BACKGROUND
        ));
        self.html.push_str("</head>\n<body>\n");
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<(), HostError> {
        self.close_row();
        self.html.push_str(&format!("<h1>{}</h1>\n", escape(title)));
        Ok(())
    }

    fn panel(
        &mut self,
        slot: Slot,
        heading: Option<&str>,
        screen: &Screen,
        next: Option<&str>,
    ) -> Result<u64, HostError> {
        match slot {
            Slot::Full => self.close_row(),
            Slot::Left => {
                self.close_row();
                self.html.push_str("<div class=\"row\">\n");
                self.row_open = true;
            }
            Slot::Right => {}
        }

        let svg = render_svg(screen, &self.frame);
        self.html.push_str("<div class=\"panel\">\n");
        if let Some(heading) = heading {
            self.html.push_str(&format!("<h3>{}</h3>\n", escape(heading)));
        }
        self.html.push_str(&svg);
        if let Some(next) = next {
            self.html.push_str(&format!("<p><strong>Next:</strong> {}</p>\n", escape(next)));
        }
        self.html.push_str("</div>\n");

        if slot == Slot::Right {
            self.close_row();
        }
        Ok(svg.len() as u64)
    }

    fn narrative(&mut self, narrative: &Narrative) -> Result<(), HostError> {
        self.close_row();
        self.html.push_str(&narrative_html(narrative));
        Ok(())
    }

    fn finish(&mut self) -> Result<u64, HostError> {
        self.close_row();
        self.html.push_str("</body>\n</html>\n");
        Ok(self.html.len() as u64)
    }
}

fn narrative_html(narrative: &Narrative) -> String {
    let mut out = String::from("<section class=\"narrative\">\n");
    out.push_str(&format!("<h3>{}</h3>\n<ol>\n", escape(&narrative.heading)));
    for phase in &narrative.phases {
        out.push_str(&format!(
            "<li><strong>{}</strong>\n<ul>\n<li>{}</li>\n<li>{}</li>\n</ul>\n</li>\n",
            escape(&phase.name),
            escape(&phase.steps.join(" → ")),
            escape(&phase.summary)
        ));
    }
    out.push_str("</ol>\n");
    out.push_str(&format!("<p>{}</p>\n<ul>\n", escape(&narrative.highlights_intro)));
    for highlight in &narrative.highlights {
        out.push_str(&format!("<li>{}</li>\n", escape(highlight)));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

/// Escape text for HTML content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// SVG DIRECTORY
// ============================================================================

/// File name of the index page written next to the SVGs.
pub const INDEX_FILENAME: &str = "index.html";

#[derive(Debug)]
struct IndexEntry {
    section: String,
    heading: Option<String>,
    file: String,
    next: Option<String>,
}

/// One `NN-<name>.svg` per panel, plus an index page linking them.
///
/// Each file is written independently, so one failed write does not
/// prevent the rest of the gallery.
#[derive(Debug)]
pub struct SvgDirectory {
    dir: PathBuf,
    frame: DeviceFrame,
    page_title: String,
    section: String,
    entries: Vec<IndexEntry>,
    narrative: Option<Narrative>,
    counter: usize,
    bytes: u64,
}

impl SvgDirectory {
    pub fn new(dir: impl Into<PathBuf>, frame: DeviceFrame) -> Self {
        Self {
            dir: dir.into(),
            frame,
            page_title: String::new(),
            section: String::new(),
            entries: Vec::new(),
            narrative: None,
            counter: 0,
            bytes: 0,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn index_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape(&self.page_title)));
        out.push_str(&format!(
            "<style>body {{ background-color: {}; color: #FFFFFF; font-family: sans-serif; }}</style>\n",
            PAGE_BACKGROUND
        ));
        out.push_str("</head>\n<body>\n");

        let mut current: Option<&str> = None;
        for entry in &self.entries {
            if current != Some(entry.section.as_str()) {
                out.push_str(&format!("<h1>{}</h1>\n", escape(&entry.section)));
                current = Some(entry.section.as_str());
            }
            out.push_str("<figure>\n");
            if let Some(heading) = &entry.heading {
                out.push_str(&format!("<figcaption>{}</figcaption>\n", escape(heading)));
            }
            out.push_str(&format!("<img src=\"{}\" alt=\"{}\">\n", escape(&entry.file), escape(&entry.file)));
            if let Some(next) = &entry.next {
                out.push_str(&format!("<p><strong>Next:</strong> {}</p>\n", escape(next)));
            }
            out.push_str("</figure>\n");
        }

        if let Some(narrative) = &self.narrative {
            out.push_str(&narrative_html(narrative));
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl PresentationHost for SvgDirectory {
    fn begin(&mut self, page_title: &str) -> Result<(), HostError> {
        fs::create_dir_all(&self.dir)?;
        self.page_title = page_title.to_string();
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<(), HostError> {
        self.section = title.to_string();
        Ok(())
    }

    fn panel(
        &mut self,
        _slot: Slot,
        heading: Option<&str>,
        screen: &Screen,
        next: Option<&str>,
    ) -> Result<u64, HostError> {
        self.counter += 1;
        let file = format!("{:02}-{}.svg", self.counter, screen.name);
        let path = self.dir.join(&file);
        let svg = render_svg(screen, &self.frame);

        fs::write(&path, &svg)?;
        debug!("wrote {}", path.display());

        let bytes = svg.len() as u64;
        self.bytes += bytes;
        self.entries.push(IndexEntry {
            section: self.section.clone(),
            heading: heading.map(str::to_string),
            file,
            next: next.map(str::to_string),
        });
        Ok(bytes)
    }

    fn narrative(&mut self, narrative: &Narrative) -> Result<(), HostError> {
        self.narrative = Some(narrative.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<u64, HostError> {
        let index = self.index_html();
        fs::write(self.dir.join(INDEX_FILENAME), &index)?;
        Ok(self.bytes + index.len() as u64)
    }

    fn supports_partial(&self) -> bool {
        true
    }
}

// ============================================================================
// JSON DOCUMENT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
struct JsonPanel {
    slot: Slot,
    heading: Option<String>,
    next: Option<String>,
    screen: Screen,
}

#[derive(Debug, Clone, Serialize)]
struct JsonSection {
    title: String,
    panels: Vec<JsonPanel>,
}

#[derive(Debug, Clone, Default, Serialize)]
struct JsonPage {
    title: String,
    sections: Vec<JsonSection>,
    narrative: Option<Narrative>,
}

/// The page as structured data, for other tooling to draw.
#[derive(Debug, Default)]
pub struct JsonDocument {
    page: JsonPage,
    json: String,
}

impl JsonDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty JSON of the page (complete after `finish`).
    pub fn json(&self) -> &str {
        &self.json
    }

    pub fn into_json(self) -> String {
        self.json
    }
}

impl PresentationHost for JsonDocument {
    fn begin(&mut self, page_title: &str) -> Result<(), HostError> {
        self.page.title = page_title.to_string();
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<(), HostError> {
        self.page.sections.push(JsonSection {
            title: title.to_string(),
            panels: Vec::new(),
        });
        Ok(())
    }

    fn panel(
        &mut self,
        slot: Slot,
        heading: Option<&str>,
        screen: &Screen,
        next: Option<&str>,
    ) -> Result<u64, HostError> {
        let section = self.page.sections.last_mut().ok_or_else(|| HostError::Rejected {
            screen: screen.name.clone(),
            reason: "panel outside of a section".to_string(),
        })?;
        let bytes = serde_json::to_vec(screen)?.len() as u64;
        section.panels.push(JsonPanel {
            slot,
            heading: heading.map(str::to_string),
            next: next.map(str::to_string),
            screen: screen.clone(),
        });
        Ok(bytes)
    }

    fn narrative(&mut self, narrative: &Narrative) -> Result<(), HostError> {
        self.page.narrative = Some(narrative.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<u64, HostError> {
        self.json = serde_json::to_string_pretty(&self.page)?;
        Ok(self.json.len() as u64)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::{default_journey, render_journey};
    use crate::theme::Canvas;
    use tempfile::TempDir;

    #[test]
    fn html_gallery_contains_every_screen() {
        let canvas = Canvas::default();
        let mut host = HtmlGallery::new(canvas.frame);
        let summary = render_journey(&default_journey(), &canvas, &mut host).unwrap();
        let html = host.into_html();

        assert_eq!(html.matches("<svg ").count(), 13);
        assert_eq!(summary.bytes_written, html.len() as u64);
        assert!(html.contains("<title>User Journey Wireframes</title>"));
        assert!(html.contains("<h1>User Journey - Welcome Flow</h1>"));
        assert!(html.contains("<strong>Next:</strong> Playlist Creation"));
        assert!(html.contains("Welcome → Account Creation → Profile Setup"));
        assert!(html.contains(PAGE_BACKGROUND));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn html_rows_are_balanced() {
        let canvas = Canvas::default();
        let mut host = HtmlGallery::new(canvas.frame);
        render_journey(&default_journey(), &canvas, &mut host).unwrap();
        let html = host.html();

        assert_eq!(html.matches("<div class=\"row\">").count(), 6);
        assert_eq!(
            html.matches("<div").count(),
            html.matches("</div>").count()
        );
    }

    #[test]
    fn svg_directory_writes_numbered_files_and_index() {
        let tmp = TempDir::new().unwrap();
        let canvas = Canvas::default();
        let mut host = SvgDirectory::new(tmp.path().join("out"), canvas.frame);
        let summary = render_journey(&default_journey(), &canvas, &mut host).unwrap();

        let dir = host.dir();
        assert!(dir.join("01-welcome.svg").is_file());
        assert!(dir.join("13-preferences.svg").is_file());
        let index = fs::read_to_string(dir.join(INDEX_FILENAME)).unwrap();
        assert!(index.contains("<img src=\"02-discovery.svg\""));
        assert!(index.contains("Content Access"));
        assert!(summary.failures.is_empty());
    }

    #[test]
    fn svg_directory_keeps_going_after_a_failed_write() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out");
        // A directory where the file should go makes that one write fail.
        fs::create_dir_all(out.join("05-events.svg")).unwrap();

        let canvas = Canvas::default();
        let mut host = SvgDirectory::new(&out, canvas.frame);
        let summary = render_journey(&default_journey(), &canvas, &mut host).unwrap();

        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].screen, "events");
        assert_eq!(summary.screens.len(), 12);
        assert!(out.join("06-premium.svg").is_file());
        let index = fs::read_to_string(out.join(INDEX_FILENAME)).unwrap();
        assert!(!index.contains("05-events.svg"));
    }

    #[test]
    fn json_document_is_valid_and_complete() {
        let canvas = Canvas::default();
        let mut host = JsonDocument::new();
        render_journey(&default_journey(), &canvas, &mut host).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(host.json()).unwrap();
        assert_eq!(parsed["title"], "User Journey Wireframes");
        assert_eq!(parsed["sections"].as_array().unwrap().len(), 7);
        assert_eq!(parsed["sections"][1]["panels"][0]["slot"], "left");
        assert_eq!(parsed["sections"][1]["panels"][0]["screen"]["name"], "discovery");
        assert_eq!(
            parsed["sections"][0]["panels"][0]["screen"]["commands"][0]["kind"],
            "rect"
        );
        assert_eq!(parsed["narrative"]["phases"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn html_escapes_page_text() {
        assert_eq!(escape("R&B <3"), "R&amp;B &lt;3");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn json_panel_without_section_is_rejected() {
        let mut host = JsonDocument::new();
        let err = host
            .panel(Slot::Full, None, &Screen::new("stray"), None)
            .unwrap_err();
        assert!(matches!(err, HostError::Rejected { .. }));
    }
}
