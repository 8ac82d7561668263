//! The journey presenter: a fixed, linear gallery of screens.
//!
//! Structure:
//! - Pure data: `Journey`, `Section`, `Panel`, `Narrative`, `default_journey()`
//! - Effect driver: `render_journey*`, which builds each screen and hands
//!   it to a `PresentationHost`

use log::{debug, info, warn};
use serde::Serialize;

use crate::error::HostError;
use crate::hash::digest_screen;
use crate::host::{PresentationHost, Slot};
use crate::screens::build_screen;
use crate::spec::ScreenSpec;
use crate::theme::Canvas;
use crate::types::{ContentHash, ScreenKind};

// ============================================================================
// PAGE MODEL
// ============================================================================

/// One screen in the gallery with its optional subheading and next-step caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub heading: Option<String>,
    pub spec: ScreenSpec,
    /// Name of the following step, shown as "Next: ...".
    pub next: Option<String>,
}

impl Panel {
    fn demo(heading: &str, kind: ScreenKind, next: Option<&str>) -> Self {
        Self {
            heading: Some(heading.to_string()),
            spec: ScreenSpec::demo(kind),
            next: next.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Columns {
    Single(Panel),
    /// Two panels side by side.
    Pair(Panel, Panel),
}

impl Columns {
    /// Panels with the slot each one occupies, left to right.
    pub fn panels(&self) -> Vec<(Slot, &Panel)> {
        match self {
            Columns::Single(p) => vec![(Slot::Full, p)],
            Columns::Pair(left, right) => vec![(Slot::Left, left), (Slot::Right, right)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub columns: Columns,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub name: String,
    /// Screen-to-screen path, joined with arrows when shown.
    pub steps: Vec<String>,
    pub summary: String,
}

/// Closing free-text description of the journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub heading: String,
    pub phases: Vec<Phase>,
    pub highlights_intro: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    pub page_title: String,
    pub sections: Vec<Section>,
    pub narrative: Narrative,
}

impl Journey {
    pub fn panel_count(&self) -> usize {
        self.sections.iter().map(|s| s.columns.panels().len()).sum()
    }
}

// ============================================================================
// THE FIXED GALLERY
// ============================================================================

/// The hardcoded welcome → preferences walkthrough.
pub fn default_journey() -> Journey {
    use ScreenKind::*;

    let section = |title: &str, columns: Columns| Section {
        title: format!("User Journey - {}", title),
        columns,
    };

    let sections = vec![
        section(
            "Welcome Flow",
            Columns::Single(Panel {
                heading: None,
                spec: ScreenSpec::demo(Welcome),
                next: None,
            }),
        ),
        section(
            "Discovery Flow",
            Columns::Pair(
                Panel::demo("Discovery Screen", Discovery, Some("Playlist Creation")),
                Panel::demo("Playlist Screen", Playlist, Some("Community")),
            ),
        ),
        section(
            "Engagement Flow",
            Columns::Pair(
                Panel::demo("Community Feed", Community, Some("Events")),
                Panel::demo("Events", Events, Some("Premium Features")),
            ),
        ),
        section(
            "Premium Features",
            Columns::Pair(
                Panel::demo("Premium Features", Premium, Some("Exclusive Content")),
                Panel::demo("Exclusive Content", Exclusive, None),
            ),
        ),
        section(
            "Content Management",
            Columns::Pair(
                Panel::demo("My Library", Library, Some("Favorites")),
                Panel::demo("Favorites", Favorites, Some("Community")),
            ),
        ),
        section(
            "Profile & Analytics",
            Columns::Pair(
                Panel::demo("Analytics", Analytics, Some("Profile")),
                Panel::demo("Profile", Profile, None),
            ),
        ),
        section(
            "Profile & Preferences",
            Columns::Pair(
                Panel::demo("User Profile", ProfileActivity, Some("Preferences")),
                Panel::demo("User Preferences", Preferences, None),
            ),
        ),
    ];

    Journey {
        page_title: "User Journey Wireframes".to_string(),
        sections,
        narrative: default_narrative(),
    }
}

fn phase(name: &str, steps: &[&str], summary: &str) -> Phase {
    Phase {
        name: name.to_string(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        summary: summary.to_string(),
    }
}

fn default_narrative() -> Narrative {
    Narrative {
        heading: "User Journey Flow Description".to_string(),
        phases: vec![
            phase(
                "Registration Flow",
                &["Welcome", "Account Creation", "Profile Setup"],
                "Sign up and personalize experience",
            ),
            phase(
                "Discovery Flow",
                &["Browse Athletes", "Search Interface", "Playlist Creation"],
                "Find and collect favorite music",
            ),
            phase(
                "Engagement Flow",
                &["Community Feed", "Events Calendar"],
                "Connect with athletes and attend events",
            ),
            phase(
                "Premium Features",
                &["Premium Plans", "Exclusive Content"],
                "Access VIP features and special events",
            ),
            phase(
                "Content Access",
                &["Library Management", "Favorites"],
                "Organize personal collection and playlists",
            ),
        ],
        highlights_intro: "This journey flow shows:".to_string(),
        highlights: [
            "Clear user progression from registration to premium features",
            "Focus on discovery and engagement",
            "Emphasis on community participation",
            "Path to exclusive content access",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

// ============================================================================
// RENDER SUMMARY
// ============================================================================

/// A panel the host accepted.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedScreen {
    pub section: String,
    pub screen: String,
    pub commands: usize,
    pub digest: ContentHash,
    /// Bytes the host emitted for this panel.
    pub bytes: u64,
}

/// A panel the host failed on (partial galleries only).
#[derive(Debug, Clone, Serialize)]
pub struct PanelFailure {
    pub section: String,
    pub screen: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderSummary {
    pub page_title: String,
    pub screens: Vec<RenderedScreen>,
    pub failures: Vec<PanelFailure>,
    /// Total output size reported by the host.
    pub bytes_written: u64,
}

// ============================================================================
// DRIVER
// ============================================================================

/// Render every panel of `journey` into `host`, in order.
///
/// # Errors
/// Returns the host's error unchanged. On hosts that support partial
/// galleries, panel failures are recorded in the summary instead.
pub fn render_journey(
    journey: &Journey,
    canvas: &Canvas,
    host: &mut dyn PresentationHost,
) -> Result<RenderSummary, HostError> {
    render_journey_with_progress(journey, canvas, host, |_, _| {})
}

/// Like `render_journey`, calling `on_progress(done, total)` after each panel.
pub fn render_journey_with_progress<F>(
    journey: &Journey,
    canvas: &Canvas,
    host: &mut dyn PresentationHost,
    mut on_progress: F,
) -> Result<RenderSummary, HostError>
where
    F: FnMut(usize, usize),
{
    let total = journey.panel_count();
    let mut done = 0;
    let mut summary = RenderSummary {
        page_title: journey.page_title.clone(),
        ..Default::default()
    };

    host.begin(&journey.page_title)?;

    for section in &journey.sections {
        host.section(&section.title)?;

        for (slot, panel) in section.columns.panels() {
            let screen = build_screen(&panel.spec, canvas);
            debug!("{}: built {} ({} commands)", section.title, screen.name, screen.len());

            match host.panel(slot, panel.heading.as_deref(), &screen, panel.next.as_deref()) {
                Ok(bytes) => summary.screens.push(RenderedScreen {
                    section: section.title.clone(),
                    screen: screen.name.clone(),
                    commands: screen.len(),
                    digest: digest_screen(&screen),
                    bytes,
                }),
                Err(e) if host.supports_partial() => {
                    warn!("{}: skipping {}: {}", section.title, screen.name, e);
                    summary.failures.push(PanelFailure {
                        section: section.title.clone(),
                        screen: screen.name.clone(),
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }

            done += 1;
            on_progress(done, total);
        }
    }

    host.narrative(&journey.narrative)?;
    summary.bytes_written = host.finish()?;

    info!(
        "rendered {} of {} screens ({} bytes)",
        summary.screens.len(),
        total,
        summary.bytes_written
    );

    Ok(summary)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Screen;

    /// Records every host call as a line of text.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        fail_on: Option<&'static str>,
        partial: bool,
    }

    impl PresentationHost for Recorder {
        fn begin(&mut self, page_title: &str) -> Result<(), HostError> {
            self.calls.push(format!("begin {}", page_title));
            Ok(())
        }

        fn section(&mut self, title: &str) -> Result<(), HostError> {
            self.calls.push(format!("section {}", title));
            Ok(())
        }

        fn panel(
            &mut self,
            slot: Slot,
            _heading: Option<&str>,
            screen: &Screen,
            next: Option<&str>,
        ) -> Result<u64, HostError> {
            if self.fail_on == Some(screen.name.as_str()) {
                return Err(HostError::Rejected {
                    screen: screen.name.clone(),
                    reason: "boom".into(),
                });
            }
            self.calls.push(format!("panel {:?} {} next={:?}", slot, screen.name, next));
            Ok(screen.len() as u64)
        }

        fn narrative(&mut self, narrative: &Narrative) -> Result<(), HostError> {
            self.calls.push(format!("narrative {}", narrative.phases.len()));
            Ok(())
        }

        fn finish(&mut self) -> Result<u64, HostError> {
            self.calls.push("finish".into());
            Ok(42)
        }

        fn supports_partial(&self) -> bool {
            self.partial
        }
    }

    fn panel_lines(host: &Recorder) -> Vec<&str> {
        host.calls
            .iter()
            .filter(|c| c.starts_with("panel"))
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn default_journey_has_thirteen_screens_in_order() {
        let journey = default_journey();
        assert_eq!(journey.sections.len(), 7);
        assert_eq!(journey.panel_count(), 13);

        let kinds: Vec<ScreenKind> = journey
            .sections
            .iter()
            .flat_map(|s| s.columns.panels())
            .map(|(_, p)| p.spec.kind())
            .collect();
        assert_eq!(kinds, ScreenKind::ALL.to_vec());
    }

    #[test]
    fn narrative_has_five_phases() {
        let names: Vec<String> = default_journey()
            .narrative
            .phases
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            [
                "Registration Flow",
                "Discovery Flow",
                "Engagement Flow",
                "Premium Features",
                "Content Access"
            ]
        );
    }

    #[test]
    fn host_sees_sections_panels_then_narrative() {
        let mut host = Recorder::default();
        let summary = render_journey(&default_journey(), &Canvas::default(), &mut host).unwrap();

        assert_eq!(host.calls[0], "begin User Journey Wireframes");
        assert_eq!(host.calls[1], "section User Journey - Welcome Flow");
        assert_eq!(host.calls[2], "panel Full welcome next=None");
        assert_eq!(host.calls[3], "section User Journey - Discovery Flow");
        assert_eq!(host.calls[4], "panel Left discovery next=Some(\"Playlist Creation\")");
        assert_eq!(host.calls[5], "panel Right playlist next=Some(\"Community\")");
        assert_eq!(host.calls[host.calls.len() - 2], "narrative 5");
        assert_eq!(host.calls[host.calls.len() - 1], "finish");

        assert_eq!(summary.screens.len(), 13);
        assert!(summary.failures.is_empty());
        assert_eq!(summary.bytes_written, 42);
    }

    #[test]
    fn failure_aborts_on_strict_host() {
        let mut host = Recorder {
            fail_on: Some("events"),
            ..Default::default()
        };
        let err = render_journey(&default_journey(), &Canvas::default(), &mut host).unwrap_err();

        assert!(matches!(err, HostError::Rejected { ref screen, .. } if screen == "events"));
        assert!(!host.calls.contains(&"finish".to_string()));
        assert_eq!(panel_lines(&host).len(), 4);
    }

    #[test]
    fn failure_is_recorded_on_partial_host() {
        let mut host = Recorder {
            fail_on: Some("events"),
            partial: true,
            ..Default::default()
        };
        let summary = render_journey(&default_journey(), &Canvas::default(), &mut host).unwrap();

        assert_eq!(summary.screens.len(), 12);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].screen, "events");
        assert!(summary.failures[0].error.contains("boom"));
        assert_eq!(host.calls.last().map(String::as_str), Some("finish"));
    }

    #[test]
    fn progress_reports_every_panel() {
        let mut host = Recorder::default();
        let mut seen = Vec::new();
        render_journey_with_progress(&default_journey(), &Canvas::default(), &mut host, |done, total| {
            seen.push((done, total));
        })
        .unwrap();

        assert_eq!(seen.len(), 13);
        assert_eq!(seen.first(), Some(&(1, 13)));
        assert_eq!(seen.last(), Some(&(13, 13)));
    }

    #[test]
    fn summary_digests_match_direct_builds() {
        let canvas = Canvas::default();
        let mut host = Recorder::default();
        let summary = render_journey(&default_journey(), &canvas, &mut host).unwrap();

        for (rendered, kind) in summary.screens.iter().zip(ScreenKind::ALL) {
            let direct = crate::screens::build_demo_screen(kind, &canvas);
            assert_eq!(rendered.digest, digest_screen(&direct));
        }
    }
}
