//! Report formatting for render and check results.
//!
//! Pure functions: (data, OutputFormat) → String.
//! No I/O, no side effects.

use humansize::{format_size, BINARY};
use serde::Serialize;

use crate::journey::RenderSummary;
use crate::types::OutputFormat;
use crate::validate::ScreenCheck;

/// Format a render summary for output.
pub fn format_report(summary: &RenderSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(summary),
        OutputFormat::Json => format_json(summary),
    }
}

/// Format layout check results for output.
pub fn format_checks(checks: &[ScreenCheck], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_checks_human(checks),
        OutputFormat::Json => format_json(&checks),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(summary: &RenderSummary) -> String {
    let mut out = String::new();

    if !summary.screens.is_empty() {
        out.push_str("=== Rendered Screens ===\n");
        let mut section = "";
        for screen in &summary.screens {
            if screen.section != section {
                out.push_str(&format!("{}\n", screen.section));
                section = screen.section.as_str();
            }
            out.push_str(&format!(
                "  └─ {:<18} {:>3} commands  {:>9}  {}\n",
                screen.screen,
                screen.commands,
                format_size(screen.bytes, BINARY),
                screen.digest.short()
            ));
        }
        out.push('\n');
    }

    if !summary.failures.is_empty() {
        out.push_str("=== Failed (host errors) ===\n");
        for failure in &summary.failures {
            out.push_str(&format!("  {} - {}\n", failure.screen, failure.error));
        }
        out.push('\n');
    }

    out.push_str(&format_summary(summary));
    out
}

fn format_summary(summary: &RenderSummary) -> String {
    let commands: usize = summary.screens.iter().map(|s| s.commands).sum();

    let mut out = String::new();
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Page:           {}\n", summary.page_title));
    out.push_str(&format!("Screens:        {}\n", summary.screens.len()));
    out.push_str(&format!("Draw commands:  {}\n", commands));
    if !summary.failures.is_empty() {
        out.push_str(&format!("Failed:         {}\n", summary.failures.len()));
    }
    out.push_str(&format!(
        "Output size:    {}\n",
        format_size(summary.bytes_written, BINARY)
    ));
    out
}

fn format_checks_human(checks: &[ScreenCheck]) -> String {
    let mut out = String::from("=== Layout Check ===\n");
    let mut failing = 0;

    for check in checks {
        let status = if check.issues.is_empty() { "ok" } else { "FAIL" };
        out.push_str(&format!(
            "{:<4} {:<18} {:>3} commands  {}\n",
            status,
            check.screen,
            check.commands,
            check.digest.short()
        ));
        for issue in &check.issues {
            out.push_str(&format!("       └─ {}\n", issue));
        }
        if !check.issues.is_empty() {
            failing += 1;
        }
    }

    out.push('\n');
    out.push_str(&format!("Screens checked: {}\n", checks.len()));
    out.push_str(&format!("With issues:     {}\n", failing));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // Plain data with string keys; this should never happen
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::{PanelFailure, RenderedScreen};
    use crate::types::ContentHash;
    use crate::validate::LayoutIssue;

    fn sample_hash() -> ContentHash {
        ContentHash([0xab; 32])
    }

    fn sample_summary() -> RenderSummary {
        RenderSummary {
            page_title: "User Journey Wireframes".into(),
            screens: vec![
                RenderedScreen {
                    section: "User Journey - Welcome Flow".into(),
                    screen: "welcome".into(),
                    commands: 12,
                    digest: sample_hash(),
                    bytes: 2048,
                },
                RenderedScreen {
                    section: "User Journey - Discovery Flow".into(),
                    screen: "discovery".into(),
                    commands: 30,
                    digest: sample_hash(),
                    bytes: 4096,
                },
            ],
            failures: vec![PanelFailure {
                section: "User Journey - Discovery Flow".into(),
                screen: "playlist".into(),
                error: "I/O error: disk full".into(),
            }],
            bytes_written: 1024 * 1024 * 2,
        }
    }

    // --- Human format tests ---

    #[test]
    fn human_format_groups_by_section() {
        let output = format_report(&sample_summary(), OutputFormat::Human);

        assert!(output.contains("=== Rendered Screens ==="));
        assert!(output.contains("User Journey - Welcome Flow\n  └─ welcome"));
        assert!(output.contains("User Journey - Discovery Flow\n  └─ discovery"));
        assert!(output.contains("abababababab"));
    }

    #[test]
    fn human_format_includes_failures() {
        let output = format_report(&sample_summary(), OutputFormat::Human);

        assert!(output.contains("=== Failed"));
        assert!(output.contains("playlist - I/O error: disk full"));
        assert!(output.contains("Failed:         1"));
    }

    #[test]
    fn human_format_includes_summary() {
        let output = format_report(&sample_summary(), OutputFormat::Human);

        assert!(output.contains("=== Summary ==="));
        assert!(output.contains("Screens:        2"));
        assert!(output.contains("Draw commands:  42"));
        assert!(output.contains("2 MiB"));
    }

    #[test]
    fn human_format_empty_summary() {
        let output = format_report(&RenderSummary::default(), OutputFormat::Human);

        assert!(!output.contains("=== Rendered Screens"));
        assert!(!output.contains("=== Failed"));
        assert!(output.contains("Screens:        0"));
    }

    #[test]
    fn human_checks_mark_failures() {
        let checks = vec![
            ScreenCheck {
                screen: "welcome".into(),
                commands: 12,
                digest: sample_hash(),
                issues: vec![],
            },
            ScreenCheck {
                screen: "library".into(),
                commands: 40,
                digest: sample_hash(),
                issues: vec![LayoutIssue::OutOfBounds { index: 30, kind: "rect" }],
            },
        ];
        let output = format_checks(&checks, OutputFormat::Human);

        assert!(output.contains("ok   welcome"));
        assert!(output.contains("FAIL library"));
        assert!(output.contains("command #30 (rect) leaves the frame"));
        assert!(output.contains("With issues:     1"));
    }

    // --- JSON format tests ---

    #[test]
    fn json_format_has_expected_fields() {
        let output = format_report(&sample_summary(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(parsed["screens"].is_array());
        assert!(parsed["failures"].is_array());
        assert_eq!(parsed["bytes_written"], 2 * 1024 * 1024);
        let digest = parsed["screens"][0]["digest"].as_str().unwrap();
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn json_checks_carry_issue_tags() {
        let checks = vec![ScreenCheck {
            screen: "x".into(),
            commands: 0,
            digest: sample_hash(),
            issues: vec![LayoutIssue::MissingFrame],
        }];
        let parsed: serde_json::Value =
            serde_json::from_str(&format_checks(&checks, OutputFormat::Json)).unwrap();
        assert_eq!(parsed[0]["issues"][0]["issue"], "missing_frame");
    }
}
