//! Content hashing for built screens.
//!
//! Uses BLAKE3 over the JSON encoding of the command list, so two screens
//! hash equal exactly when they paint the same commands in the same order.

use crate::types::{ContentHash, Screen};

/// Compute the BLAKE3 digest of a screen's draw commands.
///
/// The screen name is not part of the digest.
///
/// # Panics
/// If a command fails to encode as JSON.
pub fn digest_screen(screen: &Screen) -> ContentHash {
    let mut hasher = blake3::Hasher::new();
    for command in &screen.commands {
        serde_json::to_writer(&mut hasher, command)
            .unwrap_or_else(|e| panic!("Failed to encode draw command for hashing: {}", e));
        hasher.update(b"\n");
    }
    ContentHash(*hasher.finalize().as_bytes())
}

/// Check if two screens paint identical commands.
pub fn screens_match(a: &Screen, b: &Screen) -> bool {
    digest_screen(a) == digest_screen(b)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::build_demo_screen;
    use crate::theme::{Canvas, Theme};
    use crate::types::{Color, ScreenKind};

    #[test]
    fn digest_is_stable_across_builds() {
        let canvas = Canvas::default();
        for kind in ScreenKind::ALL {
            let a = build_demo_screen(kind, &canvas);
            let b = build_demo_screen(kind, &canvas);
            assert_eq!(digest_screen(&a), digest_screen(&b));
        }
    }

    #[test]
    fn different_screens_different_digest() {
        let canvas = Canvas::default();
        let welcome = build_demo_screen(ScreenKind::Welcome, &canvas);
        let events = build_demo_screen(ScreenKind::Events, &canvas);
        assert!(!screens_match(&welcome, &events));
    }

    #[test]
    fn theme_change_changes_digest() {
        let plain = build_demo_screen(ScreenKind::Favorites, &Canvas::default());
        let themed = build_demo_screen(
            ScreenKind::Favorites,
            &Canvas::with_theme(Theme {
                primary: Color::from("#FF2D55"),
                ..Theme::default()
            }),
        );
        assert!(!screens_match(&plain, &themed));
    }

    #[test]
    fn digest_covers_each_command_json_line() {
        let screen = build_demo_screen(ScreenKind::Welcome, &Canvas::default());

        let mut expected = blake3::Hasher::new();
        for command in &screen.commands {
            expected.update(&serde_json::to_vec(command).unwrap());
            expected.update(b"\n");
        }
        assert_eq!(digest_screen(&screen).0, *expected.finalize().as_bytes());
    }

    #[test]
    fn name_does_not_affect_digest() {
        let canvas = Canvas::default();
        let a = build_demo_screen(ScreenKind::Library, &canvas);
        let mut b = a.clone();
        b.name = "renamed".into();
        assert!(screens_match(&a, &b));
    }
}
