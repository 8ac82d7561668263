//! Per-screen content: the labels and values a builder lays out.
//!
//! Every list section is a `Vec`, so a caller can feed live data. The
//! `demo` constructors hold the fixed gallery content.

use serde::{Deserialize, Serialize};

use crate::types::ScreenKind;

// ============================================================================
// SHARED PIECES
// ============================================================================

/// A two-line list entry: bold title over secondary copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub subtitle: String,
}

impl Entry {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    /// Solid primary fill; otherwise outlined.
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub label: String,
    pub active: bool,
}

/// Label/value pair shown in a stat tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tabs {
    pub labels: Vec<String>,
    /// Index of the highlighted tab.
    pub active: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub features: String,
    pub selected: bool,
}

// ============================================================================
// SCREEN SPECS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeSpec {
    pub title: String,
    pub headline: String,
    pub tagline: String,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverySpec {
    pub title: String,
    pub search_placeholder: String,
    pub filters: Vec<Chip>,
    pub heading: String,
    pub athletes: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSpec {
    pub title: String,
    pub name_label: String,
    pub tracks_heading: String,
    pub tracks: Vec<String>,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunitySpec {
    pub title: String,
    pub tabs: Tabs,
    pub heading: String,
    pub posts: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsSpec {
    pub title: String,
    pub search_placeholder: String,
    pub heading: String,
    pub events: Vec<Entry>,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumSpec {
    pub title: String,
    pub heading: String,
    pub plans: Vec<Plan>,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusiveSpec {
    pub title: String,
    pub events_heading: String,
    pub events: Vec<Entry>,
    pub content_heading: String,
    pub releases: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySpec {
    pub title: String,
    pub search_placeholder: String,
    pub heading: String,
    pub playlists: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesSpec {
    pub title: String,
    pub tabs: Tabs,
    pub items: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSpec {
    pub title: String,
    pub heading: String,
    pub stats: Vec<Stat>,
    pub list_heading: String,
    pub artists: Vec<Entry>,
}

/// Profile header with an edit action at the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSpec {
    pub title: String,
    pub username: String,
    pub stats: Vec<Stat>,
    pub action: String,
}

/// Profile header followed by a recent-activity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileActivitySpec {
    pub title: String,
    pub username: String,
    pub stats: Vec<Stat>,
    pub activity_heading: String,
    pub activity: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesSpec {
    pub title: String,
    pub heading: String,
    pub options: Vec<String>,
    pub action: String,
}

/// Content for one screen. The variant decides which builder runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "kebab-case")]
pub enum ScreenSpec {
    Welcome(WelcomeSpec),
    Discovery(DiscoverySpec),
    Playlist(PlaylistSpec),
    Community(CommunitySpec),
    Events(EventsSpec),
    Premium(PremiumSpec),
    Exclusive(ExclusiveSpec),
    Library(LibrarySpec),
    Favorites(FavoritesSpec),
    Analytics(AnalyticsSpec),
    Profile(ProfileSpec),
    ProfileActivity(ProfileActivitySpec),
    Preferences(PreferencesSpec),
}

impl ScreenSpec {
    pub fn kind(&self) -> ScreenKind {
        match self {
            ScreenSpec::Welcome(_) => ScreenKind::Welcome,
            ScreenSpec::Discovery(_) => ScreenKind::Discovery,
            ScreenSpec::Playlist(_) => ScreenKind::Playlist,
            ScreenSpec::Community(_) => ScreenKind::Community,
            ScreenSpec::Events(_) => ScreenKind::Events,
            ScreenSpec::Premium(_) => ScreenKind::Premium,
            ScreenSpec::Exclusive(_) => ScreenKind::Exclusive,
            ScreenSpec::Library(_) => ScreenKind::Library,
            ScreenSpec::Favorites(_) => ScreenKind::Favorites,
            ScreenSpec::Analytics(_) => ScreenKind::Analytics,
            ScreenSpec::Profile(_) => ScreenKind::Profile,
            ScreenSpec::ProfileActivity(_) => ScreenKind::ProfileActivity,
            ScreenSpec::Preferences(_) => ScreenKind::Preferences,
        }
    }

    /// Nav-bar title.
    pub fn title(&self) -> &str {
        match self {
            ScreenSpec::Welcome(s) => &s.title,
            ScreenSpec::Discovery(s) => &s.title,
            ScreenSpec::Playlist(s) => &s.title,
            ScreenSpec::Community(s) => &s.title,
            ScreenSpec::Events(s) => &s.title,
            ScreenSpec::Premium(s) => &s.title,
            ScreenSpec::Exclusive(s) => &s.title,
            ScreenSpec::Library(s) => &s.title,
            ScreenSpec::Favorites(s) => &s.title,
            ScreenSpec::Analytics(s) => &s.title,
            ScreenSpec::Profile(s) => &s.title,
            ScreenSpec::ProfileActivity(s) => &s.title,
            ScreenSpec::Preferences(s) => &s.title,
        }
    }

    /// The fixed gallery content for `kind`.
    pub fn demo(kind: ScreenKind) -> Self {
        match kind {
            ScreenKind::Welcome => ScreenSpec::Welcome(WelcomeSpec {
                title: "Welcome".into(),
                headline: "Welcome to Ball Talk".into(),
                tagline: "Connect with your favorite athletes".into(),
                buttons: vec![
                    Button {
                        label: "Continue with Email".into(),
                        primary: true,
                    },
                    Button {
                        label: "Continue with Social".into(),
                        primary: false,
                    },
                ],
            }),
            ScreenKind::Discovery => ScreenSpec::Discovery(DiscoverySpec {
                title: "Discover".into(),
                search_placeholder: "Search athletes, leagues...".into(),
                filters: chips(&["All", "NBA", "NFL", "MLB"], 0),
                heading: "Featured Athletes".into(),
                athletes: (0..4)
                    .map(|_| Entry::new("Athlete Name", "NBA • Detroit Pistons"))
                    .collect(),
            }),
            ScreenKind::Playlist => ScreenSpec::Playlist(PlaylistSpec {
                title: "Create Playlist".into(),
                name_label: "Playlist Name".into(),
                tracks_heading: "Add Tracks".into(),
                tracks: numbered("Track", 5),
                action: "Create Playlist".into(),
            }),
            ScreenKind::Community => ScreenSpec::Community(CommunitySpec {
                title: "Community".into(),
                tabs: tabs(&["Feed", "Events", "Messages"]),
                heading: "Community Feed".into(),
                posts: (0..3)
                    .map(|_| Entry::new("Athlete Name", "Post preview..."))
                    .collect(),
            }),
            ScreenKind::Events => ScreenSpec::Events(EventsSpec {
                title: "Events".into(),
                search_placeholder: "Search events...".into(),
                heading: "Upcoming Events".into(),
                events: numbered("Event", 3)
                    .into_iter()
                    .map(|name| Entry::new(name, "Date & Location"))
                    .collect(),
                action: "RSVP".into(),
            }),
            ScreenKind::Premium => ScreenSpec::Premium(PremiumSpec {
                title: "Premium Features".into(),
                heading: "Premium Plans".into(),
                plans: vec![
                    plan("Basic", "$0", "Previews + Limited access", false),
                    plan("Plus", "$6.99", "Basic streaming access", false),
                    plan("Pro", "$9.99", "Unlimited streaming + Downloads", true),
                    plan("Elite", "$17.99", "All features + VIP access", false),
                ],
                action: "Select".into(),
            }),
            ScreenKind::Exclusive => ScreenSpec::Exclusive(ExclusiveSpec {
                title: "Exclusive Content".into(),
                events_heading: "VIP Events".into(),
                events: numbered("VIP Event", 2)
                    .into_iter()
                    .map(|name| Entry::new(name, "Exclusive Meet & Greet"))
                    .collect(),
                content_heading: "Premium Content".into(),
                releases: numbered("Exclusive Track", 2)
                    .into_iter()
                    .map(|name| Entry::new(name, "Premium Release"))
                    .collect(),
            }),
            ScreenKind::Library => ScreenSpec::Library(LibrarySpec {
                title: "My Library".into(),
                search_placeholder: "Search playlists...".into(),
                heading: "My Playlists".into(),
                playlists: (1..=3)
                    .map(|i| Entry::new(format!("Playlist {}", i), format!("{} tracks", i * 10)))
                    .collect(),
            }),
            ScreenKind::Favorites => ScreenSpec::Favorites(FavoritesSpec {
                title: "Favorites".into(),
                tabs: tabs(&["Tracks", "Artists", "Playlists"]),
                items: numbered("Track", 5)
                    .into_iter()
                    .map(|name| Entry::new(name, "Artist Name"))
                    .collect(),
            }),
            ScreenKind::Analytics => ScreenSpec::Analytics(AnalyticsSpec {
                title: "My Stats".into(),
                heading: "Listening Activity".into(),
                stats: vec![
                    Stat::new("Hours Listened", "24.5"),
                    Stat::new("Artists", "12"),
                    Stat::new("Playlists", "5"),
                ],
                list_heading: "Top Artists".into(),
                artists: (1..=3)
                    .map(|i| Entry::new(format!("Artist {}", i), format!("{} hours listened", 4 - i)))
                    .collect(),
            }),
            ScreenKind::Profile => ScreenSpec::Profile(ProfileSpec {
                title: "Profile".into(),
                username: "Username".into(),
                stats: vec![
                    Stat::new("Playlists", "12"),
                    Stat::new("Following", "45"),
                    Stat::new("Events", "3"),
                ],
                action: "Edit Profile".into(),
            }),
            ScreenKind::ProfileActivity => ScreenSpec::ProfileActivity(ProfileActivitySpec {
                title: "Profile".into(),
                username: "Username".into(),
                stats: vec![
                    Stat::new("Following", "45"),
                    Stat::new("Playlists", "12"),
                    Stat::new("Events", "3"),
                ],
                activity_heading: "Recent Activity".into(),
                activity: numbered("Activity", 3),
            }),
            ScreenKind::Preferences => ScreenSpec::Preferences(PreferencesSpec {
                title: "Preferences".into(),
                heading: "Music Preferences".into(),
                options: ["Hip Hop", "R&B", "Pop", "Rock"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                action: "Save Preferences".into(),
            }),
        }
    }
}

// ============================================================================
// DEMO HELPERS
// ============================================================================

/// "Label 1".."Label n".
fn numbered(label: &str, n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("{} {}", label, i)).collect()
}

fn chips(labels: &[&str], active: usize) -> Vec<Chip> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Chip {
            label: label.to_string(),
            active: i == active,
        })
        .collect()
}

fn tabs(labels: &[&str]) -> Tabs {
    Tabs {
        labels: labels.iter().map(|s| s.to_string()).collect(),
        active: 0,
    }
}

fn plan(name: &str, price: &str, features: &str, selected: bool) -> Plan {
    Plan {
        name: name.into(),
        price: price.into(),
        features: features.into(),
        selected,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_spec_kind_matches_request() {
        for kind in ScreenKind::ALL {
            assert_eq!(ScreenSpec::demo(kind).kind(), kind);
        }
    }

    #[test]
    fn demo_premium_has_one_selected_plan() {
        let ScreenSpec::Premium(spec) = ScreenSpec::demo(ScreenKind::Premium) else {
            panic!("expected premium spec");
        };
        assert_eq!(spec.plans.len(), 4);
        assert_eq!(spec.plans.iter().filter(|p| p.selected).count(), 1);
    }

    #[test]
    fn demo_analytics_hours_count_down() {
        let ScreenSpec::Analytics(spec) = ScreenSpec::demo(ScreenKind::Analytics) else {
            panic!("expected analytics spec");
        };
        let subtitles: Vec<&str> = spec.artists.iter().map(|a| a.subtitle.as_str()).collect();
        assert_eq!(subtitles, ["3 hours listened", "2 hours listened", "1 hours listened"]);
    }

    #[test]
    fn spec_json_is_tagged_by_screen_slug() {
        let value = serde_json::to_value(ScreenSpec::demo(ScreenKind::ProfileActivity)).unwrap();
        assert_eq!(value["screen"], "profile-activity");
        assert_eq!(value["activity"][0], "Activity 1");
    }

    #[test]
    fn spec_parses_from_json() {
        let json = r#"{
            "screen": "preferences",
            "title": "Genres",
            "heading": "Pick some",
            "options": ["Jazz"],
            "action": "Done"
        }"#;
        let spec: ScreenSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.kind(), ScreenKind::Preferences);
        assert_eq!(spec.title(), "Genres");
    }
}
