//! Screen builders: one deterministic layout recipe per screen kind.
//!
//! Each recipe keeps a vertical cursor starting below the nav bar and
//! advances it by fixed row strides. The constants inside one recipe are
//! tuned together (stride ≥ row height, last row inside the frame); change
//! them as a set.

use crate::layout::{
    card, centered_label, chip_row, circle, entry_lines, footer_button, heading, label, rect,
    screen_with_nav, search_field, small_button, stat_tiles, stroked_rect, tab_bar, wide_button,
    RowStack, TileStyle, CARD_RADIUS, FONT_BODY, FONT_CAPTION, FONT_DISPLAY, FONT_GLYPH,
    FONT_HEADING, FONT_ROW_TITLE,
};
use crate::spec::{
    AnalyticsSpec, CommunitySpec, DiscoverySpec, EventsSpec, ExclusiveSpec, FavoritesSpec,
    LibrarySpec, PlaylistSpec, PreferencesSpec, PremiumSpec, ProfileActivitySpec, ProfileSpec,
    ScreenSpec, Stat, WelcomeSpec,
};
use crate::theme::Canvas;
use crate::types::{FontSpec, Paint, Screen, ScreenKind, Stroke};

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Build the screen described by `spec`.
///
/// Pure: same spec and canvas always produce the same command list.
pub fn build_screen(spec: &ScreenSpec, canvas: &Canvas) -> Screen {
    match spec {
        ScreenSpec::Welcome(s) => welcome(s, canvas),
        ScreenSpec::Discovery(s) => discovery(s, canvas),
        ScreenSpec::Playlist(s) => playlist(s, canvas),
        ScreenSpec::Community(s) => community(s, canvas),
        ScreenSpec::Events(s) => events(s, canvas),
        ScreenSpec::Premium(s) => premium(s, canvas),
        ScreenSpec::Exclusive(s) => exclusive(s, canvas),
        ScreenSpec::Library(s) => library(s, canvas),
        ScreenSpec::Favorites(s) => favorites(s, canvas),
        ScreenSpec::Analytics(s) => analytics(s, canvas),
        ScreenSpec::Profile(s) => profile(s, canvas),
        ScreenSpec::ProfileActivity(s) => profile_activity(s, canvas),
        ScreenSpec::Preferences(s) => preferences(s, canvas),
    }
}

/// Build `kind` with its gallery content.
pub fn build_demo_screen(kind: ScreenKind, canvas: &Canvas) -> Screen {
    build_screen(&ScreenSpec::demo(kind), canvas)
}

fn start(kind: ScreenKind, title: &str, canvas: &Canvas) -> Screen {
    screen_with_nav(canvas, kind.slug(), title, kind.has_back())
}

// ============================================================================
// REGISTRATION
// ============================================================================

fn welcome(spec: &WelcomeSpec, canvas: &Canvas) -> Screen {
    let Canvas { theme, frame } = canvas;
    let mut screen = start(ScreenKind::Welcome, &spec.title, canvas);
    let cx = frame.center_x();

    // Logo mark
    screen.push(circle(cx, 180.0, 50.0, Paint::solid(&theme.primary)));
    screen.push(centered_label(
        cx,
        280.0,
        &spec.headline,
        Paint::solid(&theme.text),
        FONT_DISPLAY,
    ));
    screen.push(centered_label(
        cx,
        320.0,
        &spec.tagline,
        Paint::solid(&theme.secondary),
        FontSpec::regular(16),
    ));

    let rows = RowStack::new(frame.height - 200.0, 70.0);
    for (i, button) in spec.buttons.iter().enumerate() {
        screen.extend(wide_button(canvas, rows.y(i), &button.label, button.primary));
    }

    screen
}

// ============================================================================
// DISCOVERY
// ============================================================================

fn discovery(spec: &DiscoverySpec, canvas: &Canvas) -> Screen {
    let Canvas { theme, frame } = canvas;
    let mut screen = start(ScreenKind::Discovery, &spec.title, canvas);

    let mut y = 108.0;
    screen.extend(search_field(canvas, y, &spec.search_placeholder));

    y += 64.0;
    screen.extend(chip_row(canvas, y, &spec.filters));

    y += 60.0;
    screen.push(heading(canvas, y, &spec.heading, FONT_HEADING));

    y += 20.0;
    let rows = RowStack::new(y, 90.0);
    for (i, athlete) in spec.athletes.iter().enumerate() {
        let top = rows.y(i);
        screen.push(card(canvas, top, 80.0, Paint::solid(&theme.surface)));
        screen.push(circle(
            frame.padding + 40.0,
            top + 40.0,
            30.0,
            Paint::solid(&theme.placeholder),
        ));
        screen.extend(entry_lines(canvas, 100.0, top + 35.0, athlete));
    }

    screen
}

fn playlist(spec: &PlaylistSpec, canvas: &Canvas) -> Screen {
    let Canvas { theme, frame } = canvas;
    let mut screen = start(ScreenKind::Playlist, &spec.title, canvas);

    let mut y = 108.0;
    screen.push(heading(canvas, y, &spec.name_label, FONT_BODY));
    screen.push(stroked_rect(
        frame.padding,
        y + 10.0,
        frame.content_width(),
        44.0,
        CARD_RADIUS,
        Paint::None,
        Stroke::hairline(&theme.border),
    ));

    y += 84.0;
    screen.push(heading(canvas, y, &spec.tracks_heading, FONT_BODY));

    let rows = RowStack::new(y + 20.0, 60.0);
    let add_x = frame.width - 45.0;
    for (i, track) in spec.tracks.iter().enumerate() {
        let top = rows.y(i);
        screen.push(card(canvas, top, 50.0, Paint::solid(&theme.surface)));
        screen.push(label(40.0, top + 25.0, track, Paint::solid(&theme.text), FONT_BODY));
        screen.push(circle(add_x, top + 25.0, 15.0, Paint::solid(&theme.primary)));
        screen.push(centered_label(
            add_x,
            top + 30.0,
            "+",
            Paint::solid(&theme.on_primary),
            FONT_GLYPH,
        ));
    }

    screen.extend(footer_button(canvas, &spec.action));
    screen
}

// ============================================================================
// ENGAGEMENT
// ============================================================================

fn community(spec: &CommunitySpec, canvas: &Canvas) -> Screen {
    let theme = &canvas.theme;
    let mut screen = start(ScreenKind::Community, &spec.title, canvas);

    screen.extend(tab_bar(canvas, canvas.frame.content_top(), &spec.tabs));

    let y = 152.0;
    screen.push(heading(canvas, y, &spec.heading, FONT_HEADING));

    let rows = RowStack::new(y + 20.0, 120.0);
    for (i, post) in spec.posts.iter().enumerate() {
        let top = rows.y(i);
        screen.push(card(canvas, top, 100.0, Paint::solid(&theme.surface)));
        screen.push(circle(50.0, top + 30.0, 20.0, Paint::solid(&theme.placeholder)));
        screen.extend(entry_lines(canvas, 80.0, top + 25.0, post));
    }

    screen
}

fn events(spec: &EventsSpec, canvas: &Canvas) -> Screen {
    let theme = &canvas.theme;
    let mut screen = start(ScreenKind::Events, &spec.title, canvas);

    let mut y = 108.0;
    screen.extend(search_field(canvas, y, &spec.search_placeholder));

    y += 64.0;
    screen.push(heading(canvas, y, &spec.heading, FONT_HEADING));

    let rows = RowStack::new(y + 20.0, 140.0);
    for (i, event) in spec.events.iter().enumerate() {
        let top = rows.y(i);
        screen.push(card(canvas, top, 120.0, Paint::solid(&theme.surface)));
        // Image placeholder across the top half
        screen.push(card(canvas, top, 60.0, Paint::solid(&theme.placeholder)));
        screen.extend(entry_lines(canvas, 30.0, top + 80.0, event));
        screen.extend(small_button(canvas, top + 75.0, &spec.action, true));
    }

    screen
}

// ============================================================================
// PREMIUM
// ============================================================================

fn premium(spec: &PremiumSpec, canvas: &Canvas) -> Screen {
    let theme = &canvas.theme;
    let mut screen = start(ScreenKind::Premium, &spec.title, canvas);

    let y = 108.0;
    screen.push(heading(canvas, y, &spec.heading, FONT_HEADING.system()));

    let rows = RowStack::new(y + 30.0, 120.0);
    for (i, plan) in spec.plans.iter().enumerate() {
        let top = rows.y(i);
        screen.push(card(canvas, top, 110.0, Paint::solid(&theme.surface)));
        screen.push(label(
            40.0,
            top + 30.0,
            &plan.name,
            Paint::solid(&theme.text),
            FONT_HEADING.system(),
        ));
        screen.push(label(
            40.0,
            top + 60.0,
            &plan.price,
            Paint::solid(&theme.primary),
            FontSpec::bold(24).system(),
        ));
        screen.push(label(
            40.0,
            top + 90.0,
            &plan.features,
            Paint::solid(&theme.secondary),
            FONT_CAPTION.system(),
        ));
        screen.extend(small_button(canvas, top + 45.0, &spec.action, plan.selected));
    }

    screen
}

fn exclusive(spec: &ExclusiveSpec, canvas: &Canvas) -> Screen {
    let theme = &canvas.theme;
    let mut screen = start(ScreenKind::Exclusive, &spec.title, canvas);

    let mut y = 108.0;
    screen.push(heading(canvas, y, &spec.events_heading, FONT_HEADING));

    let events = RowStack::new(y + 30.0, 140.0);
    for (i, event) in spec.events.iter().enumerate() {
        let top = events.y(i);
        screen.push(card(canvas, top, 120.0, Paint::solid(&theme.surface)));
        screen.push(card(canvas, top, 60.0, Paint::solid(&theme.placeholder)));
        screen.extend(entry_lines(canvas, 40.0, top + 80.0, event));
    }
    y = events.end(spec.events.len());

    screen.push(heading(canvas, y, &spec.content_heading, FONT_HEADING));

    let releases = RowStack::new(y + 30.0, 100.0);
    for (i, release) in spec.releases.iter().enumerate() {
        let top = releases.y(i);
        screen.push(card(canvas, top, 80.0, Paint::solid(&theme.surface)));
        screen.extend(entry_lines(canvas, 40.0, top + 30.0, release));
    }

    screen
}

// ============================================================================
// CONTENT ACCESS
// ============================================================================

fn library(spec: &LibrarySpec, canvas: &Canvas) -> Screen {
    let Canvas { theme, frame } = canvas;
    let mut screen = start(ScreenKind::Library, &spec.title, canvas);

    let mut y = 108.0;
    screen.extend(search_field(canvas, y, &spec.search_placeholder));

    y += 74.0;
    screen.push(heading(canvas, y, &spec.heading, FONT_HEADING));

    let rows = RowStack::new(y + 20.0, 120.0);
    for (i, playlist) in spec.playlists.iter().enumerate() {
        let top = rows.y(i);
        screen.push(card(canvas, top, 100.0, Paint::solid(&theme.surface)));
        // Cover art
        screen.push(rect(
            frame.padding,
            top,
            100.0,
            100.0,
            CARD_RADIUS,
            Paint::solid(&theme.placeholder),
        ));
        screen.extend(entry_lines(canvas, 140.0, top + 30.0, playlist));
    }

    screen
}

fn favorites(spec: &FavoritesSpec, canvas: &Canvas) -> Screen {
    let Canvas { theme, frame } = canvas;
    let mut screen = start(ScreenKind::Favorites, &spec.title, canvas);

    screen.extend(tab_bar(canvas, frame.content_top(), &spec.tabs));

    let rows = RowStack::new(152.0, 70.0);
    for (i, item) in spec.items.iter().enumerate() {
        let top = rows.y(i);
        screen.push(card(canvas, top, 60.0, Paint::solid(&theme.surface)));
        screen.push(rect(
            frame.padding,
            top,
            60.0,
            60.0,
            CARD_RADIUS,
            Paint::solid(&theme.placeholder),
        ));
        screen.extend(entry_lines(canvas, 100.0, top + 25.0, item));
        // Favorite marker
        screen.push(circle(
            frame.width - 40.0,
            top + 30.0,
            15.0,
            Paint::solid(&theme.primary),
        ));
    }

    screen
}

// ============================================================================
// PROFILE & ANALYTICS
// ============================================================================

fn analytics(spec: &AnalyticsSpec, canvas: &Canvas) -> Screen {
    let theme = &canvas.theme;
    let mut screen = start(ScreenKind::Analytics, &spec.title, canvas);

    let mut y = 108.0;
    screen.push(heading(canvas, y, &spec.heading, FONT_HEADING));

    y += 30.0;
    screen.extend(stat_tiles(
        canvas,
        y,
        &spec.stats,
        TileStyle {
            height: 80.0,
            value_font: FontSpec::bold(24),
            value_dy: 35.0,
            label_dy: 60.0,
        },
    ));

    y += 120.0;
    screen.push(heading(canvas, y, &spec.list_heading, FONT_BODY));

    let rows = RowStack::new(y + 20.0, 70.0);
    for (i, artist) in spec.artists.iter().enumerate() {
        let top = rows.y(i);
        screen.push(card(canvas, top, 60.0, Paint::solid(&theme.surface)));
        screen.push(circle(50.0, top + 30.0, 25.0, Paint::solid(&theme.placeholder)));
        screen.extend(entry_lines(canvas, 90.0, top + 25.0, artist));
    }

    screen
}

const PROFILE_TILES: TileStyle = TileStyle {
    height: 60.0,
    value_font: FontSpec::bold(17),
    value_dy: 25.0,
    label_dy: 45.0,
};

/// Avatar, username and stat row shared by both profile variants.
/// Returns the y just below the stat row's slot.
fn profile_header(screen: &mut Screen, canvas: &Canvas, username: &str, stats: &[Stat]) -> f64 {
    let Canvas { theme, frame } = canvas;
    let cx = frame.center_x();
    let y = 108.0;

    screen.push(circle(cx, y + 50.0, 40.0, Paint::solid(&theme.surface)));
    screen.push(centered_label(
        cx,
        y + 110.0,
        username,
        Paint::solid(&theme.text),
        FONT_HEADING,
    ));

    let tiles_y = y + 140.0;
    screen.extend(stat_tiles(canvas, tiles_y, stats, PROFILE_TILES));
    tiles_y
}

fn profile(spec: &ProfileSpec, canvas: &Canvas) -> Screen {
    let mut screen = start(ScreenKind::Profile, &spec.title, canvas);
    profile_header(&mut screen, canvas, &spec.username, &spec.stats);
    screen.extend(footer_button(canvas, &spec.action));
    screen
}

fn profile_activity(spec: &ProfileActivitySpec, canvas: &Canvas) -> Screen {
    let theme = &canvas.theme;
    let mut screen = start(ScreenKind::ProfileActivity, &spec.title, canvas);

    let mut y = profile_header(&mut screen, canvas, &spec.username, &spec.stats);

    y += 100.0;
    screen.push(heading(canvas, y, &spec.activity_heading, FONT_ROW_TITLE));

    let rows = RowStack::new(y + 20.0, 60.0);
    for (i, item) in spec.activity.iter().enumerate() {
        let top = rows.y(i);
        screen.push(card(canvas, top, 50.0, Paint::solid(&theme.surface)));
        screen.push(label(40.0, top + 30.0, item, Paint::solid(&theme.text), FONT_BODY));
    }

    screen
}

fn preferences(spec: &PreferencesSpec, canvas: &Canvas) -> Screen {
    let Canvas { theme, frame } = canvas;
    let mut screen = start(ScreenKind::Preferences, &spec.title, canvas);

    let y = 108.0;
    screen.push(heading(canvas, y, &spec.heading, FONT_HEADING));

    let rows = RowStack::new(y + 40.0, 60.0);
    for (i, option) in spec.options.iter().enumerate() {
        let top = rows.y(i);
        screen.push(stroked_rect(
            frame.padding,
            top,
            frame.content_width(),
            50.0,
            CARD_RADIUS,
            Paint::None,
            Stroke::hairline(&theme.border),
        ));
        screen.push(label(40.0, top + 30.0, option, Paint::solid(&theme.text), FONT_BODY));
        // Checkbox
        screen.push(stroked_rect(
            frame.width - 60.0,
            top + 15.0,
            20.0,
            20.0,
            4.0,
            Paint::None,
            Stroke::hairline(&theme.border),
        ));
    }

    screen.extend(footer_button(canvas, &spec.action));
    screen
}

// ============================================================================
// TESTS
// ============================================================================
