// Host-side tests for the navigation view state and scroll-spy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod nav {
    include!("../src/core/nav.rs");
}

use nav::*;

fn spy(tie_break: TieBreak) -> ScrollSpy {
    ScrollSpy {
        lookahead_px: 100.0,
        header_threshold_px: 50.0,
        tie_break,
    }
}

fn page() -> Vec<SectionExtent> {
    vec![
        SectionExtent::new(Some("home"), 0.0, 600.0),
        SectionExtent::new(Some("about"), 600.0, 800.0),
        SectionExtent::new(Some("projects"), 1400.0, 1000.0),
    ]
}

const HREFS: [&str; 3] = ["#home", "#about", "#projects"];

fn state() -> NavState {
    NavState::new(HREFS.iter().map(|h| h.to_string()).collect())
}

fn active_links(s: &NavState) -> Vec<usize> {
    (0..s.link_count()).filter(|&i| s.is_link_active(i)).collect()
}

fn highlighted(s: &NavState) -> Vec<&'static str> {
    active_links(s).into_iter().map(|i| HREFS[i]).collect()
}

#[test]
fn header_marker_has_hysteresis_at_fifty() {
    let spy = spy(TieBreak::LastMatch);
    assert!(!spy.header_scrolled(0.0));
    assert!(!spy.header_scrolled(50.0));
    assert!(spy.header_scrolled(50.5));
    assert!(spy.header_scrolled(51.0));

    let mut s = state();
    s.on_scroll(&spy, 51.0, &page());
    assert!(s.header_scrolled);
    s.on_scroll(&spy, 50.0, &page());
    assert!(!s.header_scrolled);
}

#[test]
fn section_becomes_active_exactly_at_lookahead_boundary() {
    let spy = spy(TieBreak::LastMatch);
    let sections = page();
    let mut s = state();

    s.on_scroll(&spy, 499.0, &sections);
    assert_eq!(highlighted(&s), vec!["#home"]);

    // about.top - 100
    s.on_scroll(&spy, 500.0, &sections);
    assert_eq!(highlighted(&s), vec!["#about"]);

    // about.top - 100 + about.height hands over to the next section
    s.on_scroll(&spy, 1300.0, &sections);
    assert_eq!(highlighted(&s), vec!["#projects"]);
}

#[test]
fn at_most_one_link_is_active_for_every_offset() {
    let spy = spy(TieBreak::LastMatch);
    let sections = page();
    let mut s = state();
    let mut y = 0.0;
    while y < 2600.0 {
        s.on_scroll(&spy, y, &sections);
        let active = active_links(&s);
        assert!(active.len() <= 1, "offset {y}: {active:?}");
        if let Some(section) = spy.locate(&sections, y) {
            let expected = section.fragment().unwrap();
            assert_eq!(highlighted(&s), vec![expected.as_str()], "offset {y}");
        }
        y += 25.0;
    }
}

#[test]
fn no_match_leaves_highlight_unchanged() {
    let spy = spy(TieBreak::LastMatch);
    let sections = page();
    let mut s = state();
    s.on_scroll(&spy, 2000.0, &sections);
    assert_eq!(highlighted(&s), vec!["#projects"]);
    // Past the last section: nothing matches
    s.on_scroll(&spy, 5000.0, &sections);
    assert_eq!(highlighted(&s), vec!["#projects"]);
    assert_eq!(active_links(&s), vec![2]);
}

#[test]
fn section_without_id_clears_every_link() {
    let spy = spy(TieBreak::LastMatch);
    let sections = vec![
        SectionExtent::new(Some("home"), 0.0, 600.0),
        SectionExtent::new(None, 600.0, 400.0),
    ];
    let mut s = state();
    s.on_scroll(&spy, 100.0, &sections);
    assert_eq!(active_links(&s), vec![0]);
    s.on_scroll(&spy, 700.0, &sections);
    assert!(active_links(&s).is_empty());
}

#[test]
fn overlapping_sections_follow_tie_break() {
    let sections = vec![
        SectionExtent::new(Some("home"), 0.0, 1000.0),
        SectionExtent::new(Some("about"), 500.0, 200.0),
    ];
    let last = spy(TieBreak::LastMatch);
    let first = spy(TieBreak::FirstMatch);
    assert_eq!(last.locate(&sections, 450.0).and_then(|s| s.id.as_deref()), Some("about"));
    assert_eq!(first.locate(&sections, 450.0).and_then(|s| s.id.as_deref()), Some("home"));
    // Outside the overlap both agree
    assert_eq!(last.locate(&sections, 800.0).and_then(|s| s.id.as_deref()), Some("home"));
    assert_eq!(first.locate(&sections, 800.0).and_then(|s| s.id.as_deref()), Some("home"));
}

#[test]
fn tie_break_parses_attribute_values() {
    assert_eq!(TieBreak::parse("first"), Some(TieBreak::FirstMatch));
    assert_eq!(TieBreak::parse(" LAST "), Some(TieBreak::LastMatch));
    assert_eq!(TieBreak::parse("last-match"), Some(TieBreak::LastMatch));
    assert_eq!(TieBreak::parse("middle"), None);
    assert_eq!(TieBreak::default(), TieBreak::LastMatch);
}

#[test]
fn menu_toggles_and_closes_on_link_click() {
    let mut s = state();
    assert!(!s.close_menu(), "closed menu stays closed");
    s.toggle_menu();
    assert!(s.menu_open);
    assert!(s.close_menu());
    assert!(!s.menu_open);
    s.toggle_menu();
    s.toggle_menu();
    assert!(!s.menu_open);
}

#[test]
fn duplicate_hrefs_highlight_together() {
    let spy = spy(TieBreak::LastMatch);
    let mut s = NavState::new(vec!["#home".into(), "#about".into(), "#about".into()]);
    s.on_scroll(&spy, 600.0, &page());
    assert_eq!(active_links(&s), vec![1, 2]);
}
