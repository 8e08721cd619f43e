// Host-side tests for the project tab switcher.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod tabs {
        include!("../src/core/tabs.rs");
    }
}

use crate::core::error::SetupError;
use crate::core::tabs::*;

fn targets(ids: &[&str]) -> Vec<Option<String>> {
    ids.iter().map(|s| Some(s.to_string())).collect()
}

fn panels(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn exactly_one_panel_active_after_each_click() {
    let mut tabs = TabSet::new(
        targets(&["web", "games", "tools"]),
        panels(&["web", "games", "tools"]),
    )
    .unwrap();
    assert_eq!(tabs.active_panel(), None);

    for &click in &[1usize, 0, 2, 2, 1, 0, 0] {
        let target = tabs.select(click).map(str::to_string);
        let active_panels: Vec<usize> = (0..3).filter(|&p| tabs.is_panel_active(p)).collect();
        let active_buttons: Vec<usize> = (0..3).filter(|&b| tabs.is_button_active(b)).collect();
        assert_eq!(active_panels, vec![click]);
        assert_eq!(active_buttons, vec![click]);
        assert_eq!(target.as_deref(), tabs.active_panel());
    }
}

#[test]
fn buttons_may_be_ordered_differently_from_panels() {
    let mut tabs = TabSet::new(targets(&["b", "a"]), panels(&["a", "b"])).unwrap();
    tabs.select(0);
    assert!(tabs.is_panel_active(1));
    assert!(!tabs.is_panel_active(0));
}

#[test]
fn unknown_target_is_rejected_at_setup() {
    let err = TabSet::new(targets(&["web", "nope"]), panels(&["web"])).unwrap_err();
    assert_eq!(
        err,
        SetupError::BrokenReference {
            source_desc: "tab button 1".to_string(),
            target: "nope".to_string(),
        }
    );
    assert!(!err.is_skippable());
}

#[test]
fn button_without_target_is_rejected_at_setup() {
    let err = TabSet::new(vec![Some("web".into()), None], panels(&["web"])).unwrap_err();
    assert!(matches!(err, SetupError::BrokenReference { .. }));
}

#[test]
fn out_of_range_click_keeps_selection() {
    let mut tabs = TabSet::new(targets(&["web"]), panels(&["web"])).unwrap();
    tabs.select(0);
    assert_eq!(tabs.select(5), None);
    assert!(tabs.is_button_active(0));
}
