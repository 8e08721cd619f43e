// Host-side tests for page configuration overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use crate::core::config::*;
use crate::core::constants::*;
use crate::core::nav::TieBreak;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_follow_constants() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.spy_tie_break, TieBreak::LastMatch);
    assert_eq!(cfg.spy_lookahead_px, SCROLL_SPY_LOOKAHEAD_PX);
    assert_eq!(cfg.header_threshold_px, HEADER_SCROLLED_THRESHOLD_PX);
    assert_eq!(cfg.anchor_offset_px, ANCHOR_SCROLL_OFFSET_PX);
    assert_eq!(cfg.notice_ms, NOTICE_DURATION_MS);
    assert_eq!(SiteConfig::from_attributes(lookup(&[])), cfg);
}

#[test]
fn body_attributes_override_defaults() {
    let cfg = SiteConfig::from_attributes(lookup(&[
        (ATTR_SPY_TIE_BREAK, "first"),
        (ATTR_SPY_LOOKAHEAD, "120px"),
        (ATTR_HEADER_THRESHOLD, " 10 "),
        (ATTR_ANCHOR_OFFSET, "64"),
        (ATTR_NOTICE_MS, "2500"),
    ]));
    assert_eq!(cfg.spy_tie_break, TieBreak::FirstMatch);
    assert_eq!(cfg.spy_lookahead_px, 120.0);
    assert_eq!(cfg.header_threshold_px, 10.0);
    assert_eq!(cfg.anchor_offset_px, 64.0);
    assert_eq!(cfg.notice_ms, 2500);
}

#[test]
fn invalid_values_keep_defaults() {
    let cfg = SiteConfig::from_attributes(lookup(&[
        (ATTR_SPY_TIE_BREAK, "random"),
        (ATTR_SPY_LOOKAHEAD, "lots"),
        (ATTR_ANCHOR_OFFSET, "NaN"),
        (ATTR_NOTICE_MS, "-5"),
    ]));
    assert_eq!(cfg, SiteConfig::default());
}
