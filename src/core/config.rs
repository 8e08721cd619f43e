use super::constants::*;
use super::nav::TieBreak;

/// Runtime knobs for the page wiring.
///
/// Defaults come from `constants`; a page can override them with data
/// attributes on `<body>` (see [`SiteConfig::from_attributes`]).
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub spy_tie_break: TieBreak,
    pub spy_lookahead_px: f64,
    pub header_threshold_px: f64,
    pub anchor_offset_px: f64,
    pub notice_ms: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            spy_tie_break: TieBreak::LastMatch,
            spy_lookahead_px: SCROLL_SPY_LOOKAHEAD_PX,
            header_threshold_px: HEADER_SCROLLED_THRESHOLD_PX,
            anchor_offset_px: ANCHOR_SCROLL_OFFSET_PX,
            notice_ms: NOTICE_DURATION_MS,
        }
    }
}

pub const ATTR_SPY_TIE_BREAK: &str = "data-spy-tie-break";
pub const ATTR_SPY_LOOKAHEAD: &str = "data-spy-lookahead";
pub const ATTR_HEADER_THRESHOLD: &str = "data-header-threshold";
pub const ATTR_ANCHOR_OFFSET: &str = "data-anchor-offset";
pub const ATTR_NOTICE_MS: &str = "data-notice-ms";

impl SiteConfig {
    /// Build a config from an attribute lookup, keeping defaults for anything
    /// absent or unparsable.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ATTR_SPY_TIE_BREAK) {
            match TieBreak::parse(&v) {
                Some(tb) => cfg.spy_tie_break = tb,
                None => log::warn!("[config] ignoring {}={:?}", ATTR_SPY_TIE_BREAK, v),
            }
        }
        if let Some(px) = parse_px(&lookup, ATTR_SPY_LOOKAHEAD) {
            cfg.spy_lookahead_px = px;
        }
        if let Some(px) = parse_px(&lookup, ATTR_HEADER_THRESHOLD) {
            cfg.header_threshold_px = px;
        }
        if let Some(px) = parse_px(&lookup, ATTR_ANCHOR_OFFSET) {
            cfg.anchor_offset_px = px;
        }
        if let Some(v) = lookup(ATTR_NOTICE_MS) {
            match v.trim().parse::<i32>() {
                Ok(ms) if ms > 0 => cfg.notice_ms = ms,
                _ => log::warn!("[config] ignoring {}={:?}", ATTR_NOTICE_MS, v),
            }
        }
        cfg
    }
}

fn parse_px(lookup: &impl Fn(&str) -> Option<String>, attr: &str) -> Option<f64> {
    let raw = lookup(attr)?;
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    match number.trim().parse::<f64>() {
        Ok(px) if px.is_finite() => Some(px),
        _ => {
            log::warn!("[config] ignoring {}={:?}", attr, raw);
            None
        }
    }
}
