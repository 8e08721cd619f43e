/// Selector to scroll to for an in-page link, or `None` for the bare `#`.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href {
        "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Scroll destination that leaves room for the fixed header.
#[inline]
pub fn scroll_top_for(offset_top: f64, header_offset_px: f64) -> f64 {
    offset_top - header_offset_px
}
