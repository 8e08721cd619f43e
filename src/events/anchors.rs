use crate::core::anchor::{anchor_selector, scroll_top_for};
use crate::core::*;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Smooth scrolling for in-page links, leaving room for the fixed header.
pub fn wire_anchor_scrolling(document: &web::Document, config: &SiteConfig) -> Result<(), SetupError> {
    let anchors: Vec<web::Element> = dom::query_all(document, SEL_ANCHORS);
    if anchors.is_empty() {
        return Err(SetupError::missing(SEL_ANCHORS));
    }
    let offset = config.anchor_offset_px;
    for anchor in &anchors {
        let a = anchor.clone();
        let doc = document.clone();
        dom::add_click_listener(anchor, move |ev| {
            ev.prevent_default();
            let href = a.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            let target = match doc.query_selector(selector) {
                Ok(Some(t)) => t,
                Ok(None) => return,
                Err(_) => {
                    log::debug!("[anchor] `{}` is not a valid selector", selector);
                    return;
                }
            };
            let Some(target) = target.dyn_ref::<web::HtmlElement>() else {
                return;
            };
            let Some(w) = web::window() else {
                return;
            };
            let opts = web::ScrollToOptions::new();
            opts.set_top(scroll_top_for(target.offset_top() as f64, offset));
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        });
    }
    log::info!("[anchor] wired {} in-page links", anchors.len());
    Ok(())
}
