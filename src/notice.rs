use crate::core::form::{notice_display, Notice, NoticeTone};
use crate::core::{CLASS_NOTICE_VISIBLE, ID_NOTICE, NOTICE_PLACEMENT};
use crate::dom;
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    // Pending auto-hide timer, replaced when a newer notice arrives.
    static HIDE_TIMER: Cell<Option<i32>> = const { Cell::new(None) };
}

/// Find the notice element or append a fixed-position one to `<body>`.
fn notice_element(document: &web::Document) -> Option<web::HtmlElement> {
    if let Some(el) = document.get_element_by_id(ID_NOTICE) {
        return el.dyn_into::<web::HtmlElement>().ok();
    }
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_id(ID_NOTICE);
    _ = el.set_attribute("role", "status");
    _ = el.set_attribute("aria-live", "polite");
    _ = el.set_attribute("class", "notice");
    for (property, value) in NOTICE_PLACEMENT {
        dom::set_style(&el, property, value);
    }
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

fn set_visible(el: &web::HtmlElement, visible: bool) {
    dom::set_class(el, CLASS_NOTICE_VISIBLE, visible);
    dom::set_style(el, "display", notice_display(visible));
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document
        .get_element_by_id(ID_NOTICE)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        set_visible(&el, false);
    }
}

/// Show `notice` without blocking and hide it again after `duration_ms`.
pub fn show(document: &web::Document, notice: &Notice, duration_ms: i32) {
    let Some(el) = notice_element(document) else {
        log::warn!("[notice] cannot attach notice: {}", notice.text);
        return;
    };
    el.set_text_content(Some(&notice.text));
    for tone in [NoticeTone::Success, NoticeTone::Error] {
        dom::set_class(&el, tone.class(), tone == notice.tone);
    }
    dom::set_style(&el, "background", notice.tone.background());
    set_visible(&el, true);

    let Some(window) = web::window() else {
        return;
    };
    if let Some(prev) = HIDE_TIMER.with(Cell::take) {
        window.clear_timeout_with_handle(prev);
    }
    let doc = document.clone();
    let hide_cb = Closure::once(move || {
        HIDE_TIMER.with(|t| t.set(None));
        hide(&doc);
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide_cb.as_ref().unchecked_ref(),
        duration_ms,
    ) {
        Ok(handle) => HIDE_TIMER.with(|t| t.set(Some(handle))),
        Err(e) => log::warn!("[notice] setTimeout failed: {:?}", e),
    }
    hide_cb.forget();
}
