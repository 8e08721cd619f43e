use crate::core::reveal::{stagger_indices, RevealTracker};
use crate::core::*;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Staggered intro paragraphs and one-shot reveal of cards and form rows.
pub fn wire_scroll_reveal(document: &web::Document) -> Result<(), SetupError> {
    let intro: Vec<web::HtmlElement> = dom::query_all(document, SEL_INTRO_PARAGRAPHS);
    for (p, i) in intro.iter().zip(stagger_indices(intro.len())) {
        dom::set_style(p, CSS_STAGGER_VAR, &i.to_string());
    }

    let targets: Vec<web::Element> = dom::query_all(document, SEL_REVEAL_TARGETS);
    if targets.is_empty() {
        return Err(SetupError::missing(SEL_REVEAL_TARGETS));
    }
    let watched = targets.len();
    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets)));

    let tracker_cb = tracker.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, obs: JsValue| {
        let observer = obs.dyn_into::<web::IntersectionObserver>().ok();
        let mut tracker = tracker_cb.borrow_mut();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            let el = entry.target();
            if tracker.observe(&el, entry.is_intersecting()) {
                _ = el.class_list().add_1(CLASS_IN_VIEW);
                if let Some(o) = &observer {
                    o.unobserve(&el);
                }
            }
        }
        if tracker.all_revealed() {
            if let Some(o) = &observer {
                o.disconnect();
                log::debug!("[reveal] every element revealed, observer disconnected");
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in tracker.borrow().targets() {
        _ = el.class_list().add_1(CLASS_SCROLL_ANIMATION);
        observer.observe(el);
    }

    log::info!(
        "[reveal] watching {} elements, {} intro paragraphs",
        watched,
        intro.len()
    );
    Ok(())
}
