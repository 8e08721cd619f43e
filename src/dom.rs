use crate::core::SetupError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Js(format!("{:?}", value))
    }
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First element matching `selector`, or a missing-element error.
pub fn require(document: &web::Document, selector: &str) -> Result<web::Element, SetupError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| SetupError::missing(selector))
}

#[inline]
pub fn optional(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Every element matching `selector` that is of type `T`, in document order.
pub fn query_all<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("invalid selector `{}`", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

#[inline]
pub fn add_listener<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    add_listener(target, "click", move |ev: web::MouseEvent| handler(ev));
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn set_parent_background(el: &web::Element, value: &str) {
    if let Some(parent) = el.parent_element() {
        if let Some(parent) = parent.dyn_ref::<web::HtmlElement>() {
            set_style(parent, "background", value);
        }
    }
}

/// Backing size that makes the canvas cover the whole window.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let css_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let css_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let dpr = w.device_pixel_ratio();
    canvas.set_width(((css_w * dpr) as u32).max(1));
    canvas.set_height(((css_h * dpr) as u32).max(1));
    set_style(canvas, "width", &format!("{css_w}px"));
    set_style(canvas, "height", &format!("{css_h}px"));
    (css_w, css_h)
}
