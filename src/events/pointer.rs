use crate::core::particles::PointerOffset;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Track the mouse as an offset from the viewport center; latest event wins.
pub fn wire_pointer_offset(document: &web::Document, pointer: Rc<Cell<PointerOffset>>) {
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let Some(w) = web::window() else {
            return;
        };
        let vw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let vh = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        pointer.set(PointerOffset::from_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            vw as f32,
            vh as f32,
        ));
    });
}
