#![cfg(target_arch = "wasm32")]
use crate::core::{SetupError, SiteConfig};
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod background;
pub mod core;
mod dom;
mod events;
mod frame;
mod notice;
mod render;

/// Log the outcome of one initializer. Missing markup skips the component,
/// anything else means the markup is inconsistent.
fn report(component: &str, result: Result<(), SetupError>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_skippable() => log::warn!("[{}] skipped: {}", component, e),
        Err(e) => log::error!("[{}] not wired: {}", component, e),
    }
}

fn read_config(document: &web::Document) -> SiteConfig {
    match document.body() {
        Some(body) => SiteConfig::from_attributes(|name| body.get_attribute(name)),
        None => SiteConfig::default(),
    }
}

fn init_page(document: &web::Document) {
    thread_local! {
        static INITIALIZED: Cell<bool> = const { Cell::new(false) };
    }
    if INITIALIZED.with(|f| f.replace(true)) {
        log::warn!("page already initialized");
        return;
    }

    let config = read_config(document);

    report("background", background::init(document));
    report("nav", events::wire_navigation(document, &config));
    report("tabs", events::wire_tabs(document));
    report("video", events::wire_videos(document));
    let modal = match events::wire_modal(document) {
        Ok(m) => Some(m),
        Err(e) => {
            report("modal", Err(e));
            None
        }
    };
    report("form", events::wire_forms(document, modal, &config));
    report("reveal", events::wire_scroll_reveal(document));
    report("anchor", events::wire_anchor_scrolling(document, &config));
    log::info!("portfolio-web ready");
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once(move || init_page(&doc));
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        init_page(&document);
    }
    Ok(())
}

/// Stop the particle background's animation loop. Returns false if no loop
/// was running.
#[wasm_bindgen]
pub fn stop_background() -> bool {
    background::stop()
}
