use crate::core::nav::{NavState, ScrollSpy, SectionExtent};
use crate::core::*;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct NavElements {
    hamburger: Option<web::Element>,
    nav_list: Option<web::Element>,
    links: Rc<Vec<web::Element>>,
    header: Option<web::Element>,
}

impl NavElements {
    fn render_menu(&self, state: &NavState) {
        if let Some(h) = &self.hamburger {
            dom::set_class(h, CLASS_OPEN, state.menu_open);
        }
        if let Some(list) = &self.nav_list {
            dom::set_class(list, CLASS_ACTIVE, state.menu_open);
        }
    }

    fn render_scroll(&self, state: &NavState) {
        if let Some(header) = &self.header {
            dom::set_class(header, CLASS_SCROLLED, state.header_scrolled);
        }
        for (i, link) in self.links.iter().enumerate() {
            dom::set_class(link, CLASS_ACTIVE, state.is_link_active(i));
        }
    }
}

/// Mobile menu toggle, close-on-navigate and scroll-spy highlighting.
pub fn wire_navigation(document: &web::Document, config: &SiteConfig) -> Result<(), SetupError> {
    let links: Vec<web::Element> = dom::query_all(document, SEL_NAV_LINKS);
    let hrefs: Vec<String> = links
        .iter()
        .map(|l| l.get_attribute("href").unwrap_or_default())
        .collect();
    let initial = links
        .iter()
        .position(|l| l.class_list().contains(CLASS_ACTIVE))
        .map(|i| hrefs[i].clone());
    let els = NavElements {
        hamburger: dom::optional(document, SEL_HAMBURGER),
        nav_list: dom::optional(document, SEL_NAV_LIST),
        links: Rc::new(links),
        header: dom::optional(document, SEL_HEADER),
    };
    let mut nav_state = NavState::new(hrefs);
    nav_state.set_active_fragment(initial);
    let state = Rc::new(RefCell::new(nav_state));

    match (&els.hamburger, &els.nav_list) {
        (Some(hamburger), Some(_)) => {
            let els_toggle = els.clone();
            let state_toggle = state.clone();
            dom::add_click_listener(hamburger, move |_| {
                let mut s = state_toggle.borrow_mut();
                s.toggle_menu();
                els_toggle.render_menu(&s);
            });
        }
        (Some(_), None) => log::warn!("[nav] {} without {}", SEL_HAMBURGER, SEL_NAV_LIST),
        _ => log::debug!("[nav] no menu toggle"),
    }

    for link in els.links.iter() {
        let els_link = els.clone();
        let state_link = state.clone();
        dom::add_click_listener(link, move |_| {
            let mut s = state_link.borrow_mut();
            if s.close_menu() {
                els_link.render_menu(&s);
            }
        });
    }

    if els.header.is_none() {
        log::warn!("[nav] no <{}> element, scrolled marker disabled", SEL_HEADER);
    }
    let spy = ScrollSpy {
        lookahead_px: config.spy_lookahead_px,
        header_threshold_px: config.header_threshold_px,
        tie_break: config.spy_tie_break,
    };
    let window = web::window().ok_or_else(|| SetupError::Js("no window".into()))?;
    let doc = document.clone();
    let els_scroll = els.clone();
    dom::add_listener(&window, "scroll", move |_: web::Event| {
        let Some(w) = web::window() else {
            return;
        };
        let scroll_y = w.scroll_y().unwrap_or(0.0);
        // Section geometry can change with layout, so measure on every event
        let sections: Vec<SectionExtent> = dom::query_all::<web::HtmlElement>(&doc, SEL_SECTIONS)
            .iter()
            .map(section_extent)
            .collect();
        let mut s = state.borrow_mut();
        s.on_scroll(&spy, scroll_y, &sections);
        els_scroll.render_scroll(&s);
    });

    log::info!(
        "[nav] wired {} links, tie-break {:?}",
        els.links.len(),
        config.spy_tie_break
    );
    Ok(())
}

fn section_extent(el: &web::HtmlElement) -> SectionExtent {
    SectionExtent {
        id: el.get_attribute("id"),
        top: el.offset_top() as f64,
        height: el.offset_height() as f64,
    }
}
