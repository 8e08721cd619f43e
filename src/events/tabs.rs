use crate::core::tabs::TabSet;
use crate::core::*;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Project tabs: one active button and one active panel at a time.
pub fn wire_tabs(document: &web::Document) -> Result<(), SetupError> {
    let buttons: Rc<Vec<web::Element>> = Rc::new(dom::query_all(document, SEL_TAB_BUTTONS));
    if buttons.is_empty() {
        return Err(SetupError::missing(SEL_TAB_BUTTONS));
    }
    let panels: Rc<Vec<web::Element>> = Rc::new(dom::query_all(document, SEL_TAB_PANELS));

    let targets = buttons
        .iter()
        .map(|b| b.get_attribute(ATTR_TAB_TARGET))
        .collect();
    let panel_ids = panels.iter().map(|p| p.id()).collect();
    let mut tab_set = TabSet::new(targets, panel_ids)?;
    if let Some(initial) = buttons
        .iter()
        .position(|b| b.class_list().contains(CLASS_ACTIVE))
    {
        tab_set.select(initial);
    }
    let state = Rc::new(RefCell::new(tab_set));

    for (i, button) in buttons.iter().enumerate() {
        let buttons = buttons.clone();
        let panels = panels.clone();
        let state = state.clone();
        dom::add_click_listener(button, move |_| {
            let mut s = state.borrow_mut();
            if let Some(target) = s.select(i) {
                log::debug!("[tabs] show #{}", target);
            }
            for (j, b) in buttons.iter().enumerate() {
                dom::set_class(b, CLASS_ACTIVE, s.is_button_active(j));
            }
            for (j, p) in panels.iter().enumerate() {
                dom::set_class(p, CLASS_ACTIVE, s.is_panel_active(j));
            }
        });
    }

    log::info!("[tabs] wired {} tabs over {} panels", buttons.len(), panels.len());
    Ok(())
}
