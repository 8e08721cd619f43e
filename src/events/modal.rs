use crate::core::modal::{ClickTarget, ModalState};
use crate::core::*;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stable handle to the contact modal, shared with the form handler.
#[derive(Clone)]
pub struct ModalController {
    modal: web::HtmlElement,
    body: Option<web::HtmlElement>,
    state: Rc<RefCell<ModalState>>,
}

impl ModalController {
    pub fn new(modal: web::HtmlElement, body: Option<web::HtmlElement>) -> Self {
        Self {
            modal,
            body,
            state: Rc::new(RefCell::new(ModalState::default())),
        }
    }

    pub fn open(&self) {
        self.state.borrow_mut().open();
        self.render();
    }

    pub fn close(&self) {
        self.state.borrow_mut().close();
        self.render();
    }

    fn click(&self, target: ClickTarget) {
        if self.state.borrow_mut().click(target) {
            self.render();
        }
    }

    fn render(&self) {
        let s = *self.state.borrow();
        dom::set_style(&self.modal, "display", s.display());
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", s.body_overflow());
        }
    }
}

/// Contact modal: open button, close control and backdrop dismissal.
pub fn wire_modal(document: &web::Document) -> Result<ModalController, SetupError> {
    let modal = document
        .get_element_by_id(ID_CONTACT_MODAL)
        .ok_or_else(|| SetupError::missing(&format!("#{ID_CONTACT_MODAL}")))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| SetupError::Js(format!("#{ID_CONTACT_MODAL} is not an HTML element")))?;
    let controller = ModalController::new(modal, document.body());

    match dom::optional(document, SEL_CONTACT_BUTTON) {
        Some(btn) => {
            let c = controller.clone();
            dom::add_click_listener(&btn, move |ev| {
                ev.prevent_default();
                c.open();
            });
        }
        None => log::warn!("[modal] no {}, modal cannot be opened", SEL_CONTACT_BUTTON),
    }

    match dom::optional(document, SEL_CLOSE_MODAL) {
        Some(close) => {
            let c = controller.clone();
            dom::add_click_listener(&close, move |_| c.close());

            let window = web::window().ok_or_else(|| SetupError::Js("no window".into()))?;
            let c = controller.clone();
            dom::add_click_listener(&window, move |ev| {
                let on_backdrop = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web::Element>().ok())
                    .is_some_and(|el| el == *c.modal);
                c.click(if on_backdrop {
                    ClickTarget::Backdrop
                } else {
                    ClickTarget::Other
                });
            });
        }
        None => log::warn!("[modal] no {}, modal cannot be dismissed", SEL_CLOSE_MODAL),
    }

    log::info!("[modal] wired #{}", ID_CONTACT_MODAL);
    Ok(controller)
}
