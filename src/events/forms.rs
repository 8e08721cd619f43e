use crate::core::form::{handle_submission, FormKind, FormSubmission, SimulatedSubmitter, Submitter};
use crate::core::*;
use crate::dom;
use crate::events::ModalController;
use crate::notice;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Intercept both contact forms and acknowledge them without a backend.
pub fn wire_forms(
    document: &web::Document,
    modal: Option<ModalController>,
    config: &SiteConfig,
) -> Result<(), SetupError> {
    let submitter: Rc<dyn Submitter> = Rc::new(SimulatedSubmitter);
    let mut wired = 0;
    for kind in [FormKind::Page, FormKind::Modal] {
        let Some(form) = document
            .get_element_by_id(kind.element_id())
            .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
        else {
            log::debug!("[form] no #{}", kind.element_id());
            continue;
        };
        if kind == FormKind::Modal && modal.is_none() {
            log::warn!("[form] #{} present without a modal", kind.element_id());
        }

        let form_ref = form.clone();
        let submitter = submitter.clone();
        let modal = modal.clone();
        let doc = document.clone();
        let notice_ms = config.notice_ms;
        dom::add_listener(&form, "submit", move |ev: web::Event| {
            ev.prevent_default();
            let submission = match read_fields(&form_ref) {
                Ok(s) => s,
                Err(e) => {
                    log::error!("[form] cannot read #{}: {:?}", kind.element_id(), e);
                    return;
                }
            };
            let outcome = handle_submission(submitter.as_ref(), kind, &submission);
            notice::show(&doc, &outcome.notice, notice_ms);
            if outcome.reset_form {
                form_ref.reset();
            }
            if outcome.close_modal {
                if let Some(m) = &modal {
                    m.close();
                }
            }
        });
        wired += 1;
    }

    if wired == 0 {
        return Err(SetupError::missing(&format!(
            "#{}, #{}",
            FormKind::Page.element_id(),
            FormKind::Modal.element_id()
        )));
    }
    log::info!("[form] wired {} forms", wired);
    Ok(())
}

/// Every named field as text, in FormData order.
fn read_fields(form: &web::HtmlFormElement) -> Result<FormSubmission, JsValue> {
    let data = web::FormData::new_with_form(form)?;
    let mut submission = FormSubmission::default();
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(submission);
    };
    for entry in entries {
        let pair = js_sys::Array::from(&entry?);
        let Some(name) = pair.get(0).as_string() else {
            continue;
        };
        // File inputs yield Blob values; keep the name with an empty value
        let value = pair.get(1).as_string().unwrap_or_default();
        submission.insert(name, value);
    }
    Ok(submission)
}
