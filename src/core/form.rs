use super::constants::{ID_CONTACT_FORM, ID_MODAL_FORM, SUBMIT_ACK_MESSAGE, SUBMIT_FAILED_MESSAGE};
use super::error::SubmitError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    /// The contact form embedded in the page.
    Page,
    /// The form inside the contact modal.
    Modal,
}

impl FormKind {
    pub fn element_id(self) -> &'static str {
        match self {
            FormKind::Page => ID_CONTACT_FORM,
            FormKind::Modal => ID_MODAL_FORM,
        }
    }
}

/// Named field values in document order. A repeated name keeps its first
/// position and its last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = FormSubmission::default();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

/// Destination for contact messages.
pub trait Submitter {
    fn submit(&self, kind: FormKind, submission: &FormSubmission) -> Result<(), SubmitError>;
}

/// Accepts every message without sending it anywhere. Placeholder until the
/// site has a backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedSubmitter;

impl Submitter for SimulatedSubmitter {
    fn submit(&self, kind: FormKind, submission: &FormSubmission) -> Result<(), SubmitError> {
        let names: Vec<&str> = submission.iter().map(|(name, _)| name).collect();
        log::info!(
            "[form] simulated send from #{} ({} fields: {})",
            kind.element_id(),
            submission.len(),
            names.join(", ")
        );
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Error,
}

impl NoticeTone {
    pub fn class(self) -> &'static str {
        match self {
            NoticeTone::Success => "notice-success",
            NoticeTone::Error => "notice-error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NoticeTone::Success => "rgba(0, 188, 212, 0.92)",
            NoticeTone::Error => "rgba(211, 47, 47, 0.92)",
        }
    }
}

/// Non-blocking message shown after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub text: String,
}

/// Inline `display` for the notice element.
pub fn notice_display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// What the page must do once a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Notice,
    pub reset_form: bool,
    pub close_modal: bool,
}

impl SubmitOutcome {
    pub fn from_result(kind: FormKind, result: Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => SubmitOutcome {
                notice: Notice {
                    tone: NoticeTone::Success,
                    text: SUBMIT_ACK_MESSAGE.to_string(),
                },
                reset_form: true,
                close_modal: kind == FormKind::Modal,
            },
            Err(e) => {
                log::warn!("[form] #{}: {}", kind.element_id(), e);
                SubmitOutcome {
                    notice: Notice {
                        tone: NoticeTone::Error,
                        text: SUBMIT_FAILED_MESSAGE.to_string(),
                    },
                    reset_form: false,
                    close_modal: false,
                }
            }
        }
    }
}

pub fn handle_submission(
    submitter: &dyn Submitter,
    kind: FormKind,
    submission: &FormSubmission,
) -> SubmitOutcome {
    SubmitOutcome::from_result(kind, submitter.submit(kind, submission))
}
