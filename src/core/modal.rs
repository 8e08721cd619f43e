/// Where a window click landed relative to the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed backdrop, i.e. the modal element itself.
    Backdrop,
    /// Anything inside the modal content, or elsewhere on the page.
    Other,
}

/// Visibility of the single contact modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Window click handler; returns true if the click dismissed the modal.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if self.open && target == ClickTarget::Backdrop {
            self.open = false;
            return true;
        }
        false
    }

    pub fn display(&self) -> &'static str {
        if self.open {
            "block"
        } else {
            "none"
        }
    }

    /// Page scrolling is locked exactly while the modal is visible.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            "auto"
        }
    }
}
