use thiserror::Error;

/// Reasons a component initializer can refuse to wire itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A required element is absent; the component is skipped.
    #[error("missing element `{selector}`")]
    MissingElement { selector: String },
    /// Markup references something that does not exist.
    #[error("{source_desc} references `{target}`, which does not exist")]
    BrokenReference { source_desc: String, target: String },
    /// Positional pairing needs both lists to line up.
    #[error("{videos} videos but {buttons} play buttons")]
    PairingMismatch { videos: usize, buttons: usize },
    /// A DOM call failed while wiring.
    #[error("dom error: {0}")]
    Js(String),
}

impl SetupError {
    pub fn missing(selector: &str) -> Self {
        SetupError::MissingElement {
            selector: selector.to_string(),
        }
    }

    /// Missing elements are expected on pages that omit a component.
    pub fn is_skippable(&self) -> bool {
        matches!(self, SetupError::MissingElement { .. })
    }
}

/// A submission that did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}
