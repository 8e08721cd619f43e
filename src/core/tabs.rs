use super::error::SetupError;

/// Single-selection tab model: buttons point at panels by id.
#[derive(Clone, Debug)]
pub struct TabSet {
    targets: Vec<String>,
    panels: Vec<String>,
    active: Option<usize>,
}

impl TabSet {
    /// Validate that every button target names an existing panel.
    pub fn new(targets: Vec<Option<String>>, panels: Vec<String>) -> Result<Self, SetupError> {
        let mut resolved = Vec::with_capacity(targets.len());
        for (i, target) in targets.into_iter().enumerate() {
            let target = target.ok_or_else(|| SetupError::BrokenReference {
                source_desc: format!("tab button {i}"),
                target: "<no data-target>".to_string(),
            })?;
            if !panels.iter().any(|p| *p == target) {
                return Err(SetupError::BrokenReference {
                    source_desc: format!("tab button {i}"),
                    target,
                });
            }
            resolved.push(target);
        }
        Ok(Self {
            targets: resolved,
            panels,
            active: None,
        })
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Activate `button`; returns the target panel id.
    pub fn select(&mut self, button: usize) -> Option<&str> {
        let target = self.targets.get(button)?;
        self.active = Some(button);
        Some(target.as_str())
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.active.map(|i| self.targets[i].as_str())
    }

    #[inline]
    pub fn is_button_active(&self, button: usize) -> bool {
        self.active == Some(button)
    }

    #[inline]
    pub fn is_panel_active(&self, panel: usize) -> bool {
        match (self.active_panel(), self.panels.get(panel)) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }
}
