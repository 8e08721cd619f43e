/// Stagger multipliers for intro paragraphs: 1, 2, 3, ...
pub fn stagger_indices(count: usize) -> impl Iterator<Item = usize> {
    1..=count
}

/// One-shot reveal flags for the watched elements, matched by identity.
#[derive(Clone, Debug)]
pub struct RevealTracker<T> {
    targets: Vec<T>,
    revealed: Vec<bool>,
}

impl<T: PartialEq> RevealTracker<T> {
    pub fn new(targets: Vec<T>) -> Self {
        let revealed = vec![false; targets.len()];
        Self { targets, revealed }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// Feed an intersection entry. Returns true only the first time an
    /// intersecting entry is seen for a watched `target`.
    pub fn observe(&mut self, target: &T, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        let Some(index) = self.targets.iter().position(|t| t == target) else {
            return false;
        };
        !std::mem::replace(&mut self.revealed[index], true)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed_count() == self.len()
    }
}
