//! Selection state and external value reconciliation.

/// The selected index of an option group, plus the last value the host
/// supplied for it.
///
/// User interaction moves `selected`; the host's value only overrides it when
/// the host actually changes that value to something new.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
    external: Option<usize>,
}

impl SelectionState {
    pub fn new(initial: Option<usize>) -> Self {
        Self {
            selected: initial,
            external: initial,
        }
    }

    /// The raw selected index. May be out of range for the current options.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The last externally supplied value.
    pub fn external(&self) -> Option<usize> {
        self.external
    }

    /// Select `index`. Returns true if the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Apply a new external value.
    ///
    /// The value is adopted only if it differs from both the previous external
    /// value and the current selection. Returns true if the selection changed.
    pub fn reconcile(&mut self, incoming: Option<usize>) -> bool {
        let previous = std::mem::replace(&mut self.external, incoming);
        if incoming == previous || incoming == self.selected {
            return false;
        }
        log::debug!(
            "reconcile: external {previous:?} -> {incoming:?} overrides selection {:?}",
            self.selected
        );
        self.selected = incoming;
        true
    }

    /// Reassert an external value unconditionally.
    pub fn reset(&mut self, value: Option<usize>) -> bool {
        self.external = value;
        let changed = self.selected != value;
        self.selected = value;
        changed
    }
}
