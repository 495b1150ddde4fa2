//! Widget event handling types.

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling a toolkit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event was consumed and keyboard focus should follow to this element.
    MoveFocus(String),
}

impl EventResult {
    /// Check if the event was handled (consumed or moved focus).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }

    /// The element focus should move to, if any.
    pub fn focus_target(&self) -> Option<&str> {
        match self {
            EventResult::MoveFocus(id) => Some(id),
            _ => None,
        }
    }
}
