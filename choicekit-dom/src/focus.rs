use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{Content, Element};
use crate::event::{Event, FocusSource, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and turns raw terminal input
/// into targeted [`Event`]s.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.step(root, true)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.step(root, false)
    }

    fn step(&mut self, root: &Element, forward: bool) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let len = focusable.len();
        let current = self
            .focused
            .as_ref()
            .and_then(|id| focusable.iter().position(|f| f == id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };

        let new_focus = focusable[next].clone();
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Translate a crossterm event into toolkit events.
    ///
    /// Tab/BackTab move focus; other keys target the focused element; left
    /// clicks target the deepest clickable element and move focus to the
    /// deepest focusable one.
    pub fn process_event(
        &mut self,
        event: &CrosstermEvent,
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        // Drop focus that points at an element that no longer exists or is disabled.
        if let Some(id) = self.focused.clone() {
            if !collect_focusable(root).contains(&id) {
                self.focused = None;
                events.push(Event::Blur { target: id });
            }
        }

        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                let k = Key::from(key.code);
                let modifiers = Modifiers::from(key.modifiers);
                let previous = self.focused.clone();
                let moved = match k {
                    Key::Tab => Some(self.focus_next(root)),
                    Key::BackTab => Some(self.focus_prev(root)),
                    _ => None,
                };
                match moved {
                    Some(Some(target)) => {
                        if let Some(old) = previous {
                            events.push(Event::Blur { target: old });
                        }
                        events.push(Event::Focus {
                            target,
                            source: FocusSource::Keyboard,
                        });
                    }
                    Some(None) => {}
                    None => events.push(Event::Key {
                        target: self.focused.clone(),
                        key: k,
                        modifiers,
                    }),
                }
            }
            CrosstermEvent::Mouse(mouse) => {
                if let MouseEventKind::Down(button) = mouse.kind {
                    let (x, y) = (mouse.column, mouse.row);
                    if let Some(target) = hit_test_focusable(layout, root, x, y) {
                        let previous = self.focused.clone();
                        if self.focus(&target) {
                            if let Some(old) = previous {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus {
                                target,
                                source: FocusSource::Mouse,
                            });
                        }
                    }
                    events.push(Event::Click {
                        target: hit_test(layout, root, x, y),
                        x,
                        y,
                        button: button.into(),
                    });
                }
            }
            CrosstermEvent::Resize(width, height) => events.push(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => {}
        }

        if !events.is_empty() {
            log::trace!("focus: {event:?} -> {events:?}");
        }
        events
    }
}

/// IDs of focusable, enabled, visible elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    collect_visible(root, &mut ids);
    ids
}

fn collect_visible(element: &Element, ids: &mut Vec<String>) {
    if element.hidden {
        return;
    }
    if element.is_interactive() {
        ids.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_visible(child, ids);
        }
    }
}
