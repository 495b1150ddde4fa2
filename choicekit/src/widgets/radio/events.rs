//! Event handling for the option group.

use choicekit_dom::{Event, FocusSource, Key, Modifiers};

use super::OptionGroup;
use crate::widgets::events::EventResult;

impl OptionGroup {
    /// React to a toolkit event.
    ///
    /// Events aimed at other elements are ignored. Selection changes made here
    /// notify the change handler.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } => self.on_key(target, *key, *modifiers),
            Event::Click {
                target: Some(target),
                ..
            } => self.on_click(target),
            Event::Focus { target, source } => self.on_focus(target, *source),
            Event::Blur { target } => self.on_blur(target),
            _ => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, target: &str, key: Key, modifiers: Modifiers) -> EventResult {
        // Only handle keys without ctrl/alt
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        if target == self.help_id() {
            return match key {
                Key::Enter | Key::Char(' ') => {
                    self.help_open = !self.help_open;
                    EventResult::Consumed
                }
                Key::Escape if self.help_open => {
                    self.help_open = false;
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        let Some(current) = self.option_index(target) else {
            return EventResult::Ignored;
        };
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        let len = self.config.options.len();
        let next = match key {
            Key::Char(' ') => {
                self.select(current);
                self.focus = Some((current, FocusSource::Keyboard));
                return EventResult::Consumed;
            }
            Key::Up | Key::Left | Key::Char('k') | Key::Char('h') => {
                if current == 0 {
                    len - 1
                } else {
                    current - 1
                }
            }
            Key::Down | Key::Right | Key::Char('j') | Key::Char('l') => {
                if current + 1 >= len {
                    0
                } else {
                    current + 1
                }
            }
            Key::Home => 0,
            Key::End => len - 1,
            _ => return EventResult::Ignored,
        };

        self.select(next);
        self.focus = Some((next, FocusSource::Keyboard));
        if next == current {
            EventResult::Consumed
        } else {
            EventResult::MoveFocus(self.option_id(next))
        }
    }

    fn on_click(&mut self, target: &str) -> EventResult {
        if target == self.help_id() {
            self.help_open = !self.help_open;
            return EventResult::Consumed;
        }

        let Some(index) = self.option_index(target) else {
            return EventResult::Ignored;
        };
        if self.is_disabled() {
            return EventResult::Ignored;
        }
        self.select(index);
        // Pointer focus never draws the focus highlight.
        self.focus = Some((index, FocusSource::Mouse));
        EventResult::Consumed
    }

    fn on_focus(&mut self, target: &str, source: FocusSource) -> EventResult {
        match self.option_index(target) {
            Some(index) if !self.is_disabled() => {
                self.focus = Some((index, source));
                EventResult::Consumed
            }
            _ => {
                // Focus went elsewhere; toolkits may skip the blur.
                self.focus = None;
                EventResult::Ignored
            }
        }
    }

    fn on_blur(&mut self, target: &str) -> EventResult {
        if target == self.help_id() {
            self.help_open = false;
            return EventResult::Consumed;
        }
        match self.option_index(target) {
            Some(index) if self.focused() == Some(index) => {
                self.focus = None;
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
