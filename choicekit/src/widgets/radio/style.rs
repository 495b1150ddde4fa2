//! Visual state to style token mapping.

use choicekit_dom::Color;

use crate::theme::tokens;

pub const CHECKED_MARK: char = '◉';
pub const UNCHECKED_MARK: char = '◯';

/// The inputs that decide how one option looks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionVisualState {
    pub selected: bool,
    pub disabled: bool,
    /// Focused through the keyboard.
    pub focus_visible: bool,
}

/// Corner treatment of an option's highlight.
///
/// Cells have no radius; a medium corner insets the highlight by one cell on
/// each side so it reads as a rounded pill, a square corner keeps that cell as
/// plain margin. Both occupy the same space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Square,
    Medium,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionStyle {
    pub mark: char,
    pub mark_color: Color,
    pub label_color: Color,
    pub background: Option<Color>,
    pub corner: Corner,
}

pub fn resolve_option_style(state: OptionVisualState) -> OptionStyle {
    let mark = if state.selected {
        CHECKED_MARK
    } else {
        UNCHECKED_MARK
    };
    let mark_color = if state.selected && !state.disabled {
        tokens::PRIMARY
    } else {
        tokens::FADED_TEXT_40
    };
    let label_color = if state.disabled {
        tokens::FADED_TEXT_40
    } else {
        tokens::BODY_TEXT
    };
    let (background, corner) = if state.focus_visible {
        (Some(Color::var(tokens::FOCUS_BACKGROUND)), Corner::Medium)
    } else {
        (None, Corner::Square)
    };

    OptionStyle {
        mark,
        mark_color: Color::var(mark_color),
        label_color: Color::var(label_color),
        background,
        corner,
    }
}

/// Spacing between and after option items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpacing {
    pub gap: u16,
    pub item_margin_right: u16,
}

pub fn group_spacing(has_captions: bool, horizontal: bool) -> GroupSpacing {
    match (has_captions, horizontal) {
        (true, true) => GroupSpacing {
            gap: 1,
            item_margin_right: 1,
        },
        (false, true) => GroupSpacing {
            gap: 0,
            item_margin_right: 2,
        },
        (true, false) => GroupSpacing {
            gap: 1,
            item_margin_right: 0,
        },
        (false, false) => GroupSpacing {
            gap: 0,
            item_margin_right: 0,
        },
    }
}
