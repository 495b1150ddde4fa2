use choicekit_dom::{Color, Theme};

use super::tokens;

#[derive(Debug, Clone)]
pub struct TextColors {
    pub body: Color,
    /// Disabled labels and unchecked marks.
    pub faded_40: Color,
    /// Captions.
    pub faded_60: Color,
}

#[derive(Debug, Clone)]
pub struct RadioColors {
    /// Checked mark on an enabled group.
    pub primary: Color,
    /// Keyboard focus highlight.
    pub focus_background: Color,
    pub tooltip_background: Color,
}

/// Theme providing every variable the option group references.
#[derive(Debug, Clone)]
pub struct OptionGroupTheme {
    pub background: Color,
    pub text: TextColors,
    pub radio: RadioColors,
}

impl OptionGroupTheme {
    /// All variable names this theme resolves.
    pub fn color_names(&self) -> Vec<&'static str> {
        vec![
            tokens::BACKGROUND,
            tokens::PRIMARY,
            tokens::BODY_TEXT,
            tokens::FADED_TEXT_40,
            tokens::FADED_TEXT_60,
            tokens::FOCUS_BACKGROUND,
            tokens::TOOLTIP_BACKGROUND,
        ]
    }
}

impl Default for OptionGroupTheme {
    fn default() -> Self {
        dark_theme()
    }
}

impl Theme for OptionGroupTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            tokens::BACKGROUND => Some(&self.background),
            tokens::PRIMARY => Some(&self.radio.primary),
            tokens::BODY_TEXT => Some(&self.text.body),
            tokens::FADED_TEXT_40 => Some(&self.text.faded_40),
            tokens::FADED_TEXT_60 => Some(&self.text.faded_60),
            tokens::FOCUS_BACKGROUND => Some(&self.radio.focus_background),
            tokens::TOOLTIP_BACKGROUND => Some(&self.radio.tooltip_background),
            _ => None,
        }
    }
}

/// Dark purple-gray background with a red primary.
pub fn dark_theme() -> OptionGroupTheme {
    let background = Color::oklch(0.18, 0.01, 280.0);
    OptionGroupTheme {
        background: background.clone(),
        text: TextColors {
            body: Color::oklch(0.93, 0.0, 0.0),
            faded_40: Color::oklch(0.93, 0.0, 0.0).mix(background.clone(), 0.6),
            faded_60: Color::oklch(0.93, 0.0, 0.0).mix(background.clone(), 0.4),
        },
        radio: RadioColors {
            primary: Color::oklch(0.65, 0.2, 25.0),
            // darkened background mixed 25% toward the text color
            focus_background: background.clone().darken(0.05).mix(Color::oklch(0.93, 0.0, 0.0), 0.25),
            tooltip_background: background.lighten(0.1),
        },
    }
}

/// White background with the same primary.
pub fn light_theme() -> OptionGroupTheme {
    let background = Color::oklch(1.0, 0.0, 0.0);
    let body = Color::oklch(0.25, 0.02, 270.0);
    OptionGroupTheme {
        background: background.clone(),
        text: TextColors {
            body: body.clone(),
            faded_40: body.clone().mix(background.clone(), 0.6),
            faded_60: body.clone().mix(background.clone(), 0.4),
        },
        radio: RadioColors {
            primary: Color::oklch(0.6, 0.22, 25.0),
            focus_background: background.clone().darken(0.05).mix(body, 0.25),
            tooltip_background: background.darken(0.08),
        },
    }
}
