//! Color tokens consumed by the option group.
//!
//! Widgets never hold concrete colors; they reference the variables below
//! (`Color::var`) and a [`choicekit_dom::Theme`] resolves them at render time.

mod default;

pub use default::{dark_theme, light_theme, OptionGroupTheme, RadioColors, TextColors};

/// Variable names understood by [`OptionGroupTheme`].
pub mod tokens {
    pub const BACKGROUND: &str = "background";
    pub const PRIMARY: &str = "radio.primary";
    pub const BODY_TEXT: &str = "text.body";
    pub const FADED_TEXT_40: &str = "text.faded_40";
    pub const FADED_TEXT_60: &str = "text.faded_60";
    pub const FOCUS_BACKGROUND: &str = "radio.focus_background";
    pub const TOOLTIP_BACKGROUND: &str = "radio.tooltip_background";
}
