pub mod config;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod theme;
pub mod widgets;

pub use config::{LabelVisibility, OptionGroupConfig};
pub use error::{ConfigError, LoggingError};
pub use widgets::OptionGroup;

pub mod prelude {
    pub use crate::config::{LabelVisibility, OptionGroupConfig};
    pub use crate::error::{ConfigError, LoggingError};
    pub use crate::logging::LogConfig;
    pub use crate::markdown::MarkdownOptions;
    pub use crate::theme::{dark_theme, light_theme, OptionGroupTheme};
    pub use crate::widgets::{EventResult, OptionGroup, Placement, Tooltip};

    pub use choicekit_dom::{ColorContext, Element, Event, FocusState, Terminal};
}
