pub mod events;
pub mod label;
pub mod radio;

pub use events::EventResult;
pub use label::{tooltip_icon, widget_label, Placement, Tooltip};
pub use radio::{
    group_spacing, resolve_option_style, ChangeHandler, Corner, GroupSpacing, OptionGroup,
    OptionStyle, OptionVisualState, SelectionState,
};
