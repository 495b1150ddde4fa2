mod color;
mod edges;
mod enums;
mod style;
mod theme;

pub use color::{Color, ColorOp, Rgb};
pub(crate) use color::{oklch_to_rgb, rgb_to_oklch};
pub use edges::Edges;
pub use enums::{Align, Border, Direction, Size, TextStyle, TextWrap};
pub use style::Style;
pub use theme::{ColorContext, DefaultTheme, Theme};
