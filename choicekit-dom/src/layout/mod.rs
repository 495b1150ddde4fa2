mod flex;
mod rect;

pub(crate) use flex::inner_rect;
pub use flex::{estimate_size, layout, LayoutResult};
pub use rect::Rect;
