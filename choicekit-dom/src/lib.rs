pub mod a11y;
pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use a11y::{accessibility_tree, AccessNode};
pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element, Role, Span};
pub use event::{Event, FocusSource, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::*;
