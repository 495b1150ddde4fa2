//! Widget label with an optional help tooltip.

use choicekit_dom::{Align, Color, Edges, Element, Role, Size, Style};

use crate::config::LabelVisibility;
use crate::markdown::{render_inline, MarkdownOptions};
use crate::theme::tokens;

/// Where a tooltip bubble opens relative to its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    Top,
    #[default]
    TopRight,
    Bottom,
    BottomRight,
}

impl Placement {
    fn is_above(self) -> bool {
        matches!(self, Placement::Top | Placement::TopRight)
    }

    fn align(self) -> Align {
        match self {
            Placement::Top | Placement::Bottom => Align::Start,
            Placement::TopRight | Placement::BottomRight => Align::End,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::TopRight => "top-right",
            Placement::Bottom => "bottom",
            Placement::BottomRight => "bottom-right",
        }
    }
}

/// Help text attached to a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub content: String,
    pub placement: Placement,
    /// Whether the bubble is currently shown.
    pub open: bool,
}

impl Tooltip {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            placement: Placement::default(),
            open: false,
        }
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

/// The `?` icon for `tooltip`, focusable and clickable so it can be toggled.
pub fn tooltip_icon(id: &str, tooltip: &Tooltip) -> Element {
    Element::text("?")
        .id(id)
        .margin(Edges::left(1))
        .style(Style::new().foreground(Color::var(tokens::FADED_TEXT_60)).bold())
        .focusable(true)
        .clickable(true)
        .role(Role::Tooltip)
        .accessible_name(tooltip.content.clone())
}

fn tooltip_bubble(id: &str, tooltip: &Tooltip) -> Element {
    Element::spans(render_inline(&tooltip.content, &MarkdownOptions::label()))
        .id(format!("{id}-bubble"))
        .style(
            Style::new()
                .background(Color::var(tokens::TOOLTIP_BACKGROUND))
                .foreground(Color::var(tokens::BODY_TEXT)),
        )
        .padding(Edges::symmetric(0, 1))
}

/// Build the label block for a widget.
///
/// Returns `None` when there is nothing to lay out: no label text, or a
/// collapsed label. A hidden label keeps its row but draws nothing. The help
/// icon only accompanies a visible label.
pub fn widget_label(
    id: &str,
    label: Option<&str>,
    visibility: LabelVisibility,
    disabled: bool,
    help: Option<&Tooltip>,
) -> Option<Element> {
    let label = label.filter(|l| !l.is_empty())?;
    if visibility == LabelVisibility::Collapsed {
        return None;
    }

    let color = if disabled {
        tokens::FADED_TEXT_40
    } else {
        tokens::BODY_TEXT
    };
    let text = Element::spans(render_inline(label, &MarkdownOptions::label()))
        .id(format!("{id}-text"))
        .role(Role::Label)
        .style(Style::new().foreground(Color::var(color)));

    match visibility {
        LabelVisibility::Collapsed => None,
        LabelVisibility::Hidden => Some(Element::row().id(id).hidden(true).child(text)),
        LabelVisibility::Visible => {
            let mut row = Element::row().id(format!("{id}-row")).child(text);
            let Some(tooltip) = help else {
                return Some(row.id(id));
            };
            let help_id = format!("{id}-help");
            row = row.child(tooltip_icon(&help_id, tooltip));
            if !tooltip.open {
                return Some(row.id(id));
            }

            let bubble = Element::col()
                .id(format!("{help_id}-anchor"))
                .width(Size::Fill)
                .align(tooltip.placement.align())
                .child(tooltip_bubble(&help_id, tooltip));
            let block = Element::col().id(id);
            Some(if tooltip.placement.is_above() {
                block.child(bubble).child(row)
            } else {
                block.child(row).child(bubble)
            })
        }
    }
}
