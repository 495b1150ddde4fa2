use choicekit_dom::{Edges, Element, Role, Size, Style, TextWrap};

use super::style::{group_spacing, resolve_option_style, Corner, OptionVisualState};
use super::OptionGroup;
use crate::markdown::{plain_text, render_inline, MarkdownOptions};
use crate::widgets::label::{widget_label, Placement, Tooltip};

/// Non-breaking space: keeps caption rows aligned in horizontal layout.
const CAPTION_SPACER: &str = "&nbsp;";

impl OptionGroup {
    /// Build the element tree for the current state.
    pub fn view(&self) -> Element {
        let options = self.options();
        let disabled = self.is_disabled();
        let has_captions = self.config.has_captions();
        let horizontal = self.config.horizontal;
        let spacing = group_spacing(has_captions, horizontal);
        let selected = self.selected();

        let items = options.iter().enumerate().map(|(index, option)| {
            let focus_visible = self.focus_visible() && self.focused() == Some(index);
            let visual = OptionVisualState {
                selected: selected == Some(index),
                disabled,
                focus_visible,
            };
            let caption = has_captions.then(|| self.caption_source(index));
            self.option_item(index, option, caption, visual, spacing.item_margin_right)
        });

        let group = if horizontal {
            Element::row()
        } else {
            Element::col()
        }
        .id(format!("{}-group", self.id))
        .gap(spacing.gap)
        .children(items);

        let help = self.config.help.as_deref().map(|content| {
            Tooltip::new(content)
                .placement(Placement::TopRight)
                .open(self.help_open)
        });
        let label = widget_label(
            &format!("{}-label", self.id),
            self.config.label.as_deref(),
            self.config.label_visibility,
            disabled,
            help.as_ref(),
        );

        let mut root = Element::col()
            .id(self.id.clone())
            .role(Role::Group)
            .disabled(disabled);
        if let Some(name) = &self.config.label {
            root = root.accessible_name(name.clone());
        }
        if let Some(width) = self.config.width {
            root = root.width(Size::Fixed(width));
        }
        if let Some(label) = label {
            root = root.child(label);
        }

        log::trace!(
            "option group '{}': view with {} options, selected {selected:?}",
            self.id,
            options.len()
        );
        root.child(group)
    }

    /// Caption markdown for `index`, padded with a spacer where horizontal
    /// layout needs one.
    fn caption_source(&self, index: usize) -> &str {
        let caption = self.config.caption(index);
        if caption.is_empty() && self.config.horizontal {
            CAPTION_SPACER
        } else {
            caption
        }
    }

    fn option_item(
        &self,
        index: usize,
        option: &str,
        caption: Option<&str>,
        visual: OptionVisualState,
        margin_right: u16,
    ) -> Element {
        let style = resolve_option_style(visual);
        let id = self.option_id(index);
        let label_spans = render_inline(option, &MarkdownOptions::label());
        let name = plain_text(&label_spans);

        let mark = Element::text(style.mark.to_string())
            .id(format!("{id}-mark"))
            .margin(Edges::right(1))
            .style(Style::new().foreground(style.mark_color.clone()));

        let mut body = Element::col().id(format!("{id}-body")).child(
            Element::spans(label_spans)
                .id(format!("{id}-label"))
                .text_wrap(TextWrap::Truncate)
                .style(Style::new().foreground(style.label_color.clone())),
        );
        if let Some(caption) = caption {
            body = body.child(
                Element::spans(render_inline(caption, &MarkdownOptions::caption()))
                    .id(format!("{id}-caption"))
                    .text_wrap(TextWrap::Truncate),
            );
        }

        // Both corners take one cell on each side so focus never shifts layout.
        let (padding, margin) = match style.corner {
            Corner::Medium => (Edges::symmetric(0, 1), Edges::right(margin_right)),
            Corner::Square => (Edges::default(), Edges::new(0, margin_right + 1, 0, 1)),
        };

        let mut item_style = Style::new();
        if let Some(background) = style.background {
            item_style = item_style.background(background);
        }

        Element::row()
            .id(id)
            .role(Role::Radio)
            .accessible_name(name)
            .checked(visual.selected)
            .disabled(visual.disabled)
            .focusable(!visual.disabled)
            .clickable(!visual.disabled)
            .focused(!visual.disabled && self.focused() == Some(index))
            .padding(padding)
            .margin(margin)
            .style(item_style)
            .child(mark)
            .child(body)
    }
}
