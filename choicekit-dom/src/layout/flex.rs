use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    log::trace!("layout: {} rects in {:?}", result.len(), available);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let margin = &element.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let width = resolve_size(element.width, after_margin.width, element, true);
    let height = resolve_size(element.height, after_margin.height, element, false);
    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

/// Area left for content once border and padding are removed.
pub(crate) fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border.thickness();
    rect.shrink(
        element.padding.top.saturating_add(border),
        element.padding.right.saturating_add(border),
        element.padding.bottom.saturating_add(border),
        element.padding.left.saturating_add(border),
    )
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let inner = inner_rect(element, rect);

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed sizes and fill count
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    let gap_total = gap_total(element.gap, children.len());

    for child in children {
        let margin_main = main_margin_total(child, is_row);
        match main_axis_size(child, is_row) {
            Size::Fixed(n) => {
                fixed_total = fixed_total.saturating_add(n).saturating_add(margin_main)
            }
            Size::Auto => {
                fixed_total = fixed_total
                    .saturating_add(estimate_size(child, is_row))
                    .saturating_add(margin_main)
            }
            Size::Fill => fill_count = fill_count.saturating_add(1),
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Second pass: assign rects
    let mut offset = 0u16;

    for child in children {
        let (margin_before, margin_after) = if is_row {
            (child.margin.left, child.margin.right)
        } else {
            (child.margin.top, child.margin.bottom)
        };
        let (cross_margin_before, cross_margin_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };

        let main = match main_axis_size(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => fill_size,
        };

        let available_cross =
            cross_size.saturating_sub(cross_margin_before.saturating_add(cross_margin_after));
        let cross = match cross_axis_size(child, is_row) {
            Size::Fixed(n) => n,
            Size::Fill => available_cross,
            Size::Auto => estimate_size(child, !is_row),
        }
        .min(available_cross);

        let main_start = offset.saturating_add(margin_before);
        let clamped_main = main.min(main_size.saturating_sub(main_start));

        let cross_offset = cross_margin_before.saturating_add(match element.align {
            Align::Start => 0,
            Align::Center => available_cross.saturating_sub(cross) / 2,
            Align::End => available_cross.saturating_sub(cross),
        });

        let child_rect = if is_row {
            Rect::new(
                inner.x.saturating_add(main_start),
                inner.y.saturating_add(cross_offset),
                clamped_main,
                cross,
            )
        } else {
            Rect::new(
                inner.x.saturating_add(cross_offset),
                inner.y.saturating_add(main_start),
                cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = main_start
            .saturating_add(main)
            .saturating_add(margin_after)
            .saturating_add(element.gap);
    }
}

fn main_axis_size(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

fn cross_axis_size(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.height
    } else {
        element.width
    }
}

fn main_margin_total(element: &Element, is_row: bool) -> u16 {
    if is_row {
        element.margin.horizontal_total()
    } else {
        element.margin.vertical_total()
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

/// Intrinsic size of an element along one axis, border and padding included.
pub fn estimate_size(element: &Element, is_width: bool) -> u16 {
    match (is_width, element.width, element.height) {
        (true, Size::Fixed(n), _) | (false, _, Size::Fixed(n)) => return n,
        _ => {}
    }

    let border = element.style.border.thickness().saturating_mul(2);
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(_) | Content::Spans(_) => {
            let text = element.content.plain_text().unwrap_or_default();
            if is_width {
                clamp_u16(text.lines().map(display_width).max().unwrap_or(0))
            } else {
                clamp_u16(text.lines().count().max(1))
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along main axis
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width).saturating_add(margin_on(c, is_width)))
                    .fold(0u16, u16::saturating_add)
                    .saturating_add(gap_total(element.gap, children.len()))
            } else {
                // Max along cross axis
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width).saturating_add(margin_on(c, is_width)))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size.saturating_add(padding).saturating_add(border)
}

fn gap_total(gap: u16, count: usize) -> u16 {
    gap.saturating_mul(clamp_u16(count.saturating_sub(1)))
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn margin_on(element: &Element, is_width: bool) -> u16 {
    if is_width {
        element.margin.horizontal_total()
    } else {
        element.margin.vertical_total()
    }
}
