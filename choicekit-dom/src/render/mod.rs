use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element, Span};
use crate::layout::{inner_rect, LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width, wrap_chars, wrap_words};
use crate::types::{Border, ColorContext, Rgb, TextStyle, TextWrap};

/// A character ready to be placed, with its resolved colors.
#[derive(Clone, Copy)]
struct Glyph {
    ch: char,
    fg: Rgb,
    style: TextStyle,
}

/// Draw `element` and its descendants into `buf` using precomputed layout.
///
/// Elements are painted in document order, so later siblings paint over
/// earlier ones. Hidden elements (and their subtrees) are skipped.
pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    color_ctx: &ColorContext,
) {
    let mut painted = 0usize;
    render_element(element, layout, buf, color_ctx, &mut painted);
    log::trace!("render: painted {painted} elements");
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    color_ctx: &ColorContext,
    painted: &mut usize,
) {
    if element.hidden {
        return;
    }
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    *painted += 1;

    if let Some(bg) = &element.style.background {
        fill_rect(buf, rect, color_ctx.to_rgb(bg));
    }

    render_border(element, rect, buf, color_ctx);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            let fg = foreground(element, color_ctx);
            let glyphs: Vec<Glyph> = text
                .chars()
                .map(|ch| Glyph {
                    ch,
                    fg,
                    style: element.style.text_style,
                })
                .collect();
            render_glyphs(&glyphs, text, element, rect, buf);
        }
        Content::Spans(spans) => {
            let glyphs = span_glyphs(spans, element, color_ctx);
            let text: String = spans.iter().map(|s| s.text.as_str()).collect();
            render_glyphs(&glyphs, &text, element, rect, buf);
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, color_ctx, painted);
            }
        }
    }
}

fn foreground(element: &Element, color_ctx: &ColorContext) -> Rgb {
    element
        .style
        .foreground
        .as_ref()
        .map(|c| color_ctx.to_rgb(c))
        .unwrap_or(Rgb::WHITE)
}

fn span_glyphs(spans: &[Span], element: &Element, color_ctx: &ColorContext) -> Vec<Glyph> {
    let base_fg = foreground(element, color_ctx);
    let mut glyphs = Vec::new();
    for span in spans {
        let fg = span
            .foreground
            .as_ref()
            .map(|c| color_ctx.to_rgb(c))
            .unwrap_or(base_fg);
        let style = element.style.text_style.union(span.style);
        glyphs.extend(span.text.chars().map(|ch| Glyph { ch, fg, style }));
    }
    glyphs
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            buf.put(x, y, Cell::blank(bg));
        }
    }
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer, color_ctx: &ColorContext) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element
        .style
        .border_color
        .as_ref()
        .map(|c| color_ctx.to_rgb(c))
        .unwrap_or_else(|| foreground(element, color_ctx));

    let mut put = |x: u16, y: u16, ch: char| {
        let bg = buf.cell(x, y).map(|c| c.bg).unwrap_or_default();
        buf.put(x, y, Cell::new(ch).fg(fg).bg(bg));
    };

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    for x in rect.x + 1..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
}

/// Break glyphs into display lines according to the element's wrap mode.
fn layout_lines(glyphs: &[Glyph], text: &str, wrap: TextWrap, max_width: usize) -> Vec<Vec<Glyph>> {
    // Map each produced line back onto glyphs by walking the source in order.
    let raw_lines: Vec<String> = match wrap {
        TextWrap::NoWrap => text.split('\n').map(str::to_string).collect(),
        TextWrap::Truncate => {
            let first = text.split('\n').next().unwrap_or("");
            vec![truncate_to_width(first, max_width)]
        }
        TextWrap::Wrap => text
            .split('\n')
            .flat_map(|line| {
                if line.contains(' ') {
                    wrap_words(line, max_width)
                } else {
                    wrap_chars(line, max_width)
                }
            })
            .collect(),
    };

    let mut source = glyphs.iter().peekable();
    let mut lines = Vec::with_capacity(raw_lines.len());
    for raw in raw_lines {
        let mut line = Vec::new();
        for ch in raw.chars() {
            // Skip separators that wrapping consumed.
            while let Some(g) = source.peek() {
                if g.ch == ch {
                    break;
                }
                if g.ch == ' ' || g.ch == '\n' {
                    source.next();
                } else {
                    break;
                }
            }
            match source.peek() {
                Some(g) if g.ch == ch => {
                    line.push(**g);
                    source.next();
                }
                // Characters introduced by truncation borrow the last style.
                _ => {
                    let template = line.last().copied().or_else(|| glyphs.first().copied());
                    if let Some(template) = template {
                        line.push(Glyph { ch, ..template });
                    }
                }
            }
        }
        lines.push(line);
    }
    lines
}

fn render_glyphs(glyphs: &[Glyph], text: &str, element: &Element, rect: Rect, buf: &mut Buffer) {
    let inner = inner_rect(element, rect);
    if inner.is_empty() {
        return;
    }

    let lines = layout_lines(glyphs, text, element.text_wrap, inner.width as usize);

    for (line_idx, line) in lines.iter().enumerate() {
        let y = inner.y + line_idx as u16;
        if y >= inner.bottom() {
            break;
        }

        let mut x = inner.x;
        for glyph in line {
            let w = char_width(glyph.ch);
            if w == 0 {
                continue;
            }
            if x + w as u16 > inner.right() {
                break;
            }

            // Text keeps whatever background is already painted underneath.
            let bg = buf.cell(x, y).map(|c| c.bg).unwrap_or_default();
            buf.put(x, y, Cell::new(glyph.ch).fg(glyph.fg).bg(bg).style(glyph.style));
            for extra in 1..w as u16 {
                if let Some(cell) = buf.cell_mut(x + extra, y) {
                    cell.symbol = ' ';
                    cell.continuation = true;
                }
            }
            x += w as u16;
        }
    }
}
