use choicekit_dom::{
    Border, Buffer, Color, ColorContext, DefaultTheme, Element, Rect, Rgb, Size, Span, Style,
    TextStyle, TextWrap,
};

fn render_to_buffer(root: &Element, width: u16, height: u16) -> Buffer {
    let layout = choicekit_dom::layout::layout(root, Rect::new(0, 0, width, height));
    let mut buf = Buffer::new(width, height);
    let theme = DefaultTheme::new();
    choicekit_dom::render::render_to_buffer(root, &layout, &mut buf, &ColorContext::new(&theme));
    buf
}

// ============================================================================
// Text Tests
// ============================================================================

#[test]
fn test_text_renders_characters() {
    let root = Element::text("Hello").id("root");

    let buf = render_to_buffer(&root, 10, 1);

    assert_eq!(buf.row_text(0), "Hello");
}

#[test]
fn test_spans_keep_their_own_styles() {
    let root = Element::spans(vec![
        Span::new("plain "),
        Span::styled("bold", TextStyle::new().bold()),
    ])
    .id("root");

    let buf = render_to_buffer(&root, 20, 1);

    assert_eq!(buf.row_text(0), "plain bold");
    assert!(!buf.cell(0, 0).unwrap().style.bold);
    assert!(buf.cell(6, 0).unwrap().style.bold);
}

#[test]
fn test_span_foreground_overrides_element() {
    let root = Element::spans(vec![
        Span::new("a"),
        Span::new("b").foreground(Color::rgb(255, 0, 0)),
    ])
    .id("root")
    .style(Style::new().foreground(Color::rgb(0, 255, 0)));

    let buf = render_to_buffer(&root, 5, 1);

    assert_eq!(buf.cell(0, 0).unwrap().fg, Rgb::new(0, 255, 0));
    assert_eq!(buf.cell(1, 0).unwrap().fg, Rgb::new(255, 0, 0));
}

#[test]
fn test_truncate_adds_ellipsis() {
    let root = Element::text("Strawberry")
        .id("root")
        .width(Size::Fixed(6))
        .text_wrap(TextWrap::Truncate);

    let buf = render_to_buffer(&root, 20, 1);

    assert_eq!(buf.row_text(0), "Straw…");
}

#[test]
fn test_wrap_breaks_words() {
    let root = Element::text("pick one of these")
        .id("root")
        .width(Size::Fixed(8))
        .height(Size::Fixed(2))
        .text_wrap(TextWrap::Wrap);

    let buf = render_to_buffer(&root, 20, 3);

    assert_eq!(buf.row_text(0), "pick one");
    assert_eq!(buf.row_text(1), "of these");
}

// ============================================================================
// Background & Border Tests
// ============================================================================

#[test]
fn test_background_fills_rect() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(2))
        .style(Style::new().background(Color::rgb(10, 20, 30)));

    let buf = render_to_buffer(&root, 10, 5);

    assert_eq!(buf.cell(3, 1).unwrap().bg, Rgb::new(10, 20, 30));
    assert_eq!(buf.cell(4, 1).unwrap().bg, Rgb::BLACK);
}

#[test]
fn test_text_inherits_painted_background() {
    let root = Element::row()
        .id("root")
        .style(Style::new().background(Color::rgb(10, 20, 30)))
        .child(Element::text("hi").id("t"));

    let buf = render_to_buffer(&root, 10, 1);

    assert_eq!(buf.cell(0, 0).unwrap().bg, Rgb::new(10, 20, 30));
}

#[test]
fn test_rounded_border_corners() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded));

    let buf = render_to_buffer(&root, 10, 5);

    assert_eq!(buf.row_text(0), "╭──╮");
    assert_eq!(buf.row_text(1), "│  │");
    assert_eq!(buf.row_text(2), "╰──╯");
}

#[test]
fn test_hidden_element_keeps_space_but_draws_nothing() {
    let root = Element::col()
        .id("root")
        .child(Element::text("ghost").id("a").hidden(true))
        .child(Element::text("seen").id("b"));

    let buf = render_to_buffer(&root, 10, 3);

    assert_eq!(buf.row_text(0), "");
    assert_eq!(buf.row_text(1), "seen");
}

#[test]
fn test_theme_variables_resolve_when_rendering() {
    let root = Element::text("x")
        .id("root")
        .style(Style::new().foreground(Color::var("background")));

    let buf = render_to_buffer(&root, 3, 1);

    assert_eq!(buf.cell(0, 0).unwrap().fg, Rgb::BLACK);
}
