use choicekit::markdown::{plain_text, render_inline, MarkdownOptions};
use choicekit_dom::{Color, Span, TextStyle};

fn label(source: &str) -> Vec<Span> {
    render_inline(source, &MarkdownOptions::label())
}

fn span<'a>(spans: &'a [Span], text: &str) -> &'a Span {
    spans
        .iter()
        .find(|s| s.text == text)
        .unwrap_or_else(|| panic!("no span {text:?} in {spans:?}"))
}

// ============================================================================
// Inline Styles
// ============================================================================

#[test]
fn test_plain_text_is_one_span() {
    let spans = label("Apple");

    assert_eq!(spans, vec![Span::new("Apple")]);
}

#[test]
fn test_strong_and_emphasis() {
    let spans = label("**big** and *small*");

    assert_eq!(plain_text(&spans), "big and small");
    assert!(span(&spans, "big").style.bold);
    assert!(span(&spans, "small").style.italic);
    assert_eq!(span(&spans, " and ").style, TextStyle::new());
}

#[test]
fn test_strikethrough() {
    let spans = label("~~gone~~");

    assert!(span(&spans, "gone").style.strikethrough);
}

#[test]
fn test_link_text_is_underlined() {
    let spans = label("see [docs](https://example.com)");

    assert_eq!(plain_text(&spans), "see docs");
    assert!(span(&spans, "docs").style.underline);
}

#[test]
fn test_inline_code_keeps_text() {
    assert_eq!(plain_text(&label("run `cargo`")), "run cargo");
}

// ============================================================================
// Flattening
// ============================================================================

#[test]
fn test_line_breaks_become_spaces() {
    assert_eq!(plain_text(&label("one\ntwo")), "one two");
}

#[test]
fn test_blocks_are_joined_with_spaces() {
    assert_eq!(plain_text(&label("# Title\n\nBody text")), "Title Body text");
    assert_eq!(plain_text(&label("- a\n- b")), "a b");
}

#[test]
fn test_empty_source_has_no_spans() {
    assert!(label("").is_empty());
}

#[test]
fn test_entities_are_decoded() {
    assert_eq!(plain_text(&label("&nbsp;")), "\u{a0}");
    assert_eq!(plain_text(&label("a &amp; b")), "a & b");
}

// ============================================================================
// HTML
// ============================================================================

#[test]
fn test_html_shown_literally_when_disallowed() {
    assert_eq!(plain_text(&label("<b>x</b>")), "<b>x</b>");
}

#[test]
fn test_html_dropped_when_allowed() {
    let options = MarkdownOptions {
        allow_html: true,
        ..MarkdownOptions::default()
    };

    assert_eq!(plain_text(&render_inline("<b>x</b>", &options)), "x");
}

// ============================================================================
// Captions
// ============================================================================

#[test]
fn test_caption_spans_are_faded_and_dim() {
    let spans = render_inline("fresh **today**", &MarkdownOptions::caption());

    assert!(!spans.is_empty());
    for span in &spans {
        assert!(span.style.dim);
        assert_eq!(span.foreground, Some(Color::var("text.faded_60")));
    }
    assert!(span(&spans, "today").style.bold);
}
