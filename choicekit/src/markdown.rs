//! Inline markdown rendering for option labels and captions.
//!
//! Option text is CommonMark. A terminal row cannot hold block structure, so
//! the document is flattened into a single run of styled [`Span`]s: blocks
//! and line breaks collapse to single spaces.

use choicekit_dom::{Color, Span, TextStyle};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::theme::tokens;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// When false, raw HTML is shown as literal text. When true it is
    /// dropped, since a terminal cannot render it.
    pub allow_html: bool,
    /// Caption treatment: faded color and dim text.
    pub is_caption: bool,
}

impl MarkdownOptions {
    pub fn label() -> Self {
        Self::default()
    }

    pub fn caption() -> Self {
        Self {
            is_caption: true,
            ..Self::default()
        }
    }
}

#[derive(Default)]
struct InlineWriter {
    spans: Vec<Span>,
    bold: usize,
    italic: usize,
    strike: usize,
    link: usize,
    pending_space: bool,
    base: TextStyle,
    foreground: Option<Color>,
}

impl InlineWriter {
    fn style(&self) -> TextStyle {
        let mut style = self.base;
        if self.bold > 0 {
            style = style.bold();
        }
        if self.italic > 0 {
            style = style.italic();
        }
        if self.strike > 0 {
            style = style.strikethrough();
        }
        if self.link > 0 {
            style = style.underline();
        }
        style
    }

    fn push(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.pending_space && !self.spans.is_empty() {
            self.pending_space = false;
            self.push_raw(" ", self.base);
        }
        self.pending_space = false;
        let style = self.style();
        self.push_raw(text, style);
    }

    fn push_raw(&mut self, text: &str, style: TextStyle) {
        // Merge runs that look identical.
        if let Some(last) = self.spans.last_mut() {
            if last.style == style && last.foreground == self.foreground {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(Span {
            text: text.to_string(),
            style,
            foreground: self.foreground.clone(),
        });
    }

    fn separate(&mut self) {
        self.pending_space = true;
    }
}

/// Render `source` to inline spans.
pub fn render_inline(source: &str, options: &MarkdownOptions) -> Vec<Span> {
    let mut writer = InlineWriter::default();
    if options.is_caption {
        writer.base = TextStyle::new().dim();
        writer.foreground = Some(Color::var(tokens::FADED_TEXT_60));
    }

    for event in Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH) {
        match event {
            Event::Start(Tag::Strong) => writer.bold += 1,
            Event::End(TagEnd::Strong) => writer.bold = writer.bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => writer.italic += 1,
            Event::End(TagEnd::Emphasis) => writer.italic = writer.italic.saturating_sub(1),
            Event::Start(Tag::Strikethrough) => writer.strike += 1,
            Event::End(TagEnd::Strikethrough) => {
                writer.strike = writer.strike.saturating_sub(1)
            }
            Event::Start(Tag::Link { .. }) => writer.link += 1,
            Event::End(TagEnd::Link) => writer.link = writer.link.saturating_sub(1),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::HtmlBlock,
            ) => writer.separate(),
            Event::Text(text) | Event::Code(text) => writer.push(&text),
            Event::Html(html) | Event::InlineHtml(html) => {
                if !options.allow_html {
                    writer.push(html.trim_end_matches('\n'));
                }
            }
            Event::SoftBreak | Event::HardBreak | Event::Rule => writer.separate(),
            _ => {}
        }
    }

    writer.spans
}

/// Plain text of rendered spans.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
