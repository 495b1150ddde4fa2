use crate::types::{Color, TextStyle};

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// Inline rich text: styled runs laid out on one logical line.
    Spans(Vec<Span>),
    Children(Vec<super::Element>),
}

impl Content {
    /// The plain text carried by this content, if any.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Content::Text(text) => Some(text.clone()),
            Content::Spans(spans) => Some(spans.iter().map(|s| s.text.as_str()).collect()),
            Content::None | Content::Children(_) => None,
        }
    }
}

/// A run of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
    /// Overrides the owning element's foreground.
    pub foreground: Option<Color>,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            foreground: None,
        }
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }
}
