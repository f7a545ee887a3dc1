use pulldown_cmark::{Event, Tag, TagEnd};

/// Coarse classification of a token, enough for tree rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Block quote, list, item, paragraph, heading, emphasis, ...
    Container,
    /// Fenced or indented code block
    Code,
    /// Raw HTML block, emitted verbatim
    Html,
    /// Text, breaks, rules and other leaf events
    Leaf,
}

/// What a tree rewrite pass needs from a markdown token.
///
/// Implemented by [`Token`]; other lexers can implement it to reuse
/// [`rewrite_infoboxes`](super::rewrite_infoboxes) unchanged.
pub trait MarkdownToken: Sized {
    fn kind(&self) -> TokenKind;

    /// Body of a code block, markup of an HTML block or text of a text leaf.
    /// Empty for everything else.
    fn raw_text(&self) -> &str;

    /// Info string of a fenced code block. `None` for any other token.
    fn language_tag(&self) -> Option<&str>;

    /// Child tokens of a composite token
    fn children_mut(&mut self) -> Option<&mut [Self]>;

    /// Turn this token into a raw HTML block, dropping any language tag
    fn replace_with_html(&mut self, html: String);
}

/// Node of the markdown token tree built from pulldown-cmark events.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Container {
        tag: Tag<'static>,
        end: TagEnd,
        children: Vec<Token>,
    },
    Code {
        /// Info string; `None` for indented code
        info: Option<String>,
        text: String,
    },
    Html {
        html: String,
    },
    Leaf(Event<'static>),
}

impl Token {
    pub fn fenced_code(info: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Code {
            info: Some(info.into()),
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self::Leaf(Event::Text(text.into()))
    }
}

impl MarkdownToken for Token {
    fn kind(&self) -> TokenKind {
        match self {
            Token::Container { .. } => TokenKind::Container,
            Token::Code { .. } => TokenKind::Code,
            Token::Html { .. } => TokenKind::Html,
            Token::Leaf(_) => TokenKind::Leaf,
        }
    }

    fn raw_text(&self) -> &str {
        match self {
            Token::Code { text, .. } => text,
            Token::Html { html } => html,
            Token::Leaf(Event::Text(text) | Event::Code(text)) => text,
            _ => "",
        }
    }

    fn language_tag(&self) -> Option<&str> {
        match self {
            Token::Code { info, .. } => info.as_deref(),
            _ => None,
        }
    }

    fn children_mut(&mut self) -> Option<&mut [Self]> {
        match self {
            Token::Container { children, .. } => Some(children.as_mut_slice()),
            _ => None,
        }
    }

    fn replace_with_html(&mut self, html: String) {
        *self = Token::Html { html };
    }
}
