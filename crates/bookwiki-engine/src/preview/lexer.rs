use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use super::token::Token;

/// Markdown extensions enabled for preview
pub fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Lex markdown into a token tree.
pub fn lex(markdown: &str) -> Vec<Token> {
    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(markdown, options()) {
        builder.push(event);
    }
    builder.finish()
}

#[derive(Debug)]
struct Frame {
    tag: Tag<'static>,
    children: Vec<Token>,
}

/// Code and HTML blocks whose text events are being collected.
#[derive(Debug)]
enum RawBlock {
    Code { info: Option<String>, text: String },
    Html(String),
}

impl RawBlock {
    fn push_str(&mut self, s: &str) {
        match self {
            RawBlock::Code { text, .. } => text.push_str(s),
            RawBlock::Html(html) => html.push_str(s),
        }
    }

    fn into_token(self) -> Token {
        match self {
            RawBlock::Code { info, text } => Token::Code { info, text },
            RawBlock::Html(html) => Token::Html { html },
        }
    }
}

/// Folds the flat Start/End event stream into nested tokens.
#[derive(Debug, Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    raw: Option<RawBlock>,
    out: Vec<Token>,
}

impl TreeBuilder {
    fn push(&mut self, event: Event<'_>) {
        if self.raw.is_some() {
            self.push_raw(event);
            return;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => Some(info.to_string()),
                    CodeBlockKind::Indented => None,
                };
                self.raw = Some(RawBlock::Code {
                    info,
                    text: String::new(),
                });
            }
            Event::Start(Tag::HtmlBlock) => {
                self.raw = Some(RawBlock::Html(String::new()));
            }
            Event::Start(tag) => self.stack.push(Frame {
                tag: tag.into_static(),
                children: Vec::new(),
            }),
            Event::End(end) => match self.stack.pop() {
                Some(frame) => self.attach(Token::Container {
                    tag: frame.tag,
                    end,
                    children: frame.children,
                }),
                None => log::debug!("unbalanced end tag {end:?} ignored"),
            },
            other => self.attach(Token::Leaf(other.into_static())),
        }
    }

    fn push_raw(&mut self, event: Event<'_>) {
        match event {
            Event::End(TagEnd::CodeBlock | TagEnd::HtmlBlock) => {
                if let Some(raw) = self.raw.take() {
                    self.attach(raw.into_token());
                }
            }
            Event::Text(text) | Event::Html(text) => {
                if let Some(raw) = self.raw.as_mut() {
                    raw.push_str(&text);
                }
            }
            _ => {}
        }
    }

    fn attach(&mut self, token: Token) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(token),
            None => self.out.push(token),
        }
    }

    fn finish(mut self) -> Vec<Token> {
        if let Some(raw) = self.raw.take() {
            self.attach(raw.into_token());
        }
        // Unclosed containers: keep their children, drop the wrapper
        while let Some(frame) = self.stack.pop() {
            log::debug!("unclosed tag {:?} flattened", frame.tag);
            for child in frame.children {
                self.attach(child);
            }
        }
        self.out
    }
}
