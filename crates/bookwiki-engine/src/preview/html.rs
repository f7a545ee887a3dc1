use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd, html};

use super::token::Token;

/// Serialize a token tree to HTML with pulldown-cmark's writer.
pub fn to_html(tokens: &[Token]) -> String {
    let mut events = Vec::new();
    flatten(tokens, &mut events);

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

fn flatten(tokens: &[Token], events: &mut Vec<Event<'static>>) {
    for token in tokens {
        match token {
            Token::Container { tag, end, children } => {
                events.push(Event::Start(tag.clone()));
                flatten(children, events);
                events.push(Event::End(*end));
            }
            Token::Code { info, text } => {
                let kind = match info {
                    Some(info) => CodeBlockKind::Fenced(CowStr::from(info.clone())),
                    None => CodeBlockKind::Indented,
                };
                events.push(Event::Start(Tag::CodeBlock(kind)));
                if !text.is_empty() {
                    events.push(Event::Text(CowStr::from(text.clone())));
                }
                events.push(Event::End(TagEnd::CodeBlock));
            }
            Token::Html { html } => {
                events.push(Event::Start(Tag::HtmlBlock));
                events.push(Event::Html(CowStr::from(html.clone())));
                events.push(Event::End(TagEnd::HtmlBlock));
            }
            Token::Leaf(event) => events.push(event.clone()),
        }
    }
}
