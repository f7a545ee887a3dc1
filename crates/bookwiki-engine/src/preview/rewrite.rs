use crate::models::InfoboxEntry;
use crate::serializer::InfoboxFence;

use super::infobox::InfoboxRenderer;
use super::token::{MarkdownToken, TokenKind};

/// Replace every infobox code block in the tree with its rendered table.
///
/// Walks depth-first through all composite tokens, so fences nested in block
/// quotes or list items are found too. Code blocks in other languages are
/// left alone. Rewritten tokens lose their language tag, which makes a
/// second pass over the same tree a no-op.
///
/// Returns the number of tokens rewritten.
pub fn rewrite_infoboxes<T: MarkdownToken>(tokens: &mut [T], renderer: &InfoboxRenderer) -> usize {
    let mut rewritten = 0;
    for token in tokens.iter_mut() {
        if is_infobox(token) {
            let entries = InfoboxEntry::parse_body(token.raw_text().lines());
            token.replace_with_html(renderer.render(&entries));
            rewritten += 1;
        }
        if let Some(children) = token.children_mut() {
            rewritten += rewrite_infoboxes(children, renderer);
        }
    }
    rewritten
}

fn is_infobox<T: MarkdownToken>(token: &T) -> bool {
    token.kind() == TokenKind::Code
        && token
            .language_tag()
            .is_some_and(InfoboxFence::is_infobox_language)
}
