//! # Live Preview
//!
//! Renders editor text to HTML, turning ```` ```infobox ```` fences into
//! key/value tables while pulldown-cmark handles every other construct.
//!
//! ## Pipeline
//!
//! 1. **Lex** (`lexer`): pulldown-cmark events are folded into a [`Token`] tree
//! 2. **Rewrite** (`rewrite`): infobox code tokens anywhere in the tree are
//!    replaced by raw HTML tokens
//! 3. **Emit** (`html`): the tree is flattened back into events and written
//!    with pulldown-cmark's HTML writer
//!
//! The rewrite pass only depends on the [`MarkdownToken`] trait, not on the
//! concrete token type.

pub mod html;
pub mod infobox;
pub mod lexer;
pub mod rewrite;
pub mod token;

pub use html::to_html;
pub use infobox::InfoboxRenderer;
pub use lexer::lex;
pub use rewrite::rewrite_infoboxes;
pub use token::{MarkdownToken, Token, TokenKind};

/// Render editor text to preview HTML
pub fn render_preview(markdown: &str, renderer: &InfoboxRenderer) -> String {
    let mut tokens = lex(markdown);
    let rewritten = rewrite_infoboxes(&mut tokens, renderer);
    log::debug!("preview rewrote {rewritten} infobox(es)");
    to_html(&tokens)
}
