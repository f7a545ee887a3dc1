//! # Block ↔ Markdown Serializer
//!
//! Converts an article's ordered block list to the flat markdown text shown in
//! the editor, and parses edited text back into blocks on save.
//!
//! ## Directions
//!
//! - **Render** (`blocks_to_markdown`): headings become `## text`, paragraphs
//!   are emitted verbatim, infoboxes become ```` ```infobox ```` fences with one
//!   `key: value` line per entry. Blocks are separated by a blank line.
//! - **Parse** (`markdown_to_blocks`): a single forward scan with two states
//!   (normal text, inside an infobox fence). This scan, not a general markdown
//!   parser, decides block boundaries.
//!
//! Neither direction can fail. Malformed input degrades: unterminated
//! infoboxes and key-less infobox lines are dropped.
//!
//! ## Identity
//!
//! Parsing mints ids through an [`IdGenerator`]. The default [`FreshIds`]
//! gives every parsed block a new id, so ids do not survive a text round
//! trip; [`ReuseIds`] keeps them positionally when the caller wants anchors to
//! stay valid across edits.

pub mod fence;
pub mod ids;
pub mod parse;
pub mod render;

pub use fence::InfoboxFence;
pub use ids::{FreshIds, IdGenerator, ReuseIds};
pub use parse::{BlockBuilder, markdown_to_blocks, markdown_to_blocks_with};
pub use render::blocks_to_markdown;
