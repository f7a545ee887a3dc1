use crate::models::{ContentBlock, InfoboxEntry};

use super::fence::InfoboxFence;

pub const BLOCK_SEPARATOR: &str = "\n\n";
pub const HEADING_PREFIX: &str = "## ";

/// Render blocks as a single markdown string.
///
/// Headings always come out as level 2; the block model does not keep levels.
pub fn blocks_to_markdown(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn render_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Heading { text, .. } => format!("{HEADING_PREFIX}{text}"),
        ContentBlock::Paragraph { text, .. } => text.clone(),
        ContentBlock::Infobox { entries, .. } => render_infobox(entries),
    }
}

fn render_infobox(entries: &[InfoboxEntry]) -> String {
    let mut out = String::from(InfoboxFence::OPEN);
    for entry in entries {
        out.push('\n');
        out.push_str(&entry.key);
        out.push_str(": ");
        out.push_str(&entry.value);
    }
    out.push('\n');
    out.push_str(InfoboxFence::CLOSE);
    out
}
