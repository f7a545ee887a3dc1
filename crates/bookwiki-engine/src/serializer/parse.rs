use std::sync::OnceLock;

use regex::Regex;

use crate::models::{BlockKind, ContentBlock, InfoboxEntry};

use super::fence::InfoboxFence;
use super::ids::{FreshIds, IdGenerator};

/// Parse markdown into blocks, minting a fresh id for every block.
pub fn markdown_to_blocks(markdown: &str) -> Vec<ContentBlock> {
    markdown_to_blocks_with(markdown, &mut FreshIds)
}

/// Parse markdown into blocks, taking ids from `ids`.
pub fn markdown_to_blocks_with<G: IdGenerator>(markdown: &str, ids: &mut G) -> Vec<ContentBlock> {
    let mut builder = BlockBuilder::new(ids);
    for line in markdown.lines() {
        builder.push(line);
    }
    builder.finish()
}

#[derive(Debug)]
enum State<'a> {
    Normal,
    InsideInfobox { lines: Vec<&'a str> },
}

/// Line-driven state machine turning markdown into blocks.
///
/// Paragraph lines accumulate until a blank line, a heading or an infobox
/// fence. Infobox body lines accumulate until the closing fence; an
/// unterminated infobox is dropped at end of input.
pub struct BlockBuilder<'a, 'g, G: IdGenerator> {
    state: State<'a>,
    paragraph: Vec<&'a str>,
    ids: &'g mut G,
    out: Vec<ContentBlock>,
}

impl<'a, 'g, G: IdGenerator> BlockBuilder<'a, 'g, G> {
    pub fn new(ids: &'g mut G) -> Self {
        Self {
            state: State::Normal,
            paragraph: Vec::new(),
            ids,
            out: Vec::new(),
        }
    }

    pub fn push(&mut self, line: &'a str) {
        if let State::InsideInfobox { lines } = &mut self.state {
            if InfoboxFence::closes(line) {
                let lines = std::mem::take(lines);
                self.state = State::Normal;
                self.emit_infobox(lines);
            } else {
                lines.push(line);
            }
            return;
        }

        if InfoboxFence::opens(line) {
            self.flush_paragraph();
            self.state = State::InsideInfobox { lines: Vec::new() };
            return;
        }

        if line.trim_start().starts_with('#') {
            self.flush_paragraph();
            let text = heading_marker().replace(line.trim(), "").into_owned();
            let id = self.ids.next_id(BlockKind::Heading);
            self.out.push(ContentBlock::Heading { id, text });
            return;
        }

        if line.trim().is_empty() {
            self.flush_paragraph();
            return;
        }

        self.paragraph.push(line);
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush
        self.flush_paragraph();
        if let State::InsideInfobox { lines } = &self.state {
            log::debug!(
                "dropping unterminated infobox with {} buffered lines",
                lines.len()
            );
        }
        self.out
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join("\n");
        self.paragraph.clear();

        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let id = self.ids.next_id(BlockKind::Paragraph);
        self.out.push(ContentBlock::Paragraph {
            id,
            text: text.to_string(),
        });
    }

    fn emit_infobox(&mut self, lines: Vec<&'a str>) {
        let entries = InfoboxEntry::parse_body(lines);
        let id = self.ids.next_id(BlockKind::Infobox);
        self.out.push(ContentBlock::Infobox { id, entries });
    }
}

fn heading_marker() -> &'static Regex {
    static HEADING_MARKER: OnceLock<Regex> = OnceLock::new();
    HEADING_MARKER.get_or_init(|| Regex::new(r"^#+\s*").expect("valid heading regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::ReuseIds;
    use pretty_assertions::assert_eq;

    /// (kind, text-or-entries) view that ignores ids
    fn shape(blocks: &[ContentBlock]) -> Vec<(BlockKind, String)> {
        blocks
            .iter()
            .map(|b| {
                let body = match b {
                    ContentBlock::Infobox { entries, .. } => entries
                        .iter()
                        .map(|e| format!("{}={}", e.key, e.value))
                        .collect::<Vec<_>>()
                        .join(";"),
                    other => other.text().unwrap_or_default().to_string(),
                };
                (b.kind(), body)
            })
            .collect()
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(markdown_to_blocks("").is_empty());
        assert!(markdown_to_blocks("\n\n   \n").is_empty());
    }

    #[test]
    fn paragraph_lines_join_until_blank_line() {
        let blocks = markdown_to_blocks("line one\nline two\n\nnext");
        assert_eq!(
            shape(&blocks),
            vec![
                (BlockKind::Paragraph, "line one\nline two".to_string()),
                (BlockKind::Paragraph, "next".to_string()),
            ]
        );
    }

    #[test]
    fn consecutive_blank_lines_do_not_create_empty_paragraphs() {
        let blocks = markdown_to_blocks("first\n\n\n\nsecond");
        assert_eq!(
            shape(&blocks),
            vec![
                (BlockKind::Paragraph, "first".to_string()),
                (BlockKind::Paragraph, "second".to_string()),
            ]
        );
    }

    #[test]
    fn paragraph_text_is_trimmed() {
        let blocks = markdown_to_blocks("   indented start\nend   ");
        assert_eq!(blocks[0].text(), Some("indented start\nend"));
    }

    #[test]
    fn heading_strips_markers_and_splits_paragraph() {
        let blocks = markdown_to_blocks("before\n### Deep heading\nafter");
        assert_eq!(
            shape(&blocks),
            vec![
                (BlockKind::Paragraph, "before".to_string()),
                (BlockKind::Heading, "Deep heading".to_string()),
                (BlockKind::Paragraph, "after".to_string()),
            ]
        );
    }

    #[test]
    fn heading_without_space_after_marker() {
        let blocks = markdown_to_blocks("#Title");
        assert_eq!(shape(&blocks), vec![(BlockKind::Heading, "Title".to_string())]);
    }

    #[test]
    fn bare_heading_marker_is_an_empty_heading() {
        let blocks = markdown_to_blocks("##");
        assert_eq!(shape(&blocks), vec![(BlockKind::Heading, String::new())]);
    }

    #[test]
    fn hash_in_the_middle_of_a_line_is_text() {
        let blocks = markdown_to_blocks("issue #42 is fixed");
        assert_eq!(
            shape(&blocks),
            vec![(BlockKind::Paragraph, "issue #42 is fixed".to_string())]
        );
    }

    #[test]
    fn infobox_fence_becomes_entries() {
        let blocks = markdown_to_blocks("```infobox\nИмя: Огаро\nСтатус: Жив\n```");
        assert_eq!(
            blocks[0].entries(),
            Some(
                &[
                    InfoboxEntry::new("Имя", "Огаро"),
                    InfoboxEntry::new("Статус", "Жив"),
                ][..]
            )
        );
    }

    #[test]
    fn infobox_flushes_pending_paragraph() {
        let blocks = markdown_to_blocks("intro text\n```infobox\nA: B\n```\noutro");
        assert_eq!(
            shape(&blocks),
            vec![
                (BlockKind::Paragraph, "intro text".to_string()),
                (BlockKind::Infobox, "A=B".to_string()),
                (BlockKind::Paragraph, "outro".to_string()),
            ]
        );
    }

    #[test]
    fn empty_infobox_has_no_entries() {
        let blocks = markdown_to_blocks("```infobox\n```");
        assert_eq!(shape(&blocks), vec![(BlockKind::Infobox, String::new())]);
    }

    #[test]
    fn malformed_infobox_line_is_dropped() {
        let blocks = markdown_to_blocks("```infobox\njusttext\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].entries(), Some(&[][..]));
    }

    #[test]
    fn headings_and_blanks_inside_infobox_are_body_lines() {
        let blocks = markdown_to_blocks("```infobox\n# Not: a heading\n\nKey: Value\n```");
        assert_eq!(
            shape(&blocks),
            vec![(BlockKind::Infobox, "# Not=a heading;Key=Value".to_string())]
        );
    }

    #[test]
    fn unterminated_infobox_is_dropped() {
        let blocks = markdown_to_blocks("para\n\n```infobox\nA: B\nC: D");
        assert_eq!(shape(&blocks), vec![(BlockKind::Paragraph, "para".to_string())]);
    }

    #[test]
    fn other_code_fences_stay_in_paragraphs() {
        let blocks = markdown_to_blocks("```rust\nfn main() {}\n```");
        assert_eq!(
            shape(&blocks),
            vec![(
                BlockKind::Paragraph,
                "```rust\nfn main() {}\n```".to_string()
            )]
        );
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let blocks = markdown_to_blocks("# Title\r\n\r\n```infobox\r\nA: B\r\n```\r\n");
        assert_eq!(
            shape(&blocks),
            vec![
                (BlockKind::Heading, "Title".to_string()),
                (BlockKind::Infobox, "A=B".to_string()),
            ]
        );
    }

    #[test]
    fn every_parse_mints_new_ids() {
        let first = markdown_to_blocks("# A\n\nB");
        let second = markdown_to_blocks("# A\n\nB");
        assert_ne!(first[0].id(), second[0].id());
        assert_ne!(first[0].id(), first[1].id());
    }

    #[test]
    fn reuse_ids_keeps_positional_identity() {
        let previous = markdown_to_blocks("# A\n\nB");
        let mut ids = ReuseIds::new(&previous);
        let next = markdown_to_blocks_with("# A edited\n\nB edited\n\nC", &mut ids);

        assert_eq!(next[0].id(), previous[0].id());
        assert_eq!(next[1].id(), previous[1].id());
        assert!(previous.iter().all(|b| b.id() != next[2].id()));
    }
}
