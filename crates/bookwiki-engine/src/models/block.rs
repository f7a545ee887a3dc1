use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a content block, unique within its article.
///
/// Used as the anchor target for table-of-contents jumps, so it is minted once
/// when the block is created and carried along unchanged afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Mint a new random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `key: value` row of an infobox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoboxEntry {
    pub key: String,
    pub value: String,
}

impl InfoboxEntry {
    pub const SEPARATOR: char = ':';

    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse a single infobox body line.
    ///
    /// Splits on the first `:` and trims both halves. Lines without a
    /// separator or with an empty key yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (key, value) = line.split_once(Self::SEPARATOR)?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key, value.trim()))
    }

    /// Parse every line of an infobox body, keeping the valid rows in order.
    pub fn parse_body<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Self> {
        lines
            .into_iter()
            .filter_map(|line| {
                let entry = Self::parse_line(line);
                if entry.is_none() && !line.trim().is_empty() {
                    log::debug!("dropping infobox line without key: {line:?}");
                }
                entry
            })
            .collect()
    }
}

/// Discriminant of a [`ContentBlock`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Paragraph,
    Infobox,
}

/// One structural unit of an article.
///
/// Paragraph text is free-form markdown: emphasis, links, lists and quotes
/// all stay inline in `text` rather than being modelled separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading { id: BlockId, text: String },
    Paragraph { id: BlockId, text: String },
    Infobox { id: BlockId, entries: Vec<InfoboxEntry> },
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading {
            id: BlockId::generate(),
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            id: BlockId::generate(),
            text: text.into(),
        }
    }

    pub fn infobox(entries: impl IntoIterator<Item = InfoboxEntry>) -> Self {
        Self::Infobox {
            id: BlockId::generate(),
            entries: entries.into_iter().collect(),
        }
    }

    pub fn id(&self) -> &BlockId {
        match self {
            Self::Heading { id, .. } | Self::Paragraph { id, .. } | Self::Infobox { id, .. } => id,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Heading { .. } => BlockKind::Heading,
            Self::Paragraph { .. } => BlockKind::Paragraph,
            Self::Infobox { .. } => BlockKind::Infobox,
        }
    }

    /// Text of a heading or paragraph; `None` for infoboxes
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Heading { text, .. } | Self::Paragraph { text, .. } => Some(text),
            Self::Infobox { .. } => None,
        }
    }

    pub fn entries(&self) -> Option<&[InfoboxEntry]> {
        match self {
            Self::Infobox { entries, .. } => Some(entries),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_splits_on_first_colon() {
        let entry = InfoboxEntry::parse_line("Time: 12:30").unwrap();
        assert_eq!(entry, InfoboxEntry::new("Time", "12:30"));
    }

    #[test]
    fn parse_line_trims_both_sides() {
        let entry = InfoboxEntry::parse_line("  Name  :   Ogaro  ").unwrap();
        assert_eq!(entry, InfoboxEntry::new("Name", "Ogaro"));
    }

    #[test]
    fn parse_line_without_colon_is_dropped() {
        assert_eq!(InfoboxEntry::parse_line("justtext"), None);
    }

    #[test]
    fn parse_line_with_empty_key_is_dropped() {
        assert_eq!(InfoboxEntry::parse_line(": orphan value"), None);
        assert_eq!(InfoboxEntry::parse_line("   : x"), None);
    }

    #[test]
    fn parse_line_allows_empty_value() {
        assert_eq!(
            InfoboxEntry::parse_line("Status:"),
            Some(InfoboxEntry::new("Status", ""))
        );
    }

    #[test]
    fn parse_body_keeps_order_and_duplicates() {
        let entries = InfoboxEntry::parse_body(["B: 2", "noise", "A: 1", "B: 3"]);
        assert_eq!(
            entries,
            vec![
                InfoboxEntry::new("B", "2"),
                InfoboxEntry::new("A", "1"),
                InfoboxEntry::new("B", "3"),
            ]
        );
    }

    #[test]
    fn constructors_mint_distinct_ids() {
        let a = ContentBlock::paragraph("a");
        let b = ContentBlock::paragraph("a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn serde_shape_is_tagged_by_type() {
        let block = ContentBlock::Heading {
            id: BlockId::from("h1"),
            text: "Intro".to_string(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "heading", "id": "h1", "text": "Intro"})
        );

        let back: ContentBlock = serde_json::from_value(json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn accessors_match_variant() {
        let infobox = ContentBlock::infobox([InfoboxEntry::new("k", "v")]);
        assert_eq!(infobox.kind(), BlockKind::Infobox);
        assert_eq!(infobox.text(), None);
        assert_eq!(infobox.entries().map(<[_]>::len), Some(1));

        let heading = ContentBlock::heading("Intro");
        assert_eq!(heading.kind(), BlockKind::Heading);
        assert_eq!(heading.text(), Some("Intro"));
        assert!(heading.entries().is_none());
    }
}
