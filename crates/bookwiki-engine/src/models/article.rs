use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ContentBlock;
use crate::serializer::{blocks_to_markdown, markdown_to_blocks};

/// Identifier of an article in the store
pub type ArticleId = String;

/// A wiki article: metadata plus its ordered content blocks.
///
/// The article is the sole owner of its blocks. Saves replace the block list
/// wholesale; there are no partial block updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub category_id: String,
    pub blocks: Vec<ContentBlock>,
    /// Free-form tags; duplicates are not removed at this layer
    #[serde(default)]
    pub tags: Vec<String>,
    /// Milliseconds since the Unix epoch
    pub last_modified: i64,
}

impl Article {
    pub const INTRO_HEADING: &'static str = "Introduction";
    pub const INTRO_TEXT: &'static str = "Text...";

    /// Create a fresh article seeded with an introduction heading and a placeholder paragraph
    pub fn new(title: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            category_id: category_id.into(),
            blocks: vec![
                ContentBlock::heading(Self::INTRO_HEADING),
                ContentBlock::paragraph(Self::INTRO_TEXT),
            ],
            tags: Vec::new(),
            last_modified: Utc::now().timestamp_millis(),
        }
    }

    /// Markdown text for the editor (load direction)
    pub fn to_markdown(&self) -> String {
        blocks_to_markdown(&self.blocks)
    }

    /// Replace the blocks with the ones parsed from `markdown` (save direction).
    ///
    /// Every block gets a fresh id.
    pub fn apply_markdown(&mut self, markdown: &str, at: DateTime<Utc>) {
        self.blocks = markdown_to_blocks(markdown);
        self.touch(at);
    }

    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.last_modified = at.timestamp_millis();
    }

    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.last_modified)
    }
}
