pub mod models;
pub mod preview;
pub mod serializer;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use models::*;
pub use preview::{InfoboxRenderer, render_preview};
pub use serializer::{blocks_to_markdown, markdown_to_blocks, markdown_to_blocks_with};
pub use store::{ArticleStore, JsonFileStore, MemoryStore, StoreError, recent_articles};
