//! Article and category persistence behind an explicitly passed handle.
//!
//! Callers receive an `ArticleStore` and never reach for global state.

pub mod json_file;
pub mod memory;

use std::path::PathBuf;

use crate::models::{Article, ArticleId, Category};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt store snapshot at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to encode store snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Key-value store of articles keyed by id.
pub trait ArticleStore {
    fn get(&self, id: &str) -> Result<Option<Article>, StoreError>;

    /// Insert or replace the article with the same id
    fn put(&mut self, article: Article) -> Result<(), StoreError>;

    /// Returns whether an article was removed
    fn delete(&mut self, id: &str) -> Result<bool, StoreError>;

    /// All articles, ordered by id
    fn list(&self) -> Result<Vec<Article>, StoreError>;

    fn contains(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.get(id)?.is_some())
    }

    /// All categories, in stored order
    fn categories(&self) -> Result<Vec<Category>, StoreError>;

    fn category(&self, id: &str) -> Result<Option<Category>, StoreError> {
        Ok(self.categories()?.into_iter().find(|c| c.id == id))
    }

    /// Replace the category with the same id in place, or append it
    fn put_category(&mut self, category: Category) -> Result<(), StoreError>;
}

/// Ids of every stored article
pub fn article_ids(store: &impl ArticleStore) -> Result<Vec<ArticleId>, StoreError> {
    Ok(store.list()?.into_iter().map(|a| a.id).collect())
}

/// Most recently modified articles first, at most `limit` of them
pub fn recent_articles(store: &impl ArticleStore, limit: usize) -> Result<Vec<Article>, StoreError> {
    let mut articles = store.list()?;
    articles.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
    articles.truncate(limit);
    Ok(articles)
}
