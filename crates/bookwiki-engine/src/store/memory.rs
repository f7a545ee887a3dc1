use std::collections::BTreeMap;

use crate::models::{Article, ArticleId, Category};

use super::{ArticleStore, StoreError};

/// In-memory store.
///
/// Uses BTreeMap so `list` comes back sorted by id.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    articles: BTreeMap<ArticleId, Article>,
    categories: Vec<Category>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        Self {
            articles: articles.into_iter().map(|a| (a.id.clone(), a)).collect(),
            categories: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub(crate) fn articles(&self) -> impl Iterator<Item = &Article> {
        self.articles.values()
    }

    pub(crate) fn category_list(&self) -> &[Category] {
        &self.categories
    }
}

impl ArticleStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<Article>, StoreError> {
        Ok(self.articles.get(id).cloned())
    }

    fn put(&mut self, article: Article) -> Result<(), StoreError> {
        self.articles.insert(article.id.clone(), article);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        Ok(self.articles.remove(id).is_some())
    }

    fn list(&self) -> Result<Vec<Article>, StoreError> {
        Ok(self.articles.values().cloned().collect())
    }

    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.categories.clone())
    }

    fn put_category(&mut self, category: Category) -> Result<(), StoreError> {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
        Ok(())
    }
}
