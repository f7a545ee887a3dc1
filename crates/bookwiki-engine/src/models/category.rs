use serde::{Deserialize, Serialize};

use super::Article;

/// Top-level grouping of articles, e.g. characters or places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Icon name understood by the front end
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<SubCategory>,
}

/// Tag-driven slice of a category.
///
/// An article falls into a subcategory when it carries any of `filter_tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub filter_tags: Vec<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            description: None,
            subcategories: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_subcategory(mut self, subcategory: SubCategory) -> Self {
        self.subcategories.push(subcategory);
        self
    }

    /// Articles filed under this category
    pub fn articles_in<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles
            .iter()
            .filter(|a| a.category_id == self.id)
            .collect()
    }
}

impl SubCategory {
    pub fn new<T: Into<String>>(
        id: impl Into<String>,
        name: impl Into<String>,
        filter_tags: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            filter_tags: filter_tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.filter_tags.iter().any(|tag| article.tags.contains(tag))
    }
}

/// First subcategory of `category` sharing a tag with `article`
pub fn find_subcategory<'c>(article: &Article, category: &'c Category) -> Option<&'c SubCategory> {
    category.subcategories.iter().find(|sub| sub.matches(article))
}
