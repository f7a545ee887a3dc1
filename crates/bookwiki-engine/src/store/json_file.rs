use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::{Article, Category};

use super::{ArticleStore, MemoryStore, StoreError};

/// On-disk shape of the store
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    categories: Vec<Category>,
}

/// Store kept as a single JSON snapshot file.
///
/// The whole snapshot is loaded on open and rewritten on every change.
/// Changes are staged on a copy and only adopted once the file is written.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the snapshot at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let inner = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let snapshot: Snapshot =
                serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                    path: path.clone(),
                    source,
                })?;
            MemoryStore::from_articles(snapshot.articles).with_categories(snapshot.categories)
        } else {
            log::info!("no store at {}, starting empty", path.display());
            MemoryStore::new()
        };
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the snapshot is written to before being renamed into place
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write `staged` to disk, then adopt it as the current state
    fn commit(&mut self, staged: MemoryStore) -> Result<(), StoreError> {
        self.write_snapshot(&staged)?;
        self.inner = staged;
        Ok(())
    }

    fn write_snapshot(&self, store: &MemoryStore) -> Result<(), StoreError> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let snapshot = Snapshot {
            articles: store.articles().cloned().collect(),
            categories: store.category_list().to_vec(),
        };
        let content = serde_json::to_string_pretty(&snapshot).map_err(StoreError::Encode)?;

        let temp = self.temp_path();
        if let Err(e) = fs::write(&temp, content).and_then(|()| fs::rename(&temp, &self.path)) {
            if temp.is_file() {
                let _ = fs::remove_file(&temp);
            }
            return Err(e.into());
        }
        log::info!(
            "wrote {} article(s) and {} categories to {}",
            snapshot.articles.len(),
            snapshot.categories.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl ArticleStore for JsonFileStore {
    fn get(&self, id: &str) -> Result<Option<Article>, StoreError> {
        self.inner.get(id)
    }

    fn put(&mut self, article: Article) -> Result<(), StoreError> {
        let mut staged = self.inner.clone();
        staged.put(article)?;
        self.commit(staged)
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut staged = self.inner.clone();
        if !staged.delete(id)? {
            return Ok(false);
        }
        self.commit(staged)?;
        Ok(true)
    }

    fn list(&self) -> Result<Vec<Article>, StoreError> {
        self.inner.list()
    }

    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.inner.categories()
    }

    fn put_category(&mut self, category: Category) -> Result<(), StoreError> {
        let mut staged = self.inner.clone();
        staged.put_category(category)?;
        self.commit(staged)
    }
}
