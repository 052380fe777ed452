//! Single-file JSON store.
//!
//! Every operation reads the whole file; every save rewrites it. Writes
//! land in a sibling `.tmp` file first and are renamed into place, so a
//! reader never sees a half-written store.

use crate::core::error::{Result, RecipeError};
use crate::core::storage::repository::{resolve_name, SavedSearchRepository, SavedSearchStore};
use crate::core::types::{SavedRecipe, SavedSearch, SearchCriteria};
use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// Saved searches kept in one JSON file
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write within this process only
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "saved_searches.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_store(&self) -> Result<SavedSearchStore> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SavedSearchStore::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(SavedSearchStore::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            RecipeError::StorageError(format!(
                "Saved searches file {} is corrupt: {e}",
                self.path.display()
            ))
        })
    }

    async fn write_store(&self, store: &SavedSearchStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(store)?;
        let temp = self.temp_path();
        fs::write(&temp, json).await?;
        fs::rename(&temp, &self.path).await?;

        Ok(())
    }
}

#[async_trait]
impl SavedSearchRepository for JsonFileStore {
    async fn save(
        &self,
        name: &str,
        criteria: SearchCriteria,
        recipes: Vec<SavedRecipe>,
    ) -> Result<SavedSearch> {
        let _guard = self.write_lock.lock().await;
        let mut store = self.read_store().await?;

        let now = Utc::now();
        let entry = SavedSearch {
            name: resolve_name(name, now, &store),
            criteria,
            recipes,
            saved_at: now,
        };
        let replaced = store.insert(entry.name.clone(), entry.clone()).is_some();
        self.write_store(&store).await?;

        tracing::info!(
            name = %entry.name,
            recipes = entry.recipes.len(),
            replaced = replaced,
            "Saved search"
        );

        Ok(entry)
    }

    async fn load_all(&self) -> Result<SavedSearchStore> {
        self.read_store().await
    }

    async fn load_one(&self, name: &str) -> Result<SavedSearch> {
        self.read_store()
            .await?
            .remove(name)
            .ok_or_else(|| RecipeError::NotFound(format!("Saved search '{name}'")))
    }
}
