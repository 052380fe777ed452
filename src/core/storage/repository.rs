//! Repository contract for saved searches.

use crate::core::error::Result;
use crate::core::types::{SavedRecipe, SavedSearch, SearchCriteria};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// All saved searches keyed by name
pub type SavedSearchStore = BTreeMap<String, SavedSearch>;

/// Format of the timestamp in generated search names
const GENERATED_NAME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Persistence for named searches
///
/// Names are unique keys: saving under an existing name replaces the
/// entry (last write wins). There is no delete or rename.
#[async_trait]
pub trait SavedSearchRepository: Send + Sync {
    /// Insert or overwrite the entry at `name`
    ///
    /// A blank name is replaced by `New Search <timestamp>`, suffixed
    /// when that name is already taken. Returns the entry as stored,
    /// including its final name.
    async fn save(
        &self,
        name: &str,
        criteria: SearchCriteria,
        recipes: Vec<SavedRecipe>,
    ) -> Result<SavedSearch>;

    /// Every saved search, for listing
    async fn load_all(&self) -> Result<SavedSearchStore>;

    /// One saved search
    ///
    /// # Errors
    ///
    /// - `NotFound`: nothing saved under `name`
    async fn load_one(&self, name: &str) -> Result<SavedSearch>;
}

/// Final storage name for a save request
///
/// A given name is used as-is (trimmed) and may replace an existing
/// entry. A generated name has one-second resolution, so a second
/// blank-name save within the same second gets ` (2)`, ` (3)`, ...
/// instead of overwriting the first.
pub fn resolve_name(name: &str, now: DateTime<Utc>, existing: &SavedSearchStore) -> String {
    let name = name.trim();
    if !name.is_empty() {
        return name.to_string();
    }

    let base = format!("New Search {}", now.format(GENERATED_NAME_FORMAT));
    if !existing.contains_key(&base) {
        return base;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{base} ({n})");
        if !existing.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
