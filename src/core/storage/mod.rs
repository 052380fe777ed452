//! Saved-search persistence.
//!
//! Callers go through the [`SavedSearchRepository`] trait so the
//! backing store can change without touching handlers.
//!
//! # Architecture
//!
//! - **SavedSearchRepository**: async load/save contract
//! - **JsonFileStore**: whole-file JSON implementation
//!
//! # File Layout
//!
//! ```text
//! saved_searches.json
//! {
//!   "Weeknight": {
//!     "name": "Weeknight",
//!     "ingredients": ["chicken", "rice"],
//!     "avoid": ["pork"],
//!     "diet": [],
//!     "intolerances": [],
//!     "recipes": [{"id": 1, "title": "...", "summary": "..."}],
//!     "saved_at": "2026-10-14T18:30:00Z"
//!   }
//! }
//! ```

mod json_file;
mod repository;

pub use json_file::JsonFileStore;
pub use repository::{resolve_name, SavedSearchRepository, SavedSearchStore};
