//! Domain data structures shared by the gateway, the store and the
//! adapters.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("static regex"));

/// Filters a user submits for one search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default, deserialize_with = "terms")]
    pub ingredients: BTreeSet<String>,
    #[serde(default, deserialize_with = "terms")]
    pub avoid: BTreeSet<String>,
    #[serde(default, deserialize_with = "terms")]
    pub diet: BTreeSet<String>,
    #[serde(default, deserialize_with = "terms")]
    pub intolerances: BTreeSet<String>,
}

impl SearchCriteria {
    /// Build criteria from comma-separated ingredient and avoid text plus
    /// the selected diet and intolerance options
    pub fn from_text<I, J>(ingredients: &str, avoid: &str, diet: I, intolerances: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        Self {
            ingredients: parse_terms(ingredients),
            avoid: parse_terms(avoid),
            diet: clean_terms(diet),
            intolerances: clean_terms(intolerances),
        }
    }

    /// True when no field carries a term
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
            && self.avoid.is_empty()
            && self.diet.is_empty()
            && self.intolerances.is_empty()
    }

    /// Comma-joined ingredients, for repopulating the text input
    pub fn ingredients_text(&self) -> String {
        join_terms(&self.ingredients)
    }

    /// Comma-joined avoid terms, for repopulating the text input
    pub fn avoid_text(&self) -> String {
        join_terms(&self.avoid)
    }
}

/// Split comma-separated text into a set of trimmed, non-empty terms
pub fn parse_terms(text: &str) -> BTreeSet<String> {
    clean_terms(text.split(',').map(str::to_string))
}

fn clean_terms<I: IntoIterator<Item = String>>(terms: I) -> BTreeSet<String> {
    terms
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Comma-join a term set (sorted, since sets are ordered)
pub fn join_terms(terms: &BTreeSet<String>) -> String {
    terms.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// Accepts either a JSON list of strings or one comma-separated string
fn terms<'de, D>(deserializer: D) -> std::result::Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Terms {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Option::<Terms>::deserialize(deserializer)? {
        Some(Terms::List(list)) => clean_terms(list),
        Some(Terms::Text(text)) => parse_terms(&text),
        None => BTreeSet::new(),
    })
}

/// Recipe summary returned by a search (a candidate)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

impl Recipe {
    /// Summary with markup stripped, cut to at most `max_chars`
    /// characters
    pub fn short_summary(&self, max_chars: usize) -> String {
        let plain = strip_tags(&self.summary);
        let plain = plain.as_str();

        if plain.chars().count() <= max_chars {
            return plain.to_string();
        }

        let cut: String = plain.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Remove markup tags and surrounding whitespace
pub fn strip_tags(markup: &str) -> String {
    TAG_RE.replace_all(markup, "").trim().to_string()
}

/// Expanded view of a single recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    /// Ingredient display strings in upstream order
    pub ingredients: Vec<String>,
    /// May contain markup
    pub summary: String,
    /// May contain markup
    pub instructions: String,
    pub source_url: String,
}

/// Recipe snapshot stored alongside a saved search
pub type SavedRecipe = Recipe;

/// A named search with the recipes shown when it was saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub name: String,
    #[serde(flatten)]
    pub criteria: SearchCriteria,
    #[serde(default)]
    pub recipes: Vec<SavedRecipe>,
    pub saved_at: DateTime<Utc>,
}

// HTTP request/response payloads

/// Body of `POST /save_search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveSearchRequest {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub criteria: SearchCriteria,
    #[serde(default)]
    pub recipes: Vec<SavedRecipe>,
}

/// Response of `POST /save_search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSearchResponse {
    pub status: String,
    pub name: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_terms_trims_and_drops_empty() {
        assert_eq!(parse_terms(" chicken, rice ,,  "), set(&["chicken", "rice"]));
        assert!(parse_terms("").is_empty());
        assert!(parse_terms(" , ").is_empty());
    }

    #[test]
    fn test_from_text_builds_sets() {
        let criteria = SearchCriteria::from_text(
            "rice,chicken,rice",
            "pork",
            vec!["vegan".to_string(), " ".to_string()],
            Vec::new(),
        );
        assert_eq!(criteria.ingredients, set(&["chicken", "rice"]));
        assert_eq!(criteria.avoid, set(&["pork"]));
        assert_eq!(criteria.diet, set(&["vegan"]));
        assert!(criteria.intolerances.is_empty());
        assert_eq!(criteria.ingredients_text(), "chicken,rice");
    }

    #[test]
    fn test_criteria_accepts_list_or_text() {
        let criteria: SearchCriteria = serde_json::from_str(
            r#"{"ingredients": ["chicken", "rice"], "avoid": "pork, peanuts", "diet": null}"#,
        )
        .unwrap();
        assert_eq!(criteria.ingredients, set(&["chicken", "rice"]));
        assert_eq!(criteria.avoid, set(&["peanuts", "pork"]));
        assert!(criteria.diet.is_empty());
        assert!(criteria.intolerances.is_empty());
    }

    #[test]
    fn test_short_summary_strips_markup() {
        let recipe = Recipe {
            id: 1,
            title: "Soup".to_string(),
            summary: "A <b>warm</b> soup.".to_string(),
        };
        assert_eq!(recipe.short_summary(100), "A warm soup.");
    }

    #[test]
    fn test_short_summary_truncates_on_char_boundary() {
        let recipe = Recipe {
            id: 1,
            title: "Crème".to_string(),
            summary: "crème brûlée".to_string(),
        };
        assert_eq!(recipe.short_summary(5), "crème...");
    }

    #[test]
    fn test_save_request_flattens_criteria() {
        let req: SaveSearchRequest = serde_json::from_str(
            r#"{"name": "Dinner", "ingredients": ["beef"], "recipes": [{"id": 7, "title": "Stew", "summary": "s"}]}"#,
        )
        .unwrap();
        assert_eq!(req.name, "Dinner");
        assert_eq!(req.criteria.ingredients, set(&["beef"]));
        assert_eq!(req.recipes.len(), 1);
        assert_eq!(req.recipes[0].id, 7);
    }
}
