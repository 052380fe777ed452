//! Upstream payload shapes.
//!
//! Only the fields the gateway reads are declared; anything else in
//! the response is ignored. A missing required field fails
//! deserialization and surfaces as a remote service error.

use crate::core::types::{Recipe, RecipeDetail};
use serde::Deserialize;

/// `GET /recipes/complexSearch` response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ComplexSearchResponse {
    pub results: Vec<SearchResult>,
}

/// One complexSearch hit (with `addRecipeInformation=true`)
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResult {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
}

impl From<SearchResult> for Recipe {
    fn from(r: SearchResult) -> Self {
        Self {
            id: r.id,
            title: r.title,
            summary: r.summary.unwrap_or_default(),
        }
    }
}

/// `GET /recipes/{id}/information` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecipeInformation {
    pub id: i64,
    pub title: String,
    pub extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(default)]
    pub instructions: Option<String>,
    pub source_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExtendedIngredient {
    pub original: String,
}

/// `GET /recipes/{id}/summary` response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RecipeSummary {
    pub summary: String,
}

impl RecipeInformation {
    /// Combine with the separately fetched summary
    pub fn into_detail(self, summary: RecipeSummary) -> RecipeDetail {
        RecipeDetail {
            id: self.id,
            title: self.title,
            ingredients: self
                .extended_ingredients
                .into_iter()
                .map(|i| i.original)
                .collect(),
            summary: summary.summary,
            instructions: self.instructions.unwrap_or_default(),
            source_url: self.source_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_information_into_detail() {
        let info: RecipeInformation = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "Chicken and Rice Bowl",
                "extendedIngredients": [{"original": "1 cup rice"}, {"original": "2 chicken thighs"}],
                "instructions": null,
                "sourceUrl": "https://example.com/bowl",
                "servings": 2
            }"#,
        )
        .unwrap();
        let summary = RecipeSummary {
            summary: "A <b>quick</b> bowl.".to_string(),
        };

        let detail = info.into_detail(summary);
        assert_eq!(detail.id, 42);
        assert_eq!(detail.ingredients, vec!["1 cup rice", "2 chicken thighs"]);
        assert_eq!(detail.instructions, "");
        assert_eq!(detail.summary, "A <b>quick</b> bowl.");
        assert_eq!(detail.source_url, "https://example.com/bowl");
    }

    #[test]
    fn test_information_missing_field_fails() {
        let result: Result<RecipeInformation, _> =
            serde_json::from_str(r#"{"id": 1, "title": "No ingredients", "sourceUrl": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_result_null_summary() {
        let response: ComplexSearchResponse = serde_json::from_str(
            r#"{"results": [{"id": 1, "title": "Soup", "summary": null}], "totalResults": 1}"#,
        )
        .unwrap();
        let recipe = Recipe::from(response.results[0].clone());
        assert_eq!(recipe.summary, "");
    }
}
