//! Query construction and client-side filtering for recipe searches.

use crate::core::types::{join_terms, Recipe, SearchCriteria};
use std::collections::BTreeSet;

/// Build complexSearch query pairs from the non-empty criteria fields
///
/// Empty fields are omitted entirely. The API key is added by the
/// client, not here. Avoid terms are never sent upstream; they are
/// applied by [`exclude_avoided`] after the response arrives.
pub fn build_search_params(
    criteria: &SearchCriteria,
    page_size: usize,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(5);

    let fields = [
        ("includeIngredients", &criteria.ingredients),
        ("diet", &criteria.diet),
        ("intolerances", &criteria.intolerances),
    ];
    for (key, terms) in fields {
        if !terms.is_empty() {
            params.push((key, join_terms(terms)));
        }
    }

    params.push(("number", page_size.to_string()));
    params.push(("addRecipeInformation", "true".to_string()));
    params
}

/// Drop every recipe whose title contains an avoid term
///
/// Matching is a case-insensitive substring test on the title only,
/// not on the ingredient list. Blank terms are ignored.
pub fn exclude_avoided(recipes: Vec<Recipe>, avoid: &BTreeSet<String>) -> Vec<Recipe> {
    let terms: Vec<String> = avoid
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        return recipes;
    }

    recipes
        .into_iter()
        .filter(|recipe| {
            let title = recipe.title.to_lowercase();
            !terms.iter().any(|term| title.contains(term.as_str()))
        })
        .collect()
}
