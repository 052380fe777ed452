//! HTML rendering for the search and recipe pages.
//!
//! Templates are embedded at compile time and filled in one pass, so a
//! value that happens to contain a `{{PLACEHOLDER}}` is never expanded.
//! Upstream summary and instruction markup is inserted as-is; every
//! other interpolated value is escaped.

use crate::core::config::OptionsConfig;
use crate::core::session::SessionView;
use crate::core::types::{Recipe, RecipeDetail};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::json;
use std::collections::BTreeSet;

const SEARCH_TEMPLATE: &str = include_str!("../../templates/search.html");
const RECIPE_TEMPLATE: &str = include_str!("../../templates/recipe.html");
const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// View model for the search page
pub struct SearchPage<'a> {
    pub view: &'a SessionView,
    pub recipes: &'a [Recipe],
    pub error: Option<&'a str>,
    pub options: &'a OptionsConfig,
    pub summary_chars: usize,
}

/// Render the search form, results and any error message
pub fn render_search_page(page: &SearchPage<'_>) -> String {
    let criteria = &page.view.criteria;

    let error_html = page
        .error
        .map(|e| format!(r#"<p class="error">{}</p>"#, encode_text(e)))
        .unwrap_or_default();

    // Embedded in a <script> element; "</" must not close it early
    let state_json = json!({
        "ingredients": criteria.ingredients,
        "avoid": criteria.avoid,
        "diet": criteria.diet,
        "intolerances": criteria.intolerances,
        "recipes": page.recipes,
    })
    .to_string()
    .replace("</", "<\\/");

    let name = encode_double_quoted_attribute(&page.view.name);
    let ingredients_text = display_terms(&criteria.ingredients);
    let ingredients = encode_double_quoted_attribute(&ingredients_text);
    let avoid_text = display_terms(&criteria.avoid);
    let avoid = encode_double_quoted_attribute(&avoid_text);
    let diet_options = render_checkboxes("diet", &page.options.diets, &criteria.diet);
    let intolerance_options = render_checkboxes(
        "intolerances",
        &page.options.intolerances,
        &criteria.intolerances,
    );
    let results = render_results(page.recipes, page.summary_chars);

    fill(
        SEARCH_TEMPLATE,
        &[
            ("SEARCH_NAME", &*name),
            ("INGREDIENTS", &*ingredients),
            ("AVOID", &*avoid),
            ("DIET_OPTIONS", diet_options.as_str()),
            ("INTOLERANCE_OPTIONS", intolerance_options.as_str()),
            ("ERROR", error_html.as_str()),
            ("RESULTS", results.as_str()),
            ("STATE_JSON", state_json.as_str()),
        ],
    )
}

/// Render the detail page for one recipe
pub fn render_recipe_detail(detail: &RecipeDetail) -> String {
    let title = encode_text(&detail.title);
    let ingredients: String = detail
        .ingredients
        .iter()
        .map(|item| format!("<li>{}</li>", encode_text(item)))
        .collect();
    let source_url = encode_double_quoted_attribute(&detail.source_url);

    fill(
        RECIPE_TEMPLATE,
        &[
            ("TITLE", &*title),
            ("INGREDIENTS", ingredients.as_str()),
            ("SUMMARY", detail.summary.as_str()),
            ("INSTRUCTIONS", detail.instructions.as_str()),
            ("SOURCE_URL", &*source_url),
        ],
    )
}

/// Render a standalone error page
pub fn render_error_page(title: &str, message: &str) -> String {
    let title = encode_text(title);
    let message = encode_text(message);

    fill(ERROR_TEMPLATE, &[("TITLE", &*title), ("MESSAGE", &*message)])
}

/// Terms as the user would type them
fn display_terms(terms: &BTreeSet<String>) -> String {
    terms.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn render_results(recipes: &[Recipe], summary_chars: usize) -> String {
    if recipes.is_empty() {
        return String::new();
    }

    let items: String = recipes
        .iter()
        .map(|recipe| {
            format!(
                r#"<li class="recipe"><a href="/recipe/{}">{}</a><p>{}</p></li>"#,
                recipe.id,
                encode_text(&recipe.title),
                encode_text(&recipe.short_summary(summary_chars)),
            )
        })
        .collect();

    format!(r#"<section class="results"><h2>Recipes:</h2><ul>{items}</ul></section>"#)
}

/// Checkbox per option; selected values outside the option list are
/// kept so a loaded search round-trips through the form
fn render_checkboxes(field: &str, options: &[String], selected: &BTreeSet<String>) -> String {
    let extra = selected.iter().filter(|s| !options.contains(s));

    options
        .iter()
        .chain(extra)
        .map(|option| {
            let value = encode_double_quoted_attribute(option);
            let checked = if selected.contains(option) { " checked" } else { "" };
            format!(
                r#"<label><input type="checkbox" name="{field}" value="{value}"{checked}> {}</label>"#,
                encode_text(option)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

/// Replace `{{KEY}}` placeholders in a single pass; unknown keys stay
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };

        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
