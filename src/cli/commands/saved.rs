//! Saved search commands - list and show saved searches
//!
//! These commands read the same JSON store the web UI writes:
//! - `list-saved-searches` (HTTP: GET /get_saved_searches)
//! - `get-saved-search` (HTTP: GET /load_saved_search/:name)

use crate::cli::output::{colors, format_relative_time, format_terms, print_output};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SavedSearch;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for list-saved-searches
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Arguments for get-saved-search
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Name the search was saved under
    pub name: String,
}

/// Saved search list item
#[derive(Debug, Serialize)]
pub struct SavedSearchListItem {
    pub name: String,
    pub ingredients: Vec<String>,
    pub recipes: usize,
    pub saved_at: DateTime<Utc>,
}

/// Saved search list response
#[derive(Debug, Serialize)]
pub struct SavedSearchListResponse {
    pub searches: Vec<SavedSearchListItem>,
    pub count: usize,
}

/// Execute list-saved-searches
pub async fn execute_list(
    _args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = services.store.load_all().await?;

    let searches: Vec<SavedSearchListItem> = store
        .into_values()
        .map(|entry| SavedSearchListItem {
            name: entry.name,
            ingredients: entry.criteria.ingredients.into_iter().collect(),
            recipes: entry.recipes.len(),
            saved_at: entry.saved_at,
        })
        .collect();

    let response = SavedSearchListResponse {
        count: searches.len(),
        searches,
    };

    match format {
        OutputFormat::Human => {
            if response.searches.is_empty() {
                println!("No saved searches.");
                println!("Save one from the search page to see it here.");
            } else {
                println!(
                    "Saved searches ({}):\n",
                    colors::number(&response.count.to_string())
                );

                for item in &response.searches {
                    println!(
                        "  {} {}",
                        colors::search_name(&item.name),
                        colors::dim(&format!(
                            "({} recipes, saved {})",
                            item.recipes,
                            format_relative_time(&item.saved_at)
                        ))
                    );
                    println!("    ingredients: {}", format_terms(&item.ingredients));
                }
            }
        }
        OutputFormat::Json => print_output(&response, format),
    }

    Ok(())
}

/// Execute get-saved-search
pub async fn execute_get(
    args: GetArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let entry = services.store.load_one(&args.name).await?;

    match format {
        OutputFormat::Human => print_saved_search(&entry),
        OutputFormat::Json => print_output(&entry, format),
    }

    Ok(())
}

fn print_saved_search(entry: &SavedSearch) {
    let criteria = &entry.criteria;

    println!("{}", colors::search_name(&entry.name));
    println!(
        "  {} {}",
        colors::label("Saved:"),
        entry.saved_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  {} {}",
        colors::label("Ingredients:"),
        format_terms(&criteria.ingredients)
    );
    println!("  {} {}", colors::label("Avoid:"), format_terms(&criteria.avoid));
    println!("  {} {}", colors::label("Diet:"), format_terms(&criteria.diet));
    println!(
        "  {} {}",
        colors::label("Intolerances:"),
        format_terms(&criteria.intolerances)
    );

    if entry.recipes.is_empty() {
        println!("  {}", colors::dim("(no recipes saved)"));
        return;
    }

    println!("\n  {}", colors::label("Recipes:"));
    for recipe in &entry.recipes {
        println!(
            "    [{}] {}",
            colors::recipe_id(&recipe.id.to_string()),
            recipe.title
        );
    }
}
