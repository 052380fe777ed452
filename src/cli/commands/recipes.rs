//! Recipe commands - search the upstream API and show one recipe
//!
//! - `search-recipes` (HTTP: POST /)
//! - `get-recipe` (HTTP: GET /recipe/:id)

use crate::cli::output::{colors, format_terms, print_header, print_output};
use crate::cli::OutputFormat;
use crate::core::error::RecipeError;
use crate::core::services::Services;
use crate::core::types::{strip_tags, SearchCriteria};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search-recipes command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Comma-separated ingredients to include
    #[arg(long, short = 'i')]
    pub ingredients: String,

    /// Comma-separated terms; recipes whose title contains one are dropped
    #[arg(long, short = 'a', default_value = "")]
    pub avoid: String,

    /// Diet filter (repeatable or comma-separated)
    #[arg(long, short = 'd', value_delimiter = ',')]
    pub diet: Vec<String>,

    /// Intolerance filter (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub intolerances: Vec<String>,
}

/// Arguments for the get-recipe command
#[derive(Args, Debug)]
pub struct GetRecipeArgs {
    /// Upstream recipe ID
    pub id: i64,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub id: i64,
    pub title: String,
    pub summary: String,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub criteria: SearchCriteria,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search-recipes command
pub async fn execute_search(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let criteria =
        SearchCriteria::from_text(&args.ingredients, &args.avoid, args.diet, args.intolerances);

    if criteria.ingredients.is_empty() {
        return Err(RecipeError::InvalidInput("--ingredients must name at least one".into())
            .into());
    }

    let recipes = services.gateway.search(&criteria).await?;
    let summary_chars = services.config.display.summary_chars;

    let output = SearchResponseOutput {
        criteria,
        total_results: recipes.len(),
        results: recipes
            .iter()
            .map(|r| SearchResultItem {
                id: r.id,
                title: r.title.clone(),
                summary: r.short_summary(summary_chars),
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!(
                    "No recipes found for {}",
                    colors::label(&format_terms(&output.criteria.ingredients))
                );
            } else {
                println!(
                    "Found {} recipe(s):\n",
                    colors::number(&output.total_results.to_string())
                );

                for result in &output.results {
                    println!(
                        "[{}] {}",
                        colors::recipe_id(&result.id.to_string()),
                        colors::label(&result.title)
                    );
                    if !result.summary.is_empty() {
                        println!("    {}", colors::dim(&result.summary));
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => print_output(&output, format),
    }

    Ok(())
}

/// Execute the get-recipe command
pub async fn execute_get(
    args: GetRecipeArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let detail = services.gateway.recipe_detail(args.id).await?;

    match format {
        OutputFormat::Human => {
            print_header(&detail.title);
            println!(
                "  {} {}",
                colors::label("ID:"),
                colors::recipe_id(&detail.id.to_string())
            );
            if !detail.source_url.is_empty() {
                println!("  {} {}", colors::label("Source:"), colors::url(&detail.source_url));
            }

            println!("\n{}", colors::label("Ingredients:"));
            for item in &detail.ingredients {
                println!("  - {item}");
            }

            println!("\n{}", colors::label("Summary:"));
            println!("  {}", strip_tags(&detail.summary));

            println!("\n{}", colors::label("Instructions:"));
            let instructions = strip_tags(&detail.instructions);
            if instructions.is_empty() {
                println!("  {}", colors::dim("(none provided)"));
            } else {
                println!("  {instructions}");
            }
        }
        OutputFormat::Json => print_output(&detail, format),
    }

    Ok(())
}
