//! CLI adapter for Recipe Hunter
//!
//! Runs the same searches and saved-search lookups as the web UI from
//! the command line. This module is parallel to `http/` - both depend
//! on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! |  (axum adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Recipe Hunter - find recipes by ingredient
///
/// Search a Spoonacular-compatible recipe API by ingredients, diets and
/// intolerances, and inspect searches saved from the web UI.
#[derive(Parser, Debug)]
#[command(name = "recipe-hunter")]
#[command(version)]
#[command(about = "Ingredient-driven recipe search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search recipes by ingredients
    #[command(name = "search-recipes")]
    SearchRecipes(commands::SearchArgs),

    /// Show ingredients, summary and instructions for one recipe
    #[command(name = "get-recipe")]
    GetRecipe(commands::GetRecipeArgs),

    /// List all saved searches
    #[command(name = "list-saved-searches")]
    ListSavedSearches(commands::ListArgs),

    /// Show one saved search with its recipe snapshot
    #[command(name = "get-saved-search")]
    GetSavedSearch(commands::GetArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),
}

impl Commands {
    /// True for commands that call the upstream recipe API
    fn needs_upstream(&self) -> bool {
        matches!(self, Self::SearchRecipes(_) | Self::GetRecipe(_))
    }
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::credentials::Credentials;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;

    // Handle show-config early (doesn't need services)
    if let Commands::ShowConfig(args) = cli.command {
        return commands::config::execute(args, &config, &xdg, cli.format).await;
    }

    // Only upstream commands need the API key; the session secret is
    // a server concern
    let api_key = if cli.command.needs_upstream() {
        Credentials::load_api_key(&config.upstream.credentials_file)?
    } else {
        String::new()
    };

    // Create services
    let services = Arc::new(Services::new(config, &api_key)?);

    // Execute command
    match cli.command {
        Commands::SearchRecipes(args) => {
            commands::recipes::execute_search(args, &services, cli.format).await
        }
        Commands::GetRecipe(args) => {
            commands::recipes::execute_get(args, &services, cli.format).await
        }
        Commands::ListSavedSearches(args) => {
            commands::saved::execute_list(args, &services, cli.format).await
        }
        Commands::GetSavedSearch(args) => {
            commands::saved::execute_get(args, &services, cli.format).await
        }
        Commands::ShowConfig(_) => unreachable!(), // Handled above
    }
}
