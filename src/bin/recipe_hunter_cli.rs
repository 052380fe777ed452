//! Recipe Hunter CLI - command-line access to recipe search
//!
//! Runs searches against the configured recipe API and reads the saved
//! searches written by the web UI.
//!
//! # Examples
//!
//! ```bash
//! # Search by ingredients, dropping titles that mention pork
//! recipe-hunter search-recipes --ingredients chicken,rice --avoid pork
//!
//! # Show a recipe
//! recipe-hunter get-recipe 716429
//!
//! # List saved searches as JSON
//! recipe-hunter --format json list-saved-searches
//!
//! # Show configuration
//! recipe-hunter show-config
//! ```

use clap::Parser;
use recipe_hunter::cli::output::print_error;
use recipe_hunter::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
