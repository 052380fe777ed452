//! Config command - show current configuration
//!
//! Secrets are never part of `Config`; only the credentials file path
//! is shown.

use crate::cli::output::{colors, print_output};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also list the diet and intolerance options
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    pub data_dir: String,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    xdg: &XdgDirs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        data_dir: xdg.data_dir.to_string_lossy().into_owned(),
        config,
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration:"));
            println!("  config_file: {}", response.config_file);
            println!("  data_dir: {}", response.data_dir);
            println!("  server:");
            println!("    host: {}", config.server.host);
            println!("    port: {}", config.server.port);
            println!(
                "    request_timeout_sec: {}",
                config.server.request_timeout_sec
            );
            println!("  upstream:");
            println!("    base_url: {}", config.upstream.base_url);
            println!("    timeout_sec: {}", config.upstream.timeout_sec);
            println!("    page_size: {}", config.upstream.page_size);
            println!(
                "    credentials_file: {}",
                config.upstream.credentials_file.display()
            );
            println!("  storage:");
            println!(
                "    saved_searches_file: {}",
                config.storage.saved_searches_file.display()
            );
            println!("  display:");
            println!("    summary_chars: {}", config.display.summary_chars);
            if args.all {
                println!("  options:");
                println!("    diets: {:?}", config.options.diets);
                println!("    intolerances: {:?}", config.options.intolerances);
            }
        }
        OutputFormat::Json => print_output(&response, format),
    }

    Ok(())
}
