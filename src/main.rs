//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_metadata` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the record as indented JSON
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use page_metadata::initialization::{init_client, init_logger_with};
use page_metadata::{fetch_metadata_with, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    match fetch_metadata_with(&client, &config.url).await {
        Ok(metadata) => {
            let json =
                serde_json::to_string_pretty(&metadata).context("Failed to serialize metadata")?;
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
