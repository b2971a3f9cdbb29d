//! Command-line interface for sagefeed.
//!
//! Provides commands for running an update pass, inspecting the store,
//! and showing the resolved configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::UpdaterConfig;
use crate::store::ContentStore;
use crate::updater;

/// sagefeed - Incremental content-feed updater
#[derive(Parser, Debug)]
#[command(name = "sagefeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one update pass over all sources
    Update {
        /// Store file override
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// Show store totals and the last update time
    Status,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Update { data_file } => {
                let mut config = UpdaterConfig::load()?;
                if let Some(path) = data_file {
                    config.data_file = path;
                }

                let report = updater::run_update(&config).await?;

                if report.added > 0 {
                    println!("Update complete. Added {} new item(s)", report.added);
                } else {
                    println!("No new content to add today");
                }
                println!(
                    "Total content: {} quotes, {} videos, {} articles",
                    report.quotes, report.videos, report.articles
                );
                Ok(())
            }

            Commands::Status => {
                let config = UpdaterConfig::load()?;
                let store = ContentStore::load(&config.data_file).await;

                println!("Store: {}", config.data_file.display());
                println!("  quotes:   {}", store.quotes.len());
                println!("  videos:   {}", store.videos.len());
                println!("  articles: {}", store.articles.len());
                match store.last_updated {
                    Some(ts) => println!("  last updated: {}", ts.to_rfc3339()),
                    None => println!("  last updated: never"),
                }
                Ok(())
            }

            Commands::Config => {
                let config = UpdaterConfig::load()?;

                println!("home:        {}", config.home.display());
                println!("data file:   {}", config.data_file.display());
                println!("channel:     {}", config.channel_id);
                println!(
                    "api key:     {}",
                    if config.api_key.is_some() { "set" } else { "not set" }
                );
                println!("timeout:     {}s", config.request_timeout.as_secs());
                match &config.config_file {
                    Some(path) => println!("config file: {}", path.display()),
                    None => println!("config file: none (using defaults)"),
                }
                for (name, url) in &config.trusted_sources {
                    println!("source {}: {}", name, url);
                }
                Ok(())
            }
        }
    }
}
