//! sitewire CLI entry point.
//!
//! Binary name: `sitewire`
//!
//! Parses CLI arguments, loads the site configuration, then dispatches to
//! the appropriate command handler.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,sitewire=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let data_dir = sitewire_infra::config::data_dir();
    let config = sitewire_infra::config::load_site_config(&data_dir).await;

    match cli.command {
        Commands::Hydrate => cli::hydrate::run(&config, cli.json).await?,
        Commands::Chat => cli::chat::run(&config).await?,
        Commands::Theme { action } => cli::theme::run(&data_dir, action, cli.json)?,
    }

    Ok(())
}
