mod manifest;
mod update;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "airrisk-cli")]
#[command(about = "Builds the SafeAirspace aviation-risk KML map")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape the advisory feed and write the warnings KML.
    Update {
        /// Write the document here instead of `{AIRRISK_OUTPUT_DIR}/safeairspace-warnings.kml`.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Do not fetch per-country NOTAM pages.
        #[arg(long)]
        skip_notices: bool,
    },
    /// List generated KML files in a JSON manifest.
    Manifest,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = airrisk_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Update {
            output,
            skip_notices,
        } => {
            let options = update::UpdateOptions {
                output: output.unwrap_or_else(|| config.output_file()),
                skip_notices,
            };
            update::run_update(&config, &options).await?;
        }
        Commands::Manifest => manifest::run_manifest(&config)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
