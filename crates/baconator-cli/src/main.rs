//! Baconator CLI - Runs the actor/movie graph service

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;

use commands::{config as config_cmd, serve};
use config::Config;

#[derive(Parser)]
#[command(name = "baconator")]
#[command(author, version, about = "Actor/movie graph service with Bacon-number search")]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "BACONATOR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::default_config_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Manage configuration
    Config(config_cmd::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    let config_path = cli.config_path();
    tracing::debug!("Using config file: {}", config_path.display());

    match &cli.command {
        Commands::Serve(args) => {
            let config = Config::load(&config_path)?;
            serve::run(args, config).await?
        }
        Commands::Config(args) => config_cmd::run(args, &config_path)?,
    }

    Ok(())
}
