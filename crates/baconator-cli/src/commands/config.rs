//! Config command for managing the configuration file

use std::path::Path;

use clap::{Args, Subcommand};

use crate::config::Config;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print one value
    Get {
        /// Config key name
        key: String,
    },
    /// Validate and store one value
    Set {
        /// Config key name
        key: String,
        /// New value
        value: String,
    },
    /// Print every key with its effective value
    List,
    /// Print the config file location
    Path,
    /// Write a config file populated with defaults
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs, path: &Path) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommands::Get { key } => {
            let value = Config::load(path)?
                .get(key)
                .ok_or_else(|| Config::unknown_key(key))?;
            println!("{}", value);
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(path)?;
            config.set(key, value)?;
            config.save(path)?;
            tracing::info!("Updated {} in {}", key, path.display());
            println!("Set {} = {}", key, value);
        }
        ConfigCommands::List => list(&Config::load(path)?, path),
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { force } => init(path, *force)?,
    }
    Ok(())
}

fn list(config: &Config, path: &Path) {
    let source = if path.exists() { "file" } else { "defaults" };
    println!("# {} ({})", path.display(), source);
    for key in Config::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Write the default config, refusing to replace an existing file unless forced
fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to replace it",
            path.display()
        );
    }

    let config = Config::default();
    config.save(path)?;
    println!("Created config file at {}", path.display());
    println!(
        "Serving on {} with reference actor {}",
        config.addr, config.reference_actor
    );
    Ok(())
}
