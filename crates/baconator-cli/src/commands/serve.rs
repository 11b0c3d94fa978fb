//! Serve command

use std::sync::Arc;

use clap::Args;

use crate::config::Config;
use baconator_server::run_server;
use baconator_storage::MemoryStorage;

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(short, long, env = "BACONATOR_ADDR")]
    pub addr: Option<String>,

    /// Actor id that Bacon numbers are measured from
    #[arg(short, long, env = "BACONATOR_REFERENCE_ACTOR")]
    pub reference_actor: Option<String>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, mut config: Config) -> anyhow::Result<Config> {
        if let Some(addr) = &self.addr {
            config.set("addr", addr)?;
        }
        if let Some(reference_actor) = &self.reference_actor {
            config.set("reference_actor", reference_actor)?;
        }
        Ok(config)
    }
}

pub async fn run(args: &ServeArgs, config: Config) -> anyhow::Result<()> {
    let config = args.apply(config)?;
    tracing::info!("Reference actor: {}", config.reference_actor);

    let storage = Arc::new(MemoryStorage::new(&config.reference_actor));
    run_server(storage, config.server_config()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = ServeArgs {
            addr: Some("0.0.0.0:9090".into()),
            reference_actor: None,
        };
        let config = args.apply(Config::default()).unwrap();
        assert_eq!(config.addr, "0.0.0.0:9090");
        assert_eq!(config.reference_actor, baconator_core::DEFAULT_REFERENCE_ACTOR);
    }
}
