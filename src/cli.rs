use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Fetch a short remote task list and edit it locally.
#[derive(Debug, Parser)]
#[command(name = "tasklist", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/tasklist/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the remote source URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Override the number of remote tasks requested
    #[arg(long, value_name = "N")]
    pub limit: Option<u32>,

    /// Do not fetch on startup
    #[arg(long)]
    pub no_fetch: bool,
}

impl Cli {
    /// Load the config file this invocation points at and apply overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(config)
    }

    /// Fold command-line overrides into `config` and revalidate.
    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if let Some(limit) = self.limit {
            config.source.limit = limit;
        }
        if self.no_fetch {
            config.app.fetch_on_start = false;
        }
        config.validate()?;
        Ok(config)
    }
}
