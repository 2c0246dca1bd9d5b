use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Generate images from a text prompt in your terminal.
#[derive(Debug, Default, Parser)]
#[command(name = "imagegen", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/imagegen/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Generations endpoint (overrides config and OPENAI_API_IMAGE_URL)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Bearer credential (overrides config and OPENAI_API_KEY)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Terminal width at which the wide layout starts
    #[arg(long, value_name = "COLS")]
    pub breakpoint: Option<u16>,

    /// Log file (default: <data dir>/imagegen/imagegen.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file, applies command-line overrides and validates
    /// the result. An explicitly named config file must exist.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::ReadError {
                    path: path.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
                });
            }
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = Some(endpoint.clone());
        }
        if let Some(api_key) = &self.api_key {
            config.api.api_key = Some(api_key.clone());
        }
        if let Some(breakpoint) = self.breakpoint {
            config.layout.breakpoint_columns = breakpoint;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}
