//! Configuration for the Products API demo

use core_config::{explorer::ExplorerSettings, server::ServerConfig, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub explorer: ExplorerSettings,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            explorer: ExplorerSettings::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
