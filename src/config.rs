use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::app_context::UpdatePolicy;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE: &str = "taskboard.db";

/// Runtime settings for `taskboard serve`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub database: String,
    /// Allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,
    /// Serve the GraphQL playground on `GET /graphql`
    pub playground: bool,
    pub update_policy: UpdatePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            cors_origin: None,
            playground: true,
            update_policy: UpdatePolicy::default(),
        }
    }
}

/// Values given on the command line; each one overrides the file.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub database: Option<String>,
    pub cors_origin: Option<String>,
    pub disable_playground: bool,
    pub update_policy: Option<UpdatePolicy>,
}

impl ServerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse server configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load the optional config file, then apply command-line overrides.
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.apply(overrides))
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(database) = overrides.database {
            self.database = database;
        }
        if overrides.cors_origin.is_some() {
            self.cors_origin = overrides.cors_origin;
        }
        if overrides.disable_playground {
            self.playground = false;
        }
        if let Some(update_policy) = overrides.update_policy {
            self.update_policy = update_policy;
        }
        self
    }
}
