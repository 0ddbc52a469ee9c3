//! Layered settings for the `serve` command.
//!
//! Later sources override earlier ones:
//!
//! ```text
//! built-in defaults
//!   └─▶ config file (--config, or ./mm2calc.toml if present)
//!         └─▶ MM2CALC_* environment variables (MM2CALC_SERVER__PORT=8080)
//!               └─▶ PORT environment variable
//!                     └─▶ command-line flags
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Environment variable prefix for settings.
pub const ENV_PREFIX: &str = "MM2CALC";

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mm2calc";

/// All settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub log: LogSettings,
}

/// Where the web server listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogSettings {
    /// Filter directive, e.g. "info" or "mm2_web=debug". `RUST_LOG` wins over this.
    pub level: String,
}

impl Settings {
    /// Load settings from the process environment and an optional config file.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::load_with(config_file, vars)
    }

    /// Load settings using `vars` in place of the process environment.
    pub fn load_with(config_file: Option<&Path>, vars: HashMap<String, String>) -> Result<Self> {
        let port = vars
            .get("PORT")
            .map(|p| p.trim().parse::<u16>())
            .transpose()
            .context("PORT must be a port number between 0 and 65535")?;

        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("log.level", "info")?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("server.port", port.map(i64::from))?
            .build()
            .context("failed to load settings")?;

        config
            .try_deserialize()
            .context("invalid settings")
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(level) = log_level {
            self.log.level = level;
        }
        self
    }

    /// Web server configuration for these settings.
    pub fn server_config(&self) -> mm2_web::ServerConfig {
        mm2_web::ServerConfig::builder()
            .host_port(&self.server.host, self.server.port)
            .build()
    }
}
