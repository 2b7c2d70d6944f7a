//! Configuration management for Mini Library

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LibraryConfig {
    /// Name shown in the welcome banner
    pub name: String,
    /// Accepted book genres, in display order
    pub genres: Vec<String>,
    /// Maximum number of books a member may hold at once
    pub max_loans_per_member: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// One of `compact`, `pretty` or `json`
    pub format: String,
    /// Log file path; logs go to stderr when unset
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub library: LibraryConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::builder(&run_mode)
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// `MINILIB_`-prefixed variables, `__` between nested keys, comma-separated genres
    fn environment() -> Environment {
        Environment::with_prefix("MINILIB")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("library.genres")
            .try_parsing(true)
    }

    fn builder(run_mode: &str) -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder()
            // Base configuration, optional so the binary runs from any directory
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: "Mini Library".to_string(),
            genres: [
                "Fiction",
                "Non-Fiction",
                "Science",
                "History",
                "Biography",
                "Fantasy",
                "Mystery",
            ]
            .iter()
            .map(|g| g.to_string())
            .collect(),
            max_loans_per_member: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            file: None,
        }
    }
}
