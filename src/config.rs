//! Configuration management for bivarmap.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classify::{AxisTitles, DEFAULT_UNIT};
use crate::error::{BivarmapError, Result};
use crate::palettes::{get_scheme, DEFAULT_SCHEME};

/// Command-line arguments for bivarmap
#[derive(Parser, Debug)]
#[command(name = "bivarmap")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the CSV file with one row per region
    pub data_file: PathBuf,

    /// Host address to bind to
    #[arg(short = 'H', long, env = "BIVARMAP_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "BIVARMAP_PORT")]
    pub port: Option<u16>,

    /// Scheme used when a request names none
    #[arg(short, long, env = "BIVARMAP_SCHEME")]
    pub scheme: Option<String>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "BIVARMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "BIVARMAP_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Dataset and classification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV column holding the region id
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// CSV column holding attribute A
    #[serde(default = "default_a_column")]
    pub a_column: String,

    /// CSV column holding attribute B
    #[serde(default = "default_b_column")]
    pub b_column: String,

    /// Display names of the two attributes
    #[serde(default)]
    pub titles: AxisTitles,

    /// One label per class, empty for none
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    /// Unit appended to values in tooltip text
    #[serde(default = "default_unit")]
    pub unit: String,

    /// Scheme used when a request names none
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Data configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        let args = Args::parse();
        Self::from_args(args)
    }

    /// Build configuration from parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(scheme) = args.scheme {
            config.data.default_scheme = scheme;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok((config, args.data_file))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server = other.server;
        self.data = other.data;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(BivarmapError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // 0 would bind to a random port
        if self.server.port == 0 {
            return Err(BivarmapError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(BivarmapError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        for (name, column) in [
            ("id_column", &self.data.id_column),
            ("a_column", &self.data.a_column),
            ("b_column", &self.data.b_column),
        ] {
            if column.is_empty() {
                return Err(BivarmapError::Config {
                    message: format!("{} cannot be empty", name),
                });
            }
        }

        get_scheme(&self.data.default_scheme).map_err(|e| BivarmapError::Config {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            id_column: default_id_column(),
            a_column: default_a_column(),
            b_column: default_b_column(),
            titles: AxisTitles::default(),
            labels: default_labels(),
            unit: default_unit(),
            default_scheme: default_scheme(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_id_column() -> String {
    "county".to_string()
}

fn default_a_column() -> String {
    "diabetes".to_string()
}

fn default_b_column() -> String {
    "obesity".to_string()
}

fn default_labels() -> Vec<String> {
    vec!["low".to_string(), String::new(), "high".to_string()]
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
