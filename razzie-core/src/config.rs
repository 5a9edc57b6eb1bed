//! Configuration system for the razzie service.
//!
//! Uses `figment` for layered configuration: defaults -> config file ->
//! environment. Configuration is loaded from `razzie.toml` in the working
//! directory (or an explicit path) and `RAZZIE_`-prefixed environment
//! variables (`RAZZIE_SERVER__PORT`, `RAZZIE_DATA__CSV_PATH`, ...).

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "razzie.toml";

/// Top-level configuration for the razzie service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RazzieConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Configuration for the dataset source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the awards CSV file loaded on startup.
    pub csv_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("data/movielist.csv"),
        }
    }
}

/// Load the layered configuration.
///
/// An explicit `path` must exist; the implicit `razzie.toml` is optional.
/// Environment variables override file values in all cases.
pub fn load_config(path: Option<&Path>) -> Result<RazzieConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(RazzieConfig::default()));

    match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Toml::file(path));
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                figment = figment.merge(Toml::file(default));
            }
        }
    }

    figment
        .merge(Env::prefixed("RAZZIE_").split("__"))
        .extract()
        .map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })
}
