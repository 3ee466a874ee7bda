//! Configuration file
//!
//! JSON file, every key optional:
//!
//! ```json
//! { "schema_dir": "./schemas", "log_level": "info", "log_format": "compact" }
//! ```
//!
//! `RUST_LOG` overrides `log_level` when set.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single line
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory of additional schema files (optional)
    #[serde(default)]
    pub schema_dir: Option<PathBuf>,

    /// Log level filter (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (optional, default compact)
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_dir: None,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Loads the configuration file, falling back to defaults if it does not exist.
    ///
    /// A relative `schema_dir` is resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(Error::Config(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config {}: {}", path.display(), e)))?;

        config.schema_dir = config.schema_dir.take().map(|dir| match path.parent() {
            Some(base) if dir.is_relative() => base.join(dir),
            _ => dir,
        });

        Ok(config)
    }
}
