//! Configuration: explicit site roots instead of ambient working-directory state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Site configuration.
///
/// Every component receives its directories from here; nothing in the core
/// consults the process working directory on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site root holding `content/`, `themes/`, and `public/`
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Theme to build with; `None` means the sole theme in `themes/`
    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// Configuration rooted at `root` with defaults everywhere else.
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            theme: None,
            server: ServerConfig::default(),
        }
    }

    /// Load configuration from a YAML file.
    ///
    /// A relative `root` is resolved against the config file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        if config.root.is_relative() {
            if let Some(parent) = path.parent() {
                config.root = parent.join(&config.root);
            }
        }

        Ok(config)
    }

    /// Directory holding markup source files
    pub fn content_dir(&self) -> PathBuf {
        self.root.join("content")
    }

    /// Directory holding theme subdirectories
    pub fn themes_dir(&self) -> PathBuf {
        self.root.join("themes")
    }

    /// Directory artifacts are written to (created on demand, never pruned)
    pub fn output_dir(&self) -> PathBuf {
        self.root.join("public")
    }
}
