//! Project configuration management for `metahead.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                             |
//! |-----------|-----------------------------------------------------|
//! | `[build]` | Template path, output directory                     |
//! | `[meta]`  | Free-form head metadata mapping (see `meta::Meta`)  |

mod error;
mod meta;

pub use error::ConfigError;
pub use meta::{Meta, scalar};

use crate::{cli::Cli, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing metahead.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Head metadata mapping
    #[serde(default)]
    pub meta: Meta,
}

/// `[build]` section: where the template lives and where output goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Page template file, relative to the project root
    pub template: PathBuf,

    /// Output directory, relative to the project root
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            template: "index.html".into(),
            output: "public".into(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = if cli.config.is_absolute() {
            cli.config.clone()
        } else {
            std::env::current_dir()?.join(&cli.config)
        };

        if !config_path.exists() {
            log!(
                "error";
                "Config file '{}' not found. Run 'metahead preset' to create one.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        config.config_path = config_path;

        if let Some(output) = &cli.output {
            config.build.output = output.clone();
        }

        Ok(config)
    }

    /// Parse a config file from disk.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Ok(toml::from_str(&raw)?)
    }

    /// Template file path resolved against the project root.
    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.build.template)
    }

    /// Output directory resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.build.output)
    }
}
